use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkedError {
    /// Ran out of bytes before a size line or chunk payload completed.
    #[error("chunked stream truncated")]
    Truncated,
    /// Size line was empty or not a hexadecimal number.
    #[error("invalid chunk size line")]
    InvalidSize,
    /// Chunk payload was not followed by CRLF.
    #[error("malformed chunk boundary")]
    BadBoundary,
}

/// Reassembles a chunked transfer-encoded body.
///
/// Walks the buffer one size-line-plus-payload at a time until the zero-size
/// chunk, ignoring any trailer bytes that follow it. Chunk extensions
/// (`;`-suffixed size lines) are not supported and fail the size parse.
pub fn decode_chunked(body: &[u8]) -> Result<Vec<u8>, ChunkedError> {
    let mut index = 0;
    let mut out = Vec::new();

    loop {
        let line_end = find_crlf(&body[index..]).ok_or(ChunkedError::Truncated)? + index;

        let size_line = std::str::from_utf8(&body[index..line_end])
            .map_err(|_| ChunkedError::InvalidSize)?
            .trim();
        index = line_end + 2;

        if size_line.is_empty() {
            return Err(ChunkedError::InvalidSize);
        }

        let chunk_size =
            usize::from_str_radix(size_line, 16).map_err(|_| ChunkedError::InvalidSize)?;

        if chunk_size == 0 {
            return Ok(out);
        }

        if chunk_size > body.len() - index {
            return Err(ChunkedError::Truncated);
        }

        out.extend_from_slice(&body[index..index + chunk_size]);
        index += chunk_size;

        if body.get(index..index + 2) != Some(b"\r\n".as_slice()) {
            return Err(ChunkedError::BadBoundary);
        }
        index += 2;
    }
}

fn find_crlf(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}
