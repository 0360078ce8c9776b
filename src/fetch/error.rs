use crate::http::chunked::ChunkedError;
use thiserror::Error;

/// Everything that can go wrong on the way to a decoded body.
///
/// The CLI collapses all of these into a bare nonzero exit, but the variants
/// stay distinct so tests and library callers can tell a bad URL from a
/// refused connection from an exhausted redirect budget.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid or unsupported url")]
    InvalidUrl,

    #[error("connection failed: {0}")]
    Connect(#[from] std::io::Error),

    #[error("invalid tls server name")]
    InvalidServerName,

    #[error("response missing header terminator")]
    MissingHeaderTerminator,

    #[error("unparsable status line")]
    InvalidStatusLine,

    #[error("redirect without a location header")]
    MissingLocation,

    #[error("unsupported location form: {0:?}")]
    UnsupportedLocation(String),

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("chunked decode failed: {0}")]
    Chunked(#[from] ChunkedError),
}
