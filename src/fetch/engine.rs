//! Redirect-following retrieval loop.
//!
//! Each hop opens a fresh connection, sends one fixed-shape GET request and
//! reads until the peer closes. The loop ends on a 200 (success), a
//! non-redirect status (failure), or once the redirect budget runs out.

use crate::config::Config;
use crate::fetch::error::FetchError;
use crate::fetch::tls;
use crate::http::chunked::decode_chunked;
use crate::http::head::parse_response_head;
use crate::url::{ParsedUrl, Scheme};
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use rustls::pki_types::ServerName;
use tokio_rustls::TlsConnector;

pub struct Fetcher {
    config: Config,
    tls: TlsConnector,
}

impl Fetcher {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tls: tls::connector(),
        }
    }

    /// Fetches `url`, following up to `max_redirects` hops, and returns the
    /// decoded body of a terminal 200 response.
    pub async fn retrieve(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut url = url.to_string();
        let mut redirects = 0u32;

        while redirects <= self.config.max_redirects {
            let target = ParsedUrl::parse(&url).ok_or(FetchError::InvalidUrl)?;

            tracing::debug!(
                host = %target.host,
                port = target.port,
                path = %target.path,
                "requesting"
            );

            let raw = self.exchange(&target).await?;

            let header_end =
                find_blank_line(&raw).ok_or(FetchError::MissingHeaderTerminator)?;
            let head = parse_response_head(&raw[..header_end]);
            let status = head.status.ok_or(FetchError::InvalidStatusLine)?;

            if (300..=399).contains(&status) {
                let location = head.field("location").ok_or(FetchError::MissingLocation)?;
                url = next_url(&target, location)?;
                redirects += 1;

                tracing::debug!(status, next = %url, hop = redirects, "following redirect");
                continue;
            }

            if status != 200 {
                tracing::warn!(status, "terminal non-200 response");
                return Err(FetchError::Status(status));
            }

            let body = &raw[header_end + 4..];

            let chunked = head
                .field("transfer-encoding")
                .is_some_and(|v| v.to_ascii_lowercase().contains("chunked"));

            let body = if chunked {
                decode_chunked(body)?
            } else {
                body.to_vec()
            };

            tracing::info!(bytes = body.len(), "fetch complete");
            return Ok(body);
        }

        tracing::warn!(cap = self.config.max_redirects, "redirect budget exhausted");
        Err(FetchError::TooManyRedirects)
    }

    /// One full request/response cycle. The socket lives only inside this
    /// call, so it is closed on every exit path before the next hop starts.
    async fn exchange(&self, target: &ParsedUrl) -> Result<Vec<u8>, FetchError> {
        let stream = TcpStream::connect((target.host.as_str(), target.port)).await?;

        match target.scheme {
            Scheme::Http => self.send_and_collect(stream, target).await,
            Scheme::Https => {
                let server_name = ServerName::try_from(target.host.clone())
                    .map_err(|_| FetchError::InvalidServerName)?;
                let stream = self.tls.connect(server_name, stream).await?;
                self.send_and_collect(stream, target).await
            }
        }
    }

    async fn send_and_collect<S>(
        &self,
        mut stream: S,
        target: &ParsedUrl,
    ) -> Result<Vec<u8>, FetchError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let request = build_request(target, &self.config.user_agent)?;
        stream.write_all(&request).await?;
        stream.flush().await?;

        // Read everything; the response is framed by connection close.
        let mut buf = BytesMut::with_capacity(self.config.read_buffer_size);
        loop {
            let n = stream.read_buf(&mut buf).await?;
            if n == 0 {
                break;
            }
        }

        Ok(buf.to_vec())
    }
}

/// Builds the request bytes for one hop.
///
/// Public so tests can assert on the exact wire shape.
pub fn build_request(target: &ParsedUrl, user_agent: &str) -> Result<Vec<u8>, FetchError> {
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\nUser-Agent: {}\r\n\r\n",
        target.path, target.host, user_agent
    );

    // The wire format is ASCII-only; anything else never leaves the client.
    if !request.is_ascii() {
        return Err(FetchError::InvalidUrl);
    }

    Ok(request.into_bytes())
}

/// Resolves a `Location` header against the URL that produced it.
///
/// Absolute http(s) URLs are taken verbatim; an absolute path is rejoined
/// with the current scheme and host (an explicit port on the current URL is
/// not carried over). Everything else is unsupported.
pub fn next_url(current: &ParsedUrl, location: &str) -> Result<String, FetchError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(location.to_string())
    } else if location.starts_with('/') {
        Ok(format!("{}://{}{}", current.scheme, current.host, location))
    } else {
        Err(FetchError::UnsupportedLocation(location.to_string()))
    }
}

fn find_blank_line(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
