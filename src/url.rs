use std::fmt;

/// URL scheme. Only plain HTTP and TLS are recognized; anything else is a
/// parse failure rather than a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Well-known port used when the authority carries no explicit one.
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL broken into the pieces the fetch loop needs. Built fresh on every
/// redirect hop and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    /// Always non-empty and always starts with `/`.
    pub path: String,
}

impl ParsedUrl {
    /// Splits a URL string into scheme, host, port and path.
    ///
    /// Returns `None` for anything malformed: missing or unknown scheme,
    /// empty authority or host, or a port that is not a plain decimal number
    /// fitting in 16 bits. No host syntax validation happens here; a bogus host
    /// surfaces later as a connection failure.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();

        let (scheme, rest) = if let Some(rest) = url.strip_prefix("http://") {
            (Scheme::Http, rest)
        } else if let Some(rest) = url.strip_prefix("https://") {
            (Scheme::Https, rest)
        } else {
            return None;
        };

        // Everything before the first slash is the authority; the slash and
        // everything after it is the path.
        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };

        if authority.is_empty() {
            return None;
        }

        // host:port, splitting on the last colon so "a:b:c" keeps "a:b" as
        // the host. IPv6 literals are not supported.
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port_str)) => {
                if port_str.is_empty() || !port_str.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                (host, port_str.parse::<u16>().ok()?)
            }
            None => (authority, scheme.default_port()),
        };

        // ":8080" leaves nothing in front of the colon
        if host.is_empty() {
            return None;
        }

        Some(Self {
            scheme,
            host: host.to_string(),
            port,
            path: path.to_string(),
        })
    }
}
