/// Knobs for the fetch engine. Fixed constants in spirit, but kept here so
/// tests can run with a tiny redirect budget or buffer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redirect hops allowed after the first attempt.
    pub max_redirects: u32,
    /// Value sent in the User-Agent request header.
    pub user_agent: String,
    /// Initial capacity of the response accumulation buffer.
    pub read_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_redirects: 10,
            user_agent: "fetchling/0.1".to_string(),
            read_buffer_size: 4096,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let defaults = Self::default();

        let max_redirects = std::env::var("FETCHLING_MAX_REDIRECTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_redirects);

        let user_agent =
            std::env::var("FETCHLING_USER_AGENT").unwrap_or(defaults.user_agent);

        let read_buffer_size = std::env::var("FETCHLING_READ_BUFFER_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.read_buffer_size);

        Self {
            max_redirects,
            user_agent,
            read_buffer_size,
        }
    }
}
