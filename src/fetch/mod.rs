//! Resource retrieval.
//!
//! This module owns the network side of the client: connection setup (plain
//! or TLS), request transmission, and the redirect-following control loop.

pub mod engine;
pub mod error;
pub mod tls;

pub use engine::Fetcher;
pub use error::FetchError;
