//! Fetchling - Minimal HTTP/HTTPS fetcher
//!
//! Core library: URL parsing, response parsing, chunked decoding and the
//! redirect-following retrieval engine.

pub mod config;
pub mod fetch;
pub mod http;
pub mod url;
