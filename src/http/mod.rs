//! HTTP/1.1 response handling.
//!
//! The request side of an exchange is a fixed byte string built by the fetch
//! engine, so this module only deals with responses:
//!
//! - **`head`**: parses the status line and header block of a raw response
//! - **`chunked`**: reassembles a chunked transfer-encoded body

pub mod chunked;
pub mod head;
