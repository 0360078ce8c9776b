//! TLS client setup.
//!
//! A single `ClientConfig` backed by the webpki root store; the server
//! certificate is validated against the connecting hostname with no pinning,
//! custom anchors, or client certificates.

use rustls::{ClientConfig, RootCertStore};
use std::sync::Arc;
use tokio_rustls::TlsConnector;

/// Builds the connector once; the engine reuses it for every https hop.
pub fn connector() -> TlsConnector {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    TlsConnector::from(Arc::new(config))
}
