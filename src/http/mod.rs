//! HTTP module containing HTTP client functionality.
//!
//! - [`client`] - client creation, URL joining, Plex headers and middleware configuration

pub mod client;

pub use client::{create_http_client, join_url, plex_headers, HttpClientConfig};
