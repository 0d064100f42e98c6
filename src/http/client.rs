//! HTTP client setup and middleware configuration.
//!
//! The client talks to a single Plex server, so the token and the Plex
//! identification headers are installed as default headers once instead of
//! being added to every request.
//!
//! # Examples
//!
//! ```rust
//! use plex_asset_exporter::http::{create_http_client, plex_headers, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     retries: 2,
//!     proxy: None,
//!     headers: Some(plex_headers("my-token")?),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Proxy, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Product name sent to the server in `X-Plex-Product`.
pub const PRODUCT: &str = env!("CARGO_PKG_NAME");

/// Version sent to the server in `X-Plex-Version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const PLEX_TOKEN: &str = "x-plex-token";
const PLEX_PRODUCT: &str = "x-plex-product";
const PLEX_VERSION: &str = "x-plex-version";
const PLEX_CLIENT_IDENTIFIER: &str = "x-plex-client-identifier";

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Number of retries for transient failures. Zero disables the retry
    /// middleware entirely.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

/// Build the headers every Plex request carries: JSON responses, the access
/// token and the client identification.
pub fn plex_headers(token: &str) -> Result<HeaderMap> {
    let mut token = HeaderValue::from_str(token)
        .map_err(|_| Error::InvalidHeader("the token contains invalid characters".into()))?;
    token.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static(PLEX_TOKEN), token);
    headers.insert(
        HeaderName::from_static(PLEX_PRODUCT),
        HeaderValue::from_static(PRODUCT),
    );
    headers.insert(
        HeaderName::from_static(PLEX_VERSION),
        HeaderValue::from_static(VERSION),
    );
    headers.insert(
        HeaderName::from_static(PLEX_CLIENT_IDENTIFIER),
        HeaderValue::from_static(PRODUCT),
    );
    Ok(headers)
}

/// Build the URL of `path` on the server at `base`.
///
/// `path` is appended to `base` verbatim, so a server published under a
/// reverse-proxy prefix keeps its prefix. A `path` that is already an
/// absolute http(s) URL is used as is.
pub fn join_url(base: &str, path: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(path) {
        if matches!(url.scheme(), "http" | "https") {
            return Ok(url);
        }
    }

    let base = base.trim_end_matches('/');
    let joined = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };
    Url::parse(&joined)
        .map_err(|e| Error::InvalidUrl(format!("The url \"{joined}\" cannot be parsed: {e}")))
}

/// Creates an HTTP client with middleware configuration.
///
/// Requests are traced through `reqwest-tracing`; transient failures are
/// retried with exponential backoff when `config.retries` is non-zero.
pub fn create_http_client(config: HttpClientConfig) -> Result<ClientWithMiddleware> {
    let mut inner_client_builder = reqwest::Client::builder();

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    // Trace HTTP requests. See the tracing crate to make use of these traces.
    let mut builder = ClientBuilder::new(inner_client).with(TracingMiddleware::default());

    if config.retries > 0 {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);
        builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::USER_AGENT;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.retries, 0);
        assert!(config.proxy.is_none());
        assert!(config.headers.is_none());
    }

    #[test]
    fn test_create_http_client_default() {
        let client = create_http_client(HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_http_client_with_retries_and_headers() {
        let mut headers = plex_headers("abc").unwrap();
        headers.insert(USER_AGENT, HeaderValue::from_static("test-agent"));

        let config = HttpClientConfig {
            retries: 5,
            proxy: None,
            headers: Some(headers),
        };

        assert!(create_http_client(config).is_ok());
    }

    #[test]
    fn test_join_url_keeps_base_prefix() {
        let url = join_url("https://example.com/plex/", "/library/sections").unwrap();
        assert_eq!(url.as_str(), "https://example.com/plex/library/sections");

        let url = join_url("http://10.0.0.2:32400", "library/metadata/1/thumb/9").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.2:32400/library/metadata/1/thumb/9");
    }

    #[test]
    fn test_join_url_passes_absolute_urls_through() {
        let url = join_url("http://10.0.0.2:32400", "https://cdn.example.com/theme.mp3").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/theme.mp3");
    }

    #[test]
    fn test_join_url_rejects_garbage_base() {
        assert!(matches!(
            join_url("not a url", "/library/sections"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_plex_headers() {
        let headers = plex_headers("secret").unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        let token = headers.get(PLEX_TOKEN).unwrap();
        assert_eq!(token, "secret");
        assert!(token.is_sensitive());
        assert_eq!(headers.get(PLEX_PRODUCT).unwrap(), PRODUCT);
    }

    #[test]
    fn test_plex_headers_rejects_control_characters() {
        assert!(matches!(
            plex_headers("bad\ntoken"),
            Err(Error::InvalidHeader(_))
        ));
    }
}
