//! [`LibraryClient`] over the Plex Media Server HTTP API.
//!
//! Responses are requested as JSON. Every listing comes wrapped in a
//! `MediaContainer` object whose payload sits under `Directory` (sections)
//! or `Metadata` (items, seasons, episodes).

use super::client::LibraryClient;
use super::model::{AssetRef, Episode, Item, Section, Season};
use crate::download::Download;
use crate::error::{Error, Result};
use crate::http::{create_http_client, join_url, plex_headers, HttpClientConfig};

use async_trait::async_trait;
use indicatif::ProgressBar;
use reqwest::Proxy;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(rename = "MediaContainer")]
    container: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Identity {
    #[serde(default)]
    friendly_name: Option<String>,
    #[serde(default)]
    machine_identifier: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Directories<T> {
    #[serde(rename = "Directory", default = "Vec::new")]
    entries: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Metadata<T> {
    #[serde(rename = "Metadata", default = "Vec::new")]
    entries: Vec<T>,
}

/// A connection to one Plex Media Server.
///
/// ```rust,no_run
/// use plex_asset_exporter::library::{LibraryClient, PlexClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let plex = PlexClient::builder("http://10.0.0.2:32400", "my-token").build()?;
/// println!("connected to {}", plex.server_name().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PlexClient {
    base_url: String,
    client: ClientWithMiddleware,
}

impl fmt::Debug for PlexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlexClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// A builder used to create a [`PlexClient`].
#[derive(Debug)]
pub struct PlexClientBuilder {
    base_url: String,
    token: String,
    retries: u32,
    proxy: Option<Proxy>,
}

impl PlexClientBuilder {
    /// Set the number of transport retries for transient failures.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Route every request through `proxy`.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Create the [`PlexClient`] with the specified options.
    pub fn build(self) -> Result<PlexClient> {
        // Fail early on a malformed address rather than on the first request.
        join_url(&self.base_url, "/")?;

        let client = create_http_client(HttpClientConfig {
            retries: self.retries,
            proxy: self.proxy,
            headers: Some(plex_headers(&self.token)?),
        })?;

        Ok(PlexClient {
            base_url: self.base_url,
            client,
        })
    }
}

impl PlexClient {
    /// Start configuring a client for the server at `base_url`.
    pub fn builder(base_url: impl Into<String>, token: impl Into<String>) -> PlexClientBuilder {
        PlexClientBuilder {
            base_url: base_url.into(),
            token: token.into(),
            retries: 0,
            proxy: None,
        }
    }

    /// Address of the server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = join_url(&self.base_url, path)?;
        debug!("GET {}", url);
        let res = self.client.get(url).send().await?.error_for_status()?;
        let envelope: Envelope<T> = res.json().await?;
        Ok(envelope.container)
    }
}

#[async_trait]
impl LibraryClient for PlexClient {
    async fn server_name(&self) -> Result<String> {
        let identity: Identity = self.get("/").await.map_err(|e| Error::Connection {
            url: self.base_url.clone(),
            source: Box::new(e),
        })?;
        Ok(identity
            .friendly_name
            .or(identity.machine_identifier)
            .unwrap_or_else(|| self.base_url.clone()))
    }

    async fn list_sections(&self) -> Result<Vec<Section>> {
        let sections: Directories<Section> = self.get("/library/sections").await?;
        Ok(sections.entries)
    }

    async fn list_items(&self, section: &Section) -> Result<Vec<Item>> {
        let items: Metadata<Item> = self
            .get(&format!("/library/sections/{}/all", section.key))
            .await?;
        Ok(items.entries)
    }

    async fn list_episodes(&self, rating_key: &str) -> Result<Vec<Episode>> {
        let episodes: Metadata<Episode> = self
            .get(&format!("/library/metadata/{rating_key}/allLeaves"))
            .await?;
        Ok(episodes.entries)
    }

    async fn list_seasons(&self, show: &Item) -> Result<Vec<Season>> {
        let seasons: Metadata<Season> = self
            .get(&format!(
                "/library/metadata/{}/children?excludeAllLeaves=1",
                show.rating_key
            ))
            .await?;
        Ok(real_seasons(seasons.entries))
    }

    async fn download(
        &self,
        asset: &AssetRef,
        destination: &Path,
        progress: &ProgressBar,
    ) -> Result<u64> {
        Download::new(&self.base_url, asset.as_str(), destination)?
            .fetch(&self.client, progress)
            .await
    }
}

/// Drop entries that only aggregate other seasons, such as "All episodes".
fn real_seasons(entries: Vec<Season>) -> Vec<Season> {
    entries
        .into_iter()
        .filter(|season| !season.rating_key.is_empty())
        .collect()
}
