//! The capability set the exporter needs from a media server.

use super::model::{AssetRef, Episode, Item, Section, Season};
use crate::error::Result;

use async_trait::async_trait;
use indicatif::ProgressBar;
use std::path::Path;

/// Remote library operations consumed by the export driver.
///
/// [`PlexClient`](super::PlexClient) implements it over HTTP. Tests use
/// in-memory implementations.
#[async_trait]
pub trait LibraryClient: Send + Sync {
    /// Name the server reports for itself. Fails with
    /// [`Error::Connection`](crate::Error::Connection) when the server cannot
    /// be reached or refuses the credentials.
    async fn server_name(&self) -> Result<String>;

    /// All libraries on the server, whatever their kind.
    async fn list_sections(&self) -> Result<Vec<Section>>;

    /// Every item of `section`, in server order.
    async fn list_items(&self, section: &Section) -> Result<Vec<Item>>;

    /// Episodes below a show or a season identified by its rating key.
    async fn list_episodes(&self, rating_key: &str) -> Result<Vec<Episode>>;

    /// Seasons of a show.
    async fn list_seasons(&self, show: &Item) -> Result<Vec<Season>>;

    /// Fetch `asset` and write it to `destination`, creating the parent
    /// directory when missing. Returns the number of bytes written.
    async fn download(
        &self,
        asset: &AssetRef,
        destination: &Path,
        progress: &ProgressBar,
    ) -> Result<u64>;
}
