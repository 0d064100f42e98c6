//! Streaming transfer of one remote resource to a local file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use plex_asset_exporter::download::Download;
//! use plex_asset_exporter::http::{create_http_client, HttpClientConfig};
//! use indicatif::ProgressBar;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let download = Download::new(
//!     "http://10.0.0.2:32400",
//!     "/library/metadata/42/thumb/1690000000",
//!     "/media/Movies/Foo (2020)/poster.jpg",
//! )?;
//! let bytes = download.fetch(&client, &ProgressBar::hidden()).await?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::http::join_url;

use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::path::{Path, PathBuf};
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

/// A resource to fetch and the file it goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// URL of the resource.
    pub url: Url,
    /// Full path of the file written on disk.
    pub destination: PathBuf,
}

impl Download {
    /// Creates a new [`Download`] for `reference` on the server at `base_url`.
    pub fn new(base_url: &str, reference: &str, destination: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            url: join_url(base_url, reference)?,
            destination: destination.as_ref().to_path_buf(),
        })
    }

    /// Fetches the resource and writes it to disk, replacing any existing
    /// file. Returns the number of bytes written.
    ///
    /// The body is streamed chunk by chunk into the file and `progress`
    /// advances with every chunk. A failure midway leaves the partial file
    /// in place.
    pub async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        progress: &ProgressBar,
    ) -> Result<u64> {
        debug!("Fetching {}", self.url);
        let res = client.get(self.url.clone()).send().await?;
        let res = res.error_for_status()?;

        if let Some(length) = res.content_length() {
            progress.set_length(length);
        }

        // Prepare the destination directory/file.
        if let Some(output_dir) = self.destination.parent() {
            debug!("Creating destination directory {:?}", output_dir);
            fs::create_dir_all(output_dir).await?;
        }

        debug!("Creating destination file {:?}", &self.destination);
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.destination)
            .await?;

        let mut written: u64 = 0;

        debug!("Retrieving chunks...");
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            let chunk_size = chunk.len() as u64;
            file.write_all_buf(&mut chunk).await?;
            written += chunk_size;
            progress.inc(chunk_size);
        }
        file.flush().await?;

        Ok(written)
    }
}
