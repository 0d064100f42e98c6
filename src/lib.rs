//! Export posters, background art, banners and theme music of a Plex
//! library as files next to each item's media.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plex_asset_exporter::{library::prompt_section, ExportBuilder, PlexClient, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let plex = PlexClient::builder("http://10.0.0.2:32400", "my-token").build()?;
//! let report = ExportBuilder::new()
//!     .verbose(true)
//!     .build()
//!     .run(&plex, Some("Movies"), prompt_section)
//!     .await?;
//! println!("downloaded {}, skipped {}", report.tally.downloaded, report.tally.skipped);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`library`] - the library data model, the [`LibraryClient`] trait and its Plex implementation
//! - [`export`] - path resolution, asset export and the run driver
//! - [`download`] - streaming an asset to disk
//! - [`error`] - the [`Error`] enum
//! - [`http`] - HTTP client setup
//! - [`progress`] - progress bars and console lines
//! - [`cli`] - command line arguments

pub mod cli;
pub mod download;
pub mod error;
pub mod export;
pub mod http;
pub mod library;
pub mod progress;

pub use download::Download;
pub use error::{Error, Result};
pub use export::{
    AssetKind, AssetOutcome, AssetSelection, ExportBuilder, ExportDriver, ExportReport,
    ExportTally, Status,
};
pub use http::{create_http_client, HttpClientConfig};
pub use library::{LibraryClient, PlexClient};
pub use progress::{ProgressBarOpts, ProgressDisplay, StyleOptions};
