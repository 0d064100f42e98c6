//! Export module: turning library items into files next to their media.
//!
//! - [`asset`] - asset kinds, the `--assets` selection and file names
//! - [`paths`] - locating an item's or season's directory from its media files
//! - [`exporter`] - the guarded download of one item's or season's assets
//! - [`driver`] - the full run, from library selection to the final tally
//! - [`builder`] / [`config`] - configuring a run
//! - [`summary`] - per-asset outcomes and tallies
//!
//! # Examples
//!
//! ```rust,no_run
//! use plex_asset_exporter::export::{AssetSelection, ExportBuilder};
//! use plex_asset_exporter::library::{prompt_section, PlexClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let plex = PlexClient::builder("http://10.0.0.2:32400", "my-token").build()?;
//! let report = ExportBuilder::new()
//!     .assets(AssetSelection::Posters)
//!     .build()
//!     .run(&plex, Some("Movies"), prompt_section)
//!     .await?;
//! println!("{} downloaded", report.tally.downloaded);
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod builder;
pub mod config;
pub mod driver;
pub mod exporter;
pub mod paths;
pub mod summary;

pub use asset::{season_poster_filename, AssetKind, AssetSelection};
pub use builder::ExportBuilder;
pub use config::{ExportConfig, OutcomeCallback};
pub use driver::{ExportDriver, ExportReport};
pub use exporter::AssetExporter;
pub use paths::{movie_directory, resolve_path, season_directory, show_directory, PathTarget};
pub use summary::{AssetOutcome, ExportTally, Status};
