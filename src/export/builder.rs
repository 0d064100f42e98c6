//! Builder pattern implementation for creating [`ExportDriver`] instances.
//!
//! # Examples
//!
//! ```rust
//! use plex_asset_exporter::export::{AssetSelection, ExportBuilder, Status};
//!
//! let driver = ExportBuilder::new()
//!     .assets(AssetSelection::Posters)
//!     .overwrite(true)
//!     .on_complete(|outcome| {
//!         if let Status::Downloaded { bytes } = outcome.status() {
//!             println!("{} ({} bytes)", outcome.path().display(), bytes);
//!         }
//!     })
//!     .build();
//! assert!(driver.overwrite());
//! ```

use super::asset::AssetSelection;
use super::config::ExportConfig;
use super::driver::ExportDriver;
use super::summary::AssetOutcome;
use crate::progress::StyleOptions;

use std::sync::Arc;

/// A builder used to create an [`ExportDriver`].
#[derive(Debug, Default)]
pub struct ExportBuilder {
    config: ExportConfig,
}

impl ExportBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ExportBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        ExportBuilder::default().style_options(StyleOptions::hidden())
    }

    /// Select the asset kinds to export.
    pub fn assets(mut self, assets: AssetSelection) -> Self {
        self.config.assets = assets;
        self
    }

    /// Set whether to overwrite existing files.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.config.overwrite = overwrite;
        self
    }

    /// Set whether to print status lines.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Name of the server the run is meant for. A different name reported
    /// by the server is logged as a warning.
    pub fn server(mut self, server: Option<String>) -> Self {
        self.config.server = server;
        self
    }

    /// Set the progress bar style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback for when each asset is downloaded or skipped.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&AssetOutcome) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Create the [`ExportDriver`] with the specified options.
    pub fn build(self) -> ExportDriver {
        ExportDriver::new(self.config)
    }
}
