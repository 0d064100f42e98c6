//! Configuration structures and defaults for an export run.

use super::asset::AssetSelection;
use super::summary::AssetOutcome;
use crate::progress::StyleOptions;

use std::fmt;
use std::sync::Arc;

/// Callback type for asset completion events.
pub type OutcomeCallback = Box<dyn Fn(&AssetOutcome) + Send + Sync>;

/// Configuration structure for the export driver.
#[derive(Clone)]
pub struct ExportConfig {
    /// Asset kinds to export.
    pub assets: AssetSelection,
    /// Re-download and replace files that already exist.
    pub overwrite: bool,
    /// Print progress and status lines on the console.
    pub verbose: bool,
    /// Server name the operator expects to be talking to.
    pub server: Option<String>,
    /// Progress bar style options.
    pub style_options: StyleOptions,
    /// Callback for every exported or skipped asset.
    pub on_complete: Option<Arc<OutcomeCallback>>,
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("assets", &self.assets)
            .field("overwrite", &self.overwrite)
            .field("verbose", &self.verbose)
            .field("server", &self.server)
            .field("style_options", &self.style_options)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            assets: AssetSelection::All,
            overwrite: false,
            verbose: false,
            server: None,
            style_options: StyleOptions::default(),
            on_complete: None,
        }
    }
}
