//! Orchestration of one export run.
//!
//! A run is a strict linear walk: pick the library, then for every item
//! resolve its directory and export its assets, then for shows do the same
//! for every season. The first error ends the run. Files written before it
//! stay on disk.

use super::config::ExportConfig;
use super::exporter::AssetExporter;
use super::paths::{movie_directory, season_directory, show_directory};
use super::summary::ExportTally;
use crate::error::{Error, Result};
use crate::library::{select_section, Item, LibraryClient, Section, SectionKind};
use crate::progress::ProgressDisplay;

use std::path::PathBuf;
use tracing::{debug, info, warn};

/// The result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Library that was exported.
    pub library: Section,
    /// Downloaded and skipped asset counts.
    pub tally: ExportTally,
}

/// Represents the export controller.
///
/// A driver can be created via its builder:
///
/// ```rust
/// use plex_asset_exporter::export::ExportBuilder;
///
/// let driver = ExportBuilder::hidden().verbose(false).build();
/// assert!(!driver.overwrite());
/// ```
#[derive(Debug, Clone)]
pub struct ExportDriver {
    config: ExportConfig,
}

impl ExportDriver {
    pub(crate) fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Gets the configuration the driver runs with.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Gets whether existing files are replaced.
    pub fn overwrite(&self) -> bool {
        self.config.overwrite
    }

    /// Export the library named `requested`, or the one `choose` picks when
    /// there is no such movie or show library.
    pub async fn run<C, F>(
        &self,
        client: &C,
        requested: Option<&str>,
        choose: F,
    ) -> Result<ExportReport>
    where
        C: LibraryClient + ?Sized,
        F: FnOnce(&[Section]) -> Result<usize>,
    {
        let server = client.server_name().await?;
        info!("Connected to {}", server);
        if let Some(expected) = self.config.server.as_deref() {
            if expected != server {
                warn!("Expected server {:?} but connected to {:?}", expected, server);
            }
        }

        let library = select_section(client.list_sections().await?, requested, choose)?;
        info!("Exporting {} library {:?}", library.kind, library.title);

        let progress = ProgressDisplay::new(self.config.style_options.clone());
        if self.config.verbose {
            progress.println(format!("LIBRARY: {}", library.title));
            progress.println(format!("ASSETS: {}", self.config.assets));
            progress.println(format!("OVERWRITE: {}", self.config.overwrite));
            progress.println("\nGetting library items...");
        }

        let items = client.list_items(&library).await?;
        debug!("{} items in {:?}", items.len(), library.title);
        progress.set_items(items.len());

        let exporter = AssetExporter::from(&self.config);
        let mut tally = ExportTally::default();
        for item in &items {
            progress.set_current(&item.title);
            if self.config.verbose {
                progress.println(format!("\nITEM: {}", item.title));
            }

            tally += self
                .export_item(client, library.kind, item, &exporter, &progress)
                .await?;
            progress.increment_main();
        }
        progress.finish();

        Ok(ExportReport { library, tally })
    }

    async fn export_item<C>(
        &self,
        client: &C,
        kind: SectionKind,
        item: &Item,
        exporter: &AssetExporter,
        progress: &ProgressDisplay,
    ) -> Result<ExportTally>
    where
        C: LibraryClient + ?Sized,
    {
        let directory = match kind {
            SectionKind::Movie => movie_directory(item),
            SectionKind::Show => show_directory(&client.list_episodes(&item.rating_key).await?),
            // never selected
            SectionKind::Unsupported => None,
        };
        let directory = resolved(directory, &item.title)?;
        let mut tally = exporter
            .export_item(client, item, &directory, progress)
            .await?;

        if kind == SectionKind::Show {
            for season in client.list_seasons(item).await? {
                let title = season.title.as_deref().unwrap_or(&item.title);
                let episodes = client.list_episodes(&season.rating_key).await?;
                let directory = resolved(season_directory(&episodes), title)?;
                if self.config.verbose {
                    progress.println(format!("SEASON: {}", title));
                }
                tally += exporter
                    .export_season(client, &season, &directory, progress)
                    .await?;
            }
        }
        Ok(tally)
    }
}

fn resolved(directory: Option<PathBuf>, title: &str) -> Result<PathBuf> {
    directory.ok_or_else(|| Error::PathResolution {
        title: title.to_string(),
    })
}
