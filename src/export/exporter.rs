//! Export of the assets of one item or one season into its directory.

use super::asset::{season_poster_filename, AssetKind, AssetSelection};
use super::config::{ExportConfig, OutcomeCallback};
use super::summary::{AssetOutcome, ExportTally, Status};
use crate::error::Result;
use crate::library::{AssetRef, Item, LibraryClient, Season};
use crate::progress::ProgressDisplay;

use console::style;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

/// Writes the selected assets of items and seasons next to their media.
#[derive(Clone)]
pub struct AssetExporter {
    assets: AssetSelection,
    overwrite: bool,
    verbose: bool,
    on_complete: Option<Arc<OutcomeCallback>>,
}

impl std::fmt::Debug for AssetExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetExporter")
            .field("assets", &self.assets)
            .field("overwrite", &self.overwrite)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl From<&ExportConfig> for AssetExporter {
    fn from(config: &ExportConfig) -> Self {
        Self {
            assets: config.assets,
            overwrite: config.overwrite,
            verbose: config.verbose,
            on_complete: config.on_complete.clone(),
        }
    }
}

impl AssetExporter {
    /// Export the selected assets `item` carries into `directory`.
    pub async fn export_item<C>(
        &self,
        client: &C,
        item: &Item,
        directory: &Path,
        progress: &ProgressDisplay,
    ) -> Result<ExportTally>
    where
        C: LibraryClient + ?Sized,
    {
        let mut tally = ExportTally::default();
        for kind in AssetKind::ALL {
            if !self.assets.includes(kind) {
                continue;
            }
            let Some(asset) = kind.reference(item) else {
                continue;
            };
            let outcome = self
                .export_asset(client, kind, asset, directory.join(kind.filename()), progress)
                .await?;
            tally.record(&outcome);
        }
        Ok(tally)
    }

    /// Export the poster of `season` into `directory`, as
    /// `<season title>.jpg`.
    pub async fn export_season<C>(
        &self,
        client: &C,
        season: &Season,
        directory: &Path,
        progress: &ProgressDisplay,
    ) -> Result<ExportTally>
    where
        C: LibraryClient + ?Sized,
    {
        let mut tally = ExportTally::default();
        if !self.assets.includes(AssetKind::Poster) {
            return Ok(tally);
        }
        let Some(asset) = season.poster.as_ref() else {
            return Ok(tally);
        };
        let Some(filename) = season_poster_filename(season) else {
            return Ok(tally);
        };
        let outcome = self
            .export_asset(client, AssetKind::Poster, asset, directory.join(filename), progress)
            .await?;
        tally.record(&outcome);
        Ok(tally)
    }

    async fn export_asset<C>(
        &self,
        client: &C,
        kind: AssetKind,
        asset: &AssetRef,
        destination: PathBuf,
        progress: &ProgressDisplay,
    ) -> Result<AssetOutcome>
    where
        C: LibraryClient + ?Sized,
    {
        let outcome = if !self.overwrite && is_file(&destination).await {
            debug!("{:?} exists, skipping", destination);
            if self.verbose {
                progress.println(format!(
                    "{} {}",
                    style("SKIPPED:").yellow(),
                    destination.display()
                ));
            }
            AssetOutcome::new(kind, destination, Status::Skipped)
        } else {
            let label = destination
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let pb = progress.create_child_progress(&label);
            let result = client.download(asset, &destination, &pb).await;
            progress.finish_child(pb);

            let bytes = result.map_err(|e| e.download_failed(&destination))?;
            if self.verbose {
                progress.println(format!(
                    "{} {}",
                    style("DOWNLOADED:").green(),
                    destination.display()
                ));
            }
            AssetOutcome::new(kind, destination, Status::Downloaded { bytes })
        };

        if let Some(ref callback) = self.on_complete {
            callback(&outcome);
        }
        Ok(outcome)
    }
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}
