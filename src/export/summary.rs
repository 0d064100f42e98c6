//! Per-asset outcomes and the running totals of an export.
//!
//! # Examples
//!
//! ```rust
//! use plex_asset_exporter::export::{AssetKind, AssetOutcome, ExportTally, Status};
//!
//! let mut tally = ExportTally::default();
//! tally.record(&AssetOutcome::new(
//!     AssetKind::Poster,
//!     "/media/Movies/Foo (2020)/poster.jpg",
//!     Status::Downloaded { bytes: 2048 },
//! ));
//! tally.record(&AssetOutcome::new(
//!     AssetKind::Background,
//!     "/media/Movies/Foo (2020)/background.jpg",
//!     Status::Skipped,
//! ));
//!
//! assert_eq!(tally, ExportTally { downloaded: 1, skipped: 1 });
//! ```

use super::asset::AssetKind;

use std::ops::AddAssign;
use std::path::{Path, PathBuf};

/// What happened to one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The asset was fetched and written.
    Downloaded {
        /// Bytes written to disk.
        bytes: u64,
    },
    /// A file was already present and overwriting is off.
    Skipped,
}

/// The result of exporting one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetOutcome {
    kind: AssetKind,
    path: PathBuf,
    status: Status,
}

impl AssetOutcome {
    /// Create a new [`AssetOutcome`].
    pub fn new(kind: AssetKind, path: impl Into<PathBuf>, status: Status) -> Self {
        Self {
            kind,
            path: path.into(),
            status,
        }
    }

    /// Get the asset kind.
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Get the destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a reference to the outcome's status.
    pub fn status(&self) -> &Status {
        &self.status
    }
}

/// Downloaded and skipped counts of a run, or of part of one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportTally {
    pub downloaded: u64,
    pub skipped: u64,
}

impl ExportTally {
    /// Count `outcome`.
    pub fn record(&mut self, outcome: &AssetOutcome) {
        match outcome.status {
            Status::Downloaded { .. } => self.downloaded += 1,
            Status::Skipped => self.skipped += 1,
        }
    }
}

impl AddAssign for ExportTally {
    fn add_assign(&mut self, other: Self) {
        self.downloaded += other.downloaded;
        self.skipped += other.skipped;
    }
}
