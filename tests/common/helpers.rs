use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use indicatif::ProgressBar;
use tempfile::TempDir;

use plex_asset_exporter::library::{
    AssetRef, Episode, Item, LibraryClient, Media, MediaPart, Season, Section, SectionKind,
};
use plex_asset_exporter::{Error, ExportBuilder, Result};

// Common test constants
pub const TEST_SERVER: &str = "attic";
pub const MOVIES: &str = "Movies";
pub const SHOWS: &str = "TV Shows";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// The temporary directory as a server-style `/`-delimited path
pub fn root_of(dir: &TempDir) -> String {
    dir.path().to_string_lossy().into_owned()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that nothing exists at the given path
pub fn assert_file_missing(path: &Path) {
    assert!(!path.exists(), "File should not exist at path: {:?}", path);
}

/// Writes a placeholder file, creating its directory
pub fn create_existing_file(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).expect("Failed to create directory");
    fs::write(path, content).expect("Failed to write file");
}

// === Library Data Helpers ===

pub fn section(key: &str, title: &str, kind: SectionKind) -> Section {
    Section {
        key: key.into(),
        title: title.into(),
        kind,
    }
}

pub fn media(file: &str) -> Vec<Media> {
    vec![Media {
        parts: vec![MediaPart { file: file.into() }],
    }]
}

pub fn asset(locator: &str) -> Option<AssetRef> {
    Some(AssetRef::new(locator))
}

/// A movie whose file lives at `file` and that carries every asset kind
pub fn movie(key: &str, title: &str, file: &str) -> Item {
    Item {
        rating_key: key.into(),
        title: title.into(),
        media: media(file),
        poster: asset(&format!("/library/metadata/{key}/thumb/1")),
        background: asset(&format!("/library/metadata/{key}/art/1")),
        banner: asset(&format!("/library/metadata/{key}/banner/1")),
        theme: asset(&format!("/library/metadata/{key}/theme/1")),
    }
}

/// A show with a poster reference only
pub fn show(key: &str, title: &str) -> Item {
    Item {
        rating_key: key.into(),
        title: title.into(),
        poster: asset(&format!("/library/metadata/{key}/thumb/1")),
        ..Item::default()
    }
}

pub fn season(key: &str, title: &str) -> Season {
    Season {
        rating_key: key.into(),
        title: Some(title.into()),
        poster: asset(&format!("/library/metadata/{key}/thumb/1")),
    }
}

pub fn episode(file: &str) -> Episode {
    Episode {
        title: "Episode".into(),
        media: media(file),
    }
}

// === Fake Library Client ===

/// In-memory [`LibraryClient`] that writes the asset locator as file content.
#[derive(Default)]
pub struct FakeLibrary {
    pub unreachable: bool,
    pub sections: Vec<Section>,
    pub items: HashMap<String, Vec<Item>>,
    pub episodes: HashMap<String, Vec<Episode>>,
    pub seasons: HashMap<String, Vec<Season>>,
    pub failing: HashSet<String>,
    pub downloads: Mutex<Vec<(AssetRef, PathBuf)>>,
}

impl FakeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: Section, items: Vec<Item>) -> Self {
        self.items.insert(section.key.clone(), items);
        self.sections.push(section);
        self
    }

    pub fn with_episodes(mut self, rating_key: &str, episodes: Vec<Episode>) -> Self {
        self.episodes.insert(rating_key.into(), episodes);
        self
    }

    pub fn with_seasons(mut self, show_key: &str, seasons: Vec<Season>) -> Self {
        self.seasons.insert(show_key.into(), seasons);
        self
    }

    pub fn failing_on(mut self, locator: &str) -> Self {
        self.failing.insert(locator.into());
        self
    }

    /// Destinations of every download call, in order
    pub fn downloaded_paths(&self) -> Vec<PathBuf> {
        self.downloads
            .lock()
            .unwrap()
            .iter()
            .map(|(_, path)| path.clone())
            .collect()
    }

    pub fn download_count(&self) -> usize {
        self.downloads.lock().unwrap().len()
    }
}

#[async_trait]
impl LibraryClient for FakeLibrary {
    async fn server_name(&self) -> Result<String> {
        if self.unreachable {
            return Err(Error::Connection {
                url: "http://fake".into(),
                source: Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, "refused")),
            });
        }
        Ok(TEST_SERVER.into())
    }

    async fn list_sections(&self) -> Result<Vec<Section>> {
        Ok(self.sections.clone())
    }

    async fn list_items(&self, section: &Section) -> Result<Vec<Item>> {
        Ok(self.items.get(&section.key).cloned().unwrap_or_default())
    }

    async fn list_episodes(&self, rating_key: &str) -> Result<Vec<Episode>> {
        Ok(self.episodes.get(rating_key).cloned().unwrap_or_default())
    }

    async fn list_seasons(&self, show: &Item) -> Result<Vec<Season>> {
        Ok(self.seasons.get(&show.rating_key).cloned().unwrap_or_default())
    }

    async fn download(
        &self,
        asset: &AssetRef,
        destination: &Path,
        _progress: &ProgressBar,
    ) -> Result<u64> {
        self.downloads
            .lock()
            .unwrap()
            .push((asset.clone(), destination.to_path_buf()));

        if self.failing.contains(asset.as_str()) {
            return Err(io::Error::new(io::ErrorKind::Other, "server returned 500").into());
        }

        if let Some(dir) = destination.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(destination, asset.as_str())?;
        Ok(asset.as_str().len() as u64)
    }
}

// === Library Fixtures ===

/// One show with one season and one episode, rooted in `root`
pub fn single_show_library(root: &str) -> FakeLibrary {
    let file = format!("{root}/Show/Season 01/ep.mkv");
    FakeLibrary::new()
        .with_section(section("2", SHOWS, SectionKind::Show), vec![show("100", "Show")])
        .with_episodes("100", vec![episode(&file)])
        .with_seasons("100", vec![season("101", "Season 01")])
        .with_episodes("101", vec![episode(&file)])
}

/// One movie carrying every asset kind, rooted in `root`
pub fn single_movie_library(root: &str) -> FakeLibrary {
    FakeLibrary::new().with_section(
        section("1", MOVIES, SectionKind::Movie),
        vec![movie("42", "Foo", &format!("{root}/Movies/Foo (2020)/Foo.mkv"))],
    )
}

// === Driver Helpers ===

/// A driver without progress bars
pub fn create_test_builder() -> ExportBuilder {
    ExportBuilder::hidden()
}

/// Chooser for runs that must never prompt
pub fn never_prompt(_: &[Section]) -> Result<usize> {
    panic!("the library prompt must not be shown")
}
