//! Library data model.
//!
//! These are transient views of what the media server reports for one run.
//! Nothing here is cached or written back. Every optional asset is an
//! explicit `Option<AssetRef>` so "does this item have a banner" is a plain
//! `is_some()` check.

use serde::Deserialize;
use std::fmt;

/// Type of content stored in a [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Movie library.
    Movie,
    /// TV show library.
    Show,
    /// Music, photos or anything else the exporter does not handle.
    #[serde(other)]
    Unsupported,
}

impl SectionKind {
    /// Whether assets can be exported from libraries of this kind.
    pub fn is_supported(self) -> bool {
        matches!(self, SectionKind::Movie | SectionKind::Show)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SectionKind::Movie => "movie",
            SectionKind::Show => "show",
            SectionKind::Unsupported => "unsupported",
        })
    }
}

/// A library on the media server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    /// Server-side identifier used to list the section's items.
    pub key: String,
    /// Display title, unique within a server.
    pub title: String,
    /// Content type of the section.
    #[serde(rename = "type")]
    pub kind: SectionKind,
}

/// Opaque server locator of one image or audio resource.
///
/// It is not a local path. Only [`LibraryClient::download`] knows how to
/// redeem it.
///
/// [`LibraryClient::download`]: crate::library::LibraryClient::download
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    /// Wrap a server locator.
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// The raw locator.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One file backing a media representation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaPart {
    /// Absolute path of the file as the server sees it.
    pub file: String,
}

/// One media representation (a version) of a movie or episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Media {
    #[serde(rename = "Part", default)]
    pub parts: Vec<MediaPart>,
}

/// A movie or a show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server identifier, used to list a show's episodes and seasons.
    pub rating_key: String,
    pub title: String,
    /// Media representations. Only reported for movies.
    #[serde(rename = "Media", default)]
    pub media: Vec<Media>,
    #[serde(rename = "thumb", default)]
    pub poster: Option<AssetRef>,
    #[serde(rename = "art", default)]
    pub background: Option<AssetRef>,
    #[serde(default)]
    pub banner: Option<AssetRef>,
    #[serde(default)]
    pub theme: Option<AssetRef>,
}

impl Item {
    /// File parts of all media representations, in server order.
    pub fn parts(&self) -> impl Iterator<Item = &MediaPart> {
        self.media.iter().flat_map(|media| media.parts.iter())
    }
}

/// A season of a show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    /// Empty for the "All episodes" pseudo-season, which is not a season.
    #[serde(default)]
    pub rating_key: String,
    /// Display label, `"Specials"` for season zero.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "thumb", default)]
    pub poster: Option<AssetRef>,
}

/// An episode of a show. Only used to locate directories on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "Media", default)]
    pub media: Vec<Media>,
}

/// File parts of a sequence of episodes, episode by episode.
pub fn episode_parts(episodes: &[Episode]) -> impl Iterator<Item = &MediaPart> {
    episodes
        .iter()
        .flat_map(|episode| episode.media.iter())
        .flat_map(|media| media.parts.iter())
}
