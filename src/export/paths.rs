//! Locating the directory that holds an item's media on disk.
//!
//! The directory is derived from where the server says the media files
//! live, not from a naming convention, so it follows whatever folder layout
//! the library uses. Paths are the server's, always `/`-delimited.

use crate::library::{episode_parts, Episode, Item, MediaPart};

use std::path::PathBuf;

/// What a resolved directory is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTarget {
    /// The folder of a movie file.
    Movie,
    /// The root folder of a show, two levels above an episode file.
    Show,
    /// The folder of a season, directly above an episode file.
    Season,
}

impl PathTarget {
    fn levels(self) -> usize {
        match self {
            PathTarget::Movie | PathTarget::Season => 1,
            PathTarget::Show => 2,
        }
    }
}

/// Directory for `target` derived from the first of `parts`.
///
/// Returns `None` when there is no part, or when the file path has too few
/// components to strip.
pub fn resolve_path<'a, I>(parts: I, target: PathTarget) -> Option<PathBuf>
where
    I: IntoIterator<Item = &'a MediaPart>,
{
    let part = parts.into_iter().next()?;
    strip_components(&part.file, target.levels()).map(PathBuf::from)
}

/// Folder of a movie's first media file.
pub fn movie_directory(item: &Item) -> Option<PathBuf> {
    resolve_path(item.parts(), PathTarget::Movie)
}

/// Root folder of a show, from its episodes.
pub fn show_directory(episodes: &[Episode]) -> Option<PathBuf> {
    resolve_path(episode_parts(episodes), PathTarget::Show)
}

/// Folder of a season, from that season's episodes.
pub fn season_directory(episodes: &[Episode]) -> Option<PathBuf> {
    resolve_path(episode_parts(episodes), PathTarget::Season)
}

fn strip_components(path: &str, levels: usize) -> Option<&str> {
    let mut dir = path;
    for _ in 0..levels {
        dir = &dir[..dir.rfind('/')?];
    }
    (!dir.is_empty()).then_some(dir)
}
