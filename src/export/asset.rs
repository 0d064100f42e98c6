//! Asset kinds and the files they are written to.

use crate::library::{AssetRef, Item, Season};

use clap::ValueEnum;
use std::fmt;

/// Category of exportable artwork or audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Poster,
    Background,
    Banner,
    Theme,
}

impl AssetKind {
    /// Every kind, in the order they are exported.
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Poster,
        AssetKind::Background,
        AssetKind::Banner,
        AssetKind::Theme,
    ];

    /// File name an item's asset of this kind is written to.
    pub fn filename(self) -> &'static str {
        match self {
            AssetKind::Poster => "poster.jpg",
            AssetKind::Background => "background.jpg",
            AssetKind::Banner => "banner.jpg",
            AssetKind::Theme => "theme.mp3",
        }
    }

    /// The reference `item` carries for this kind, if any.
    pub fn reference(self, item: &Item) -> Option<&AssetRef> {
        match self {
            AssetKind::Poster => item.poster.as_ref(),
            AssetKind::Background => item.background.as_ref(),
            AssetKind::Banner => item.banner.as_ref(),
            AssetKind::Theme => item.theme.as_ref(),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::Poster => "poster",
            AssetKind::Background => "background",
            AssetKind::Banner => "banner",
            AssetKind::Theme => "theme",
        })
    }
}

/// Which asset kinds a run exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AssetSelection {
    #[default]
    All,
    Posters,
    Backgrounds,
    Banners,
    Themes,
}

impl AssetSelection {
    /// Whether `kind` is exported under this selection.
    pub fn includes(self, kind: AssetKind) -> bool {
        matches!(
            (self, kind),
            (AssetSelection::All, _)
                | (AssetSelection::Posters, AssetKind::Poster)
                | (AssetSelection::Backgrounds, AssetKind::Background)
                | (AssetSelection::Banners, AssetKind::Banner)
                | (AssetSelection::Themes, AssetKind::Theme)
        )
    }
}

impl fmt::Display for AssetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetSelection::All => "all",
            AssetSelection::Posters => "posters",
            AssetSelection::Backgrounds => "backgrounds",
            AssetSelection::Banners => "banners",
            AssetSelection::Themes => "themes",
        })
    }
}

/// File name of a season poster: the season title plus `.jpg`, with
/// `Specials` written as `Season 0`. Untitled seasons have no poster file.
pub fn season_poster_filename(season: &Season) -> Option<String> {
    let title = season.title.as_deref()?;
    let stem = if title == "Specials" { "Season 0" } else { title };
    Some(format!("{stem}.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(title: Option<&str>) -> Season {
        Season {
            rating_key: "1".into(),
            title: title.map(String::from),
            poster: Some(AssetRef::new("/thumb")),
        }
    }

    #[test]
    fn specials_become_season_zero() {
        assert_eq!(
            season_poster_filename(&season(Some("Specials"))).as_deref(),
            Some("Season 0.jpg")
        );
        assert_eq!(
            season_poster_filename(&season(Some("Season 02"))).as_deref(),
            Some("Season 02.jpg")
        );
        assert_eq!(season_poster_filename(&season(None)), None);
    }

    #[test]
    fn posters_selection_excludes_other_kinds() {
        let selection = AssetSelection::Posters;
        assert!(selection.includes(AssetKind::Poster));
        assert!(!selection.includes(AssetKind::Background));
        assert!(!selection.includes(AssetKind::Banner));
        assert!(!selection.includes(AssetKind::Theme));
    }

    #[test]
    fn all_selection_includes_everything() {
        assert!(AssetKind::ALL
            .iter()
            .all(|kind| AssetSelection::All.includes(*kind)));
    }

    #[test]
    fn selection_names_match_the_command_line() {
        for selection in AssetSelection::value_variants() {
            let parsed = AssetSelection::from_str(&selection.to_string(), false).unwrap();
            assert_eq!(parsed, *selection);
        }
    }
}
