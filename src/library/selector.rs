//! Choosing the library to export.

use super::model::Section;
use crate::error::{Error, Result};

use dialoguer::{theme::ColorfulTheme, Select};
use tracing::debug;

/// Resolve the library to export from the sections a server exposes.
///
/// Only movie and show libraries are candidates. When `requested` names one
/// of them exactly it is returned and `choose` is never called; otherwise
/// `choose` picks an index among the candidates.
pub fn select_section<F>(
    sections: Vec<Section>,
    requested: Option<&str>,
    choose: F,
) -> Result<Section>
where
    F: FnOnce(&[Section]) -> Result<usize>,
{
    let mut candidates: Vec<Section> = sections
        .into_iter()
        .filter(|section| section.kind.is_supported())
        .collect();

    if candidates.is_empty() {
        return Err(Error::NoLibraryAvailable);
    }

    if let Some(title) = requested {
        if let Some(pos) = candidates.iter().position(|s| s.title == title) {
            return Ok(candidates.swap_remove(pos));
        }
        debug!("Library {:?} not found, asking the operator", title);
    }

    let index = choose(&candidates)?;
    if index >= candidates.len() {
        return Err(Error::Prompt(format!(
            "choice {} is out of range for {} libraries",
            index,
            candidates.len()
        )));
    }
    Ok(candidates.swap_remove(index))
}

/// Ask the operator to pick a library on the terminal.
pub fn prompt_section(sections: &[Section]) -> Result<usize> {
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select Library")
        .items(&titles)
        .default(0)
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))
}
