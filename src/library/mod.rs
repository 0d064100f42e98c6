//! Library module: what the exporter reads from the media server.
//!
//! - [`model`] - sections, items, seasons, episodes and asset references
//! - [`client`] - the [`LibraryClient`] capability trait
//! - [`plex`] - [`PlexClient`], the Plex Media Server implementation
//! - [`selector`] - choosing the library to export

pub mod client;
pub mod model;
pub mod plex;
pub mod selector;

pub use client::LibraryClient;
pub use model::{
    episode_parts, AssetRef, Episode, Item, Media, MediaPart, Season, Section, SectionKind,
};
pub use plex::{PlexClient, PlexClientBuilder};
pub use selector::{prompt_section, select_section};
