//! Download module containing the transfer of remote assets to disk.
//!
//! - [`download`] - the [`Download`] value and its streaming fetch

pub mod download;

pub use download::Download;
