//! Error handling for the exporter.
//!
//! Every variant is fatal to an export run: the driver stops at the first
//! error it meets and hands it back to the caller untouched, so the
//! operator always learns which item or file ended the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen while exporting library assets.
#[derive(Error, Debug)]
pub enum Error {
    /// The media server could not be reached or rejected the token.
    #[error("cannot connect to {url}: {source}")]
    Connection {
        /// Address that was tried.
        url: String,
        /// Underlying HTTP failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server exposes no movie or show library.
    #[error("no available libraries.")]
    NoLibraryAvailable,

    /// No directory could be derived from the media files of an item or season.
    #[error("failed to extract the path of \"{title}\".")]
    PathResolution {
        /// Title of the item or season being exported.
        title: String,
    },

    /// An asset could not be fetched or written.
    #[error("download failed for {}: {source}", path.display())]
    DownloadFailed {
        /// Destination the asset was meant for.
        path: PathBuf,
        /// Cause of the failure.
        #[source]
        source: Box<Error>,
    },

    /// Error from the URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A value could not be sent as an HTTP header.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// An interactive prompt did not produce an answer.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// I/O Error.
    #[error("I/O error: {source}")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("HTTP error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised inside the HTTP middleware stack.
    #[error("HTTP middleware error: {source}")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

impl Error {
    /// Wrap `self` as the cause of a failed download to `path`.
    pub fn download_failed(self, path: impl Into<PathBuf>) -> Self {
        Error::DownloadFailed {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, Error>;
