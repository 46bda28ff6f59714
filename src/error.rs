//! Error types for readme-changelog using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a readme document.
///
/// This is the only error the extractor surfaces. Anything that goes wrong
/// after the document is in memory is treated as free-form readme text and
/// skipped.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Readme file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not open readme file {} for reading: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Readme file {} contains no lines", .0.display())]
    Empty(PathBuf),
}

impl LoadError {
    /// Path of the readme that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound(path) | Self::Empty(path) => path.as_path(),
            Self::ReadFailed { path, .. } => path.as_path(),
        }
    }
}
