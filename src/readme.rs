//! Loading readme documents into trimmed lines.

use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

/// A readme loaded into memory as an ordered sequence of trimmed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Load a readme from disk.
    ///
    /// Fails if the path does not exist, cannot be read, or holds no lines at all.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|source| LoadError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_text(&String::from_utf8_lossy(&bytes));
        if document.lines.is_empty() {
            return Err(LoadError::Empty(path.to_path_buf()));
        }

        debug!("Loaded {} lines from {}", document.lines.len(), path.display());
        Ok(document)
    }

    /// Build a document from text already in memory.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| trim_line(line).to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Strip the ASCII whitespace a readme line may be padded with.
///
/// Unicode spaces such as U+00A0 are content and are kept.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}
