//! Extract the changelog from a plugin readme.

use std::path::Path;

use tracing::debug;

use super::format::Changelog;
use super::state::ParseState;
use crate::error::LoadError;
use crate::readme::Document;

/// Changelog extracted from a readme file at construction time.
#[derive(Debug, Clone)]
pub struct ChangelogParser {
    changelog: Changelog,
}

impl ChangelogParser {
    /// Load the readme at `path` and extract its changelog.
    ///
    /// Fails only if the readme is missing, unreadable, or has no lines.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let document = Document::load(path)?;
        let changelog = parse_document(&document);

        debug!("Extracted {} versions from {}", changelog.len(), path.display());
        Ok(Self { changelog })
    }

    pub fn get_changelog(&self) -> &Changelog {
        &self.changelog
    }

    pub fn into_changelog(self) -> Changelog {
        self.changelog
    }
}

/// Run the extraction pass over a loaded document.
pub fn parse_document(document: &Document) -> Changelog {
    document
        .lines()
        .iter()
        .fold(ParseState::default(), |state, line| state.step(line))
        .finish()
}

/// Extract the changelog from readme text already in memory.
pub fn parse_readme(text: &str) -> Changelog {
    parse_document(&Document::from_text(text))
}
