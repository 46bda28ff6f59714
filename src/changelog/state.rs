//! Single-pass line state machine for changelog extraction.

use tracing::{debug, trace};

use super::format::{Changelog, ChangelogBlock};
use super::patterns::{
    bullet_entry, extract_date, extract_version, is_changelog_heading, is_major_heading,
    is_version_heading,
};

/// Where the current line sits relative to the `== Changelog ==` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    BeforeChangelog,
    InChangelog,
    AfterChangelog,
}

impl Section {
    /// Section after reading `line`.
    ///
    /// Only the first changelog section is ever opened. Once another major
    /// heading closes it, later `== Changelog ==` headings are ignored.
    pub fn transition(self, line: &str) -> Self {
        match self {
            Self::BeforeChangelog if is_changelog_heading(line) => Self::InChangelog,
            Self::InChangelog if is_major_heading(line) && !is_changelog_heading(line) => {
                Self::AfterChangelog
            }
            other => other,
        }
    }
}

/// Accumulator threaded through the per-line pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    pub section: Section,
    pub current_version: Option<String>,
    pub changelog: Changelog,
}

impl ParseState {
    /// Consume one trimmed line and return the next state.
    pub fn step(mut self, line: &str) -> Self {
        let next = self.section.transition(line);
        if next != self.section {
            debug!("Changelog section {:?} -> {:?} at {:?}", self.section, next, line);
            self.section = next;
        }

        if self.section != Section::InChangelog {
            return self;
        }

        if is_version_heading(line) {
            self.open_version_block(line);
        } else if let Some(entry) = bullet_entry(line) {
            self.push_entry(entry);
        } else {
            trace!("Skipping line {:?}", line);
        }

        self
    }

    pub fn finish(self) -> Changelog {
        self.changelog
    }

    fn open_version_block(&mut self, line: &str) {
        let Some(version) = extract_version(line) else {
            return;
        };
        let date = extract_date(line).unwrap_or_default();

        debug!("Version block {} (date: {:?})", version, date);

        if let Some(previous) = self
            .changelog
            .insert(version.to_string(), ChangelogBlock::new(date))
        {
            debug!(
                "Version {} redeclared, discarding {} earlier entries",
                version,
                previous.entries.len()
            );
        }
        self.current_version = Some(version.to_string());
    }

    fn push_entry(&mut self, entry: &str) {
        let Some(version) = self.current_version.as_deref() else {
            trace!("Bullet before any version block: {:?}", entry);
            return;
        };

        if let Some(block) = self.changelog.get_mut(version) {
            block.entries.push(entry.to_string());
        }
    }
}
