//! Keep a Changelog style text rendering.

use super::format::{Changelog, ChangelogBlock};

/// Printed in place of an empty changelog.
pub const NO_ENTRIES: &str = "No changelog entries found.";

/// Render one version as `## [version] - date` followed by `- entry` lines.
///
/// The `- date` suffix is left out when the heading had no date.
pub fn render_block(version: &str, block: &ChangelogBlock) -> String {
    let mut section = if block.date.is_empty() {
        format!("## [{}]\n\n", version)
    } else {
        format!("## [{}] - {}\n\n", version, block.date)
    };

    for entry in &block.entries {
        section.push_str(&format!("- {}\n", entry));
    }

    section.push('\n');
    section
}

/// Render every version in document order.
pub fn render_changelog(changelog: &Changelog) -> String {
    if changelog.is_empty() {
        return format!("{}\n", NO_ENTRIES);
    }

    changelog
        .iter()
        .map(|(version, block)| render_block(version, block))
        .collect()
}
