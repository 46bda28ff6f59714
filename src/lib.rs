//! readme-changelog - Extracts structured changelog data from plugin readme files.
//!
//! # Overview
//!
//! WordPress-style readmes keep their release history under a `== Changelog ==`
//! heading, one `= 1.2.3 =` subheading per version followed by `* ` bullets.
//! [`ChangelogParser`] loads such a readme and maps each version to its release
//! date and entries, in document order.

pub mod changelog;
pub mod error;
pub mod readme;

// Re-export commonly used types
pub use changelog::{
    Changelog, ChangelogBlock, ChangelogParser, parse_readme, render_block, render_changelog,
};
pub use error::LoadError;
pub use readme::Document;
