//! Changelog extraction from readme text.

pub mod format;
pub mod parser;
pub mod patterns;
pub mod preview;
pub mod state;

pub use format::{Changelog, ChangelogBlock};
pub use parser::{ChangelogParser, parse_document, parse_readme};
pub use preview::{render_block, render_changelog};
pub use state::{ParseState, Section};
