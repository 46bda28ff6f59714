//! Line matchers for readme headings, version strings and release dates.
//!
//! Each matcher is independent and reports "no match" as `None`/`false`;
//! none of them can fail.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::readme::trim_line;

/// `== Title ==`, one optional space inside each marker.
static MAJOR_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^==\s?(.*)\s?==$").unwrap());

/// `= Title =`, one optional space inside each marker.
static MINOR_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^=\s?(.*)\s?=$").unwrap());

/// `= Title = (2019-04-20)`: a minor heading followed by a release date.
static DATED_MINOR_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^=\s?(.*)\s?=\s*\(?[0-9]{4}-[0-9]{2}-[0-9]{2}\)?$").unwrap()
});

static CHANGELOG_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)changelog").unwrap());

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9.]+").unwrap());

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap());

/// Prefix that marks a changelog entry line.
const BULLET_PREFIX: &str = "* ";

/// Heading levels used by plugin readmes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `== Section ==`
    Major,
    /// `= Subsection =`
    Minor,
}

impl HeadingLevel {
    fn regex(self) -> &'static Regex {
        match self {
            Self::Major => &MAJOR_HEADING_RE,
            Self::Minor => &MINOR_HEADING_RE,
        }
    }
}

/// Return the text between the heading markers if `line` is a heading of `level`.
///
/// The captured title is not trimmed: `= 2.5.0 =` yields `"2.5.0 "`.
pub fn heading_title(line: &str, level: HeadingLevel) -> Option<&str> {
    level
        .regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check whether `line` is a heading of `level` whose title matches `contains`.
pub fn heading_contains(line: &str, level: HeadingLevel, contains: &Regex) -> bool {
    heading_title(line, level).is_some_and(|title| contains.is_match(title))
}

/// Any `== Section ==` heading.
pub fn is_major_heading(line: &str) -> bool {
    heading_title(line, HeadingLevel::Major).is_some()
}

/// A `== Changelog ==` heading, matched case-insensitively anywhere in the title.
pub fn is_changelog_heading(line: &str) -> bool {
    heading_contains(line, HeadingLevel::Major, &CHANGELOG_TITLE_RE)
}

/// A minor heading whose title contains a version number, e.g. `= 2.5.0 =`.
///
/// A release date after the closing marker (`= 2.5.1 = (2019-04-20)`) is tolerated.
pub fn is_version_heading(line: &str) -> bool {
    if heading_contains(line, HeadingLevel::Minor, &VERSION_RE) {
        return true;
    }

    DATED_MINOR_HEADING_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .is_some_and(|title| VERSION_RE.is_match(title.as_str()))
}

/// First version-like token in `line`, e.g. `"2.5.0"` from `= 2.5.0 =`.
pub fn extract_version(line: &str) -> Option<&str> {
    VERSION_RE.find(line).map(|m| m.as_str())
}

/// First `YYYY-MM-DD` token in `line`. The date is not validated.
pub fn extract_date(line: &str) -> Option<&str> {
    DATE_RE.find(line).map(|m| m.as_str())
}

/// Entry text of a `* ` bullet line, or `None` if the line is not a non-empty bullet.
pub fn bullet_entry(line: &str) -> Option<&str> {
    if line.len() < 3 {
        return None;
    }

    let entry = trim_line(line.strip_prefix(BULLET_PREFIX)?);
    (!entry.is_empty()).then_some(entry)
}
