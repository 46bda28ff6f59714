//! Changelog data types extracted from a readme.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Release date and change entries for one version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangelogBlock {
    /// `YYYY-MM-DD` as written in the heading, or empty when the heading has none.
    pub date: String,
    /// Bullet entries in document order.
    pub entries: Vec<String>,
}

impl ChangelogBlock {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            entries: Vec::new(),
        }
    }

    /// Interpret `date` as a calendar date.
    ///
    /// Returns `None` when no date was given or the token is not a real date
    /// (e.g. `2019-13-45`).
    pub fn release_date(&self) -> Option<NaiveDate> {
        if self.date.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Version string to [`ChangelogBlock`] mapping, in document order.
///
/// A version declared twice keeps the position of its first heading but
/// holds only the block of its last heading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    blocks: Vec<(String, ChangelogBlock)>,
    index: HashMap<String, usize>,
}

impl Changelog {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, version: &str) -> Option<&ChangelogBlock> {
        self.index.get(version).map(|&i| &self.blocks[i].1)
    }

    pub fn contains_version(&self, version: &str) -> bool {
        self.index.contains_key(version)
    }

    /// Version strings in document order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|(version, _)| version.as_str())
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> impl Iterator<Item = &ChangelogBlock> {
        self.blocks.iter().map(|(_, block)| block)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChangelogBlock)> {
        self.blocks.iter().map(|(version, block)| (version.as_str(), block))
    }

    /// The first declared version, which readmes list newest-first.
    pub fn latest(&self) -> Option<(&str, &ChangelogBlock)> {
        self.iter().next()
    }

    /// Insert or replace the block for `version`. Returns the replaced block.
    pub(crate) fn insert(&mut self, version: String, block: ChangelogBlock) -> Option<ChangelogBlock> {
        if let Some(&i) = self.index.get(&version) {
            return Some(std::mem::replace(&mut self.blocks[i].1, block));
        }

        self.index.insert(version.clone(), self.blocks.len());
        self.blocks.push((version, block));
        None
    }

    pub(crate) fn get_mut(&mut self, version: &str) -> Option<&mut ChangelogBlock> {
        let i = *self.index.get(version)?;
        Some(&mut self.blocks[i].1)
    }
}

impl<'a> IntoIterator for &'a Changelog {
    type Item = (&'a str, &'a ChangelogBlock);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for Changelog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.blocks.len()))?;
        for (version, block) in &self.blocks {
            map.serialize_entry(version, block)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(date: &str, entries: &[&str]) -> ChangelogBlock {
        ChangelogBlock {
            date: date.to_string(),
            entries: entries.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_insert_preserves_document_order() {
        let mut changelog = Changelog::default();
        changelog.insert("2.0".to_string(), block("", &[]));
        changelog.insert("1.5".to_string(), block("", &[]));
        changelog.insert("1.0".to_string(), block("", &[]));

        assert_eq!(changelog.versions().collect::<Vec<_>>(), ["2.0", "1.5", "1.0"]);
        assert_eq!(changelog.latest().map(|(v, _)| v), Some("2.0"));
    }

    #[test]
    fn test_insert_replaces_block_in_place() {
        let mut changelog = Changelog::default();
        changelog.insert("2.0".to_string(), block("", &["old"]));
        changelog.insert("1.0".to_string(), block("", &[]));

        let replaced = changelog.insert("2.0".to_string(), block("2020-01-01", &[]));

        assert_eq!(replaced, Some(block("", &["old"])));
        assert_eq!(changelog.len(), 2);
        assert_eq!(changelog.versions().collect::<Vec<_>>(), ["2.0", "1.0"]);
        assert_eq!(changelog.get("2.0"), Some(&block("2020-01-01", &[])));
    }

    #[test]
    fn test_get_missing_version() {
        let changelog = Changelog::default();
        assert!(changelog.get("1.0").is_none());
        assert!(!changelog.contains_version("1.0"));
        assert!(changelog.latest().is_none());
    }

    #[test]
    fn test_release_date() {
        assert_eq!(
            block("2019-04-20", &[]).release_date(),
            NaiveDate::from_ymd_opt(2019, 4, 20)
        );
        assert_eq!(block("", &[]).release_date(), None);
        assert_eq!(block("2019-13-45", &[]).release_date(), None);
    }

    #[test]
    fn test_serialize_as_ordered_object() {
        let mut changelog = Changelog::default();
        changelog.insert("2.5.1".to_string(), block("2019-04-20", &["Fix"]));
        changelog.insert("2.5.0".to_string(), block("", &[]));

        let json = serde_json::to_string(&changelog).unwrap();
        assert_eq!(
            json,
            r#"{"2.5.1":{"date":"2019-04-20","entries":["Fix"]},"2.5.0":{"date":"","entries":[]}}"#
        );
    }
}
