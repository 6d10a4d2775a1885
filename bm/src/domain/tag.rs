// bm/src/domain/tag.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::domain::error::{DomainError, DomainResult};

/// A normalized tag label owned by one bookmark
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag {
    value: String,
}

impl Tag {
    /// Creates a new Tag, trimmed and lowercased
    pub fn new<S: AsRef<str>>(value: S) -> DomainResult<Self> {
        let value = value.as_ref().trim().to_lowercase();

        if value.is_empty() {
            return Err(DomainError::InvalidTag("Tag cannot be empty".to_string()));
        }

        if value.contains(',') {
            return Err(DomainError::InvalidTag(format!(
                "Tag cannot contain commas: '{}'",
                value
            )));
        }

        Ok(Self { value })
    }

    /// Wraps a value read back from the `tags` table without re-validating it.
    pub(crate) fn from_storage(value: String) -> Self {
        Self { value }
    }

    /// Get the tag value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parse comma-separated tag fragments into a set of valid Tags.
    ///
    /// Blank fragments are skipped, so `["a,,b", " "]` yields `{a, b}`.
    /// Values that normalize to the same text collapse into one tag.
    pub fn parse_tags<I, S>(values: I) -> DomainResult<BTreeSet<Tag>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = BTreeSet::new();

        for value in values {
            for fragment in value
                .as_ref()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
            {
                result.insert(Tag::new(fragment)?);
            }
        }

        Ok(result)
    }

    /// Format a set of tags as a comma separated list, e.g. `search,web`
    pub fn format_tags(tags: &BTreeSet<Tag>) -> String {
        itertools::join(tags.iter().map(Tag::value), ",")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_valid_tag_value_when_create_tag_then_returns_normalized_tag() {
        let tag = Tag::new("test").unwrap();
        assert_eq!(tag.value(), "test");

        // Should normalize case
        let tag = Tag::new("TEST").unwrap();
        assert_eq!(tag.value(), "test");

        // Should trim whitespace
        let tag = Tag::new(" Test ").unwrap();
        assert_eq!(tag.value(), "test");
    }

    #[test]
    fn given_invalid_tag_value_when_create_tag_then_returns_error() {
        assert!(matches!(Tag::new(""), Err(DomainError::InvalidTag(_))));
        assert!(matches!(Tag::new("   "), Err(DomainError::InvalidTag(_))));
        assert!(matches!(Tag::new("a,b"), Err(DomainError::InvalidTag(_))));
    }

    #[test]
    fn given_mixed_case_duplicates_when_parse_tags_then_collapses_to_one() {
        let tags = Tag::parse_tags(["Dev", "dev", "DEV"]).unwrap();
        assert_eq!(tags.len(), 1);
        assert!(tags.contains(&Tag::new("dev").unwrap()));
    }

    #[test]
    fn given_comma_separated_fragments_when_parse_tags_then_splits_and_skips_blanks() {
        let tags = Tag::parse_tags([",Search,, web ", " "]).unwrap();
        let values: Vec<&str> = tags.iter().map(Tag::value).collect();
        assert_eq!(values, vec!["search", "web"]);
    }

    #[test]
    fn given_no_values_when_parse_tags_then_returns_empty_set() {
        let tags = Tag::parse_tags(Vec::<String>::new()).unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn given_tag_set_when_format_then_returns_sorted_comma_list() {
        let tags = Tag::parse_tags(["web", "Search"]).unwrap();
        assert_eq!(Tag::format_tags(&tags), "search,web");
        assert_eq!(Tag::format_tags(&BTreeSet::new()), "");
    }
}
