// bm/src/domain/bookmark.rs
use crate::domain::error::DomainResult;
use crate::domain::tag::Tag;
use derive_builder::Builder;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Represents a bookmark domain entity, identified by its name
#[derive(Builder, Clone, Debug, PartialEq, Eq, Serialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Bookmark {
    pub name: String,
    pub url: String,
    #[builder(default)]
    pub tags: BTreeSet<Tag>,
    #[builder(default = "false")]
    pub archived: bool,
}

impl BookmarkBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.name.as_deref() {
            Some(name) if name.is_empty() => Err("Bookmark name cannot be empty".to_string()),
            _ => Ok(()),
        }
    }
}

impl Bookmark {
    /// Creates an active bookmark
    pub fn new<S: Into<String>>(name: S, url: S, tags: BTreeSet<Tag>) -> DomainResult<Self> {
        Ok(BookmarkBuilder::default()
            .name(name)
            .url(url)
            .tags(tags)
            .build()?)
    }

    pub fn formatted_tags(&self) -> String {
        Tag::format_tags(&self.tags)
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}]{}",
            self.name,
            self.url,
            self.formatted_tags(),
            if self.archived { " (archived)" } else { "" }
        )
    }
}

/// A partial update of the bookmark called `name`.
///
/// `None` leaves a field unchanged. An empty url or an empty tag set is
/// treated the same as `None`: tags can be replaced but never cleared here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookmarkUpdate {
    pub name: String,
    pub url: Option<String>,
    pub tags: Option<BTreeSet<Tag>>,
    pub archived: Option<bool>,
}

impl BookmarkUpdate {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    /// The tag set replacing the stored one, if any
    pub fn replacement_tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref().filter(|tags| !tags.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    #[test]
    fn given_name_and_url_when_build_then_defaults_to_active_without_tags() {
        let bookmark = BookmarkBuilder::default()
            .name("G")
            .url("https://g.com")
            .build()
            .unwrap();

        assert_eq!(bookmark.name, "G");
        assert_eq!(bookmark.url, "https://g.com");
        assert!(bookmark.tags.is_empty());
        assert!(!bookmark.archived);
    }

    #[test]
    fn given_empty_name_when_new_then_returns_invalid_bookmark() {
        let result = Bookmark::new("", "https://g.com", BTreeSet::new());
        assert!(matches!(result, Err(DomainError::InvalidBookmark(_))));
    }

    #[test]
    fn given_missing_url_when_build_then_returns_error() {
        let result = BookmarkBuilder::default().name("G").build();
        assert!(result.is_err());
    }

    #[test]
    fn given_bookmark_when_display_then_shows_tags_and_archive_state() {
        let tags = Tag::parse_tags(["Web", "search"]).unwrap();
        let mut bookmark = Bookmark::new("G", "https://g.com", tags).unwrap();
        assert_eq!(bookmark.to_string(), "G: https://g.com [search,web]");

        bookmark.archived = true;
        assert_eq!(
            bookmark.to_string(),
            "G: https://g.com [search,web] (archived)"
        );
    }

    #[test]
    fn given_empty_tag_set_when_replacement_tags_then_returns_none() {
        let update = BookmarkUpdate::new("G").with_tags(BTreeSet::new());
        assert!(update.replacement_tags().is_none());

        let tags = Tag::parse_tags(["dev"]).unwrap();
        let update = BookmarkUpdate::new("G").with_tags(tags.clone());
        assert_eq!(update.replacement_tags(), Some(&tags));
    }
}
