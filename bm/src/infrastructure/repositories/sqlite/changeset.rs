// src/infrastructure/repositories/sqlite/changeset.rs

use diesel::AsChangeset;

use super::schema::bookmarks;
use crate::domain::bookmark::BookmarkUpdate;
use crate::domain::error::{DomainError, DomainResult};

/// Column assignments for `UPDATE bookmarks`. `None` fields are left out of
/// the SET clause.
#[derive(AsChangeset, Debug, Default, Clone, PartialEq, Eq)]
#[diesel(table_name = bookmarks)]
pub struct BookmarkChanges {
    pub url: Option<String>,
    pub archived: Option<bool>,
}

/// Accumulates only the columns a partial update actually supplies.
#[derive(Debug, Default)]
pub struct UpdateClauseBuilder {
    changes: BookmarkChanges,
    columns: Vec<&'static str>,
}

impl UpdateClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent and empty urls leave the column untouched.
    pub fn url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.changes.url = Some(url.to_string());
            self.columns.push("url");
        }
        self
    }

    pub fn archived(mut self, archived: Option<bool>) -> Self {
        if let Some(archived) = archived {
            self.changes.archived = Some(archived);
            self.columns.push("archived");
        }
        self
    }

    /// Names of the assigned columns, in the order they were supplied
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// `None` when nothing would change
    pub fn build(self) -> Option<BookmarkChanges> {
        if self.columns.is_empty() {
            None
        } else {
            Some(self.changes)
        }
    }
}

impl BookmarkChanges {
    /// Builds the minimal changeset for `update`, rejecting a request that
    /// changes no column.
    pub fn from_update(update: &BookmarkUpdate) -> DomainResult<Self> {
        UpdateClauseBuilder::new()
            .url(update.url.as_deref())
            .archived(update.archived)
            .build()
            .ok_or_else(|| DomainError::NoFieldsToUpdate(update.name.clone()))
    }
}
