// src/domain/repositories/repository

use crate::domain::bookmark::{Bookmark, BookmarkUpdate};
use crate::domain::error::DomainResult;

/// Repository trait for bookmark persistence operations.
///
/// Every method is one atomic unit of work: on error nothing it did is
/// visible afterwards.
pub trait BookmarkRepository: std::fmt::Debug {
    /// Add a new bookmark together with its tags.
    ///
    /// Fails with `DuplicateName` when the name is taken.
    fn add(&mut self, bookmark: &Bookmark) -> DomainResult<()>;

    /// Delete a bookmark and all of its tags.
    ///
    /// Fails with `BookmarkNotFound` when no bookmark has this name.
    fn delete(&mut self, name: &str) -> DomainResult<()>;

    /// Apply a partial update.
    ///
    /// Fails with `NoFieldsToUpdate` before touching storage when neither a
    /// url nor an archived flag is supplied, and with `BookmarkNotFound`
    /// when the target does not exist.
    fn update(&mut self, update: &BookmarkUpdate) -> DomainResult<()>;

    /// List bookmarks with their tag sets, archived ones only on request.
    fn list(&mut self, include_archived: bool) -> DomainResult<Vec<Bookmark>>;
}
