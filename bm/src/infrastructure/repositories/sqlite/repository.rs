// src/infrastructure/repositories/sqlite/repository

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use tracing::{debug, instrument};

use super::changeset::BookmarkChanges;
use super::connection::{establish, in_transaction};
use super::model::{DbBookmark, DbTag, NewBookmark, NewTag};
use super::schema::{bookmarks, tags};
use crate::domain::bookmark::{Bookmark, BookmarkUpdate};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::repository::BookmarkRepository;
use crate::domain::tag::Tag;

pub struct SqliteBookmarkRepository {
    database_url: String,
    conn: SqliteConnection,
}

impl SqliteBookmarkRepository {
    /// Open the database at `database_url`, creating or migrating the schema
    #[instrument(level = "debug")]
    pub fn open(database_url: &str) -> DomainResult<Self> {
        let conn = establish(database_url)?;
        Ok(Self {
            database_url: database_url.to_string(),
            conn,
        })
    }

    /// Convert a database row and its tag set to a domain entity
    fn to_domain_model(db_bookmark: DbBookmark, tags: BTreeSet<Tag>) -> Bookmark {
        Bookmark {
            name: db_bookmark.name,
            url: db_bookmark.url.unwrap_or_default(),
            tags,
            archived: db_bookmark.archived.unwrap_or(false),
        }
    }
}

fn insert_tags(conn: &mut SqliteConnection, name: &str, tag_set: &BTreeSet<Tag>) -> DomainResult<()> {
    for tag in tag_set {
        diesel::insert_into(tags::table)
            .values(NewTag {
                name,
                tag: tag.value(),
            })
            .execute(conn)?;
    }
    Ok(())
}

impl fmt::Debug for SqliteBookmarkRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteBookmarkRepository")
            .field("database_url", &self.database_url)
            .finish_non_exhaustive()
    }
}

impl Drop for SqliteBookmarkRepository {
    fn drop(&mut self) {
        debug!("Closing database: {}", self.database_url);
    }
}

impl BookmarkRepository for SqliteBookmarkRepository {
    #[instrument(skip_all, fields(name = %bookmark.name), level = "debug")]
    fn add(&mut self, bookmark: &Bookmark) -> DomainResult<()> {
        if bookmark.name.is_empty() {
            return Err(DomainError::InvalidBookmark(
                "Bookmark name cannot be empty".to_string(),
            ));
        }

        in_transaction(&mut self.conn, |conn| {
            let new_bookmark = NewBookmark {
                name: &bookmark.name,
                url: &bookmark.url,
                archived: bookmark.archived,
            };
            debug!("Inserting bookmark: {:?}", new_bookmark);

            diesel::insert_into(bookmarks::table)
                .values(&new_bookmark)
                .execute(conn)
                .map_err(|e| match e {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DomainError::DuplicateName(bookmark.name.clone())
                    }
                    other => other.into(),
                })?;

            insert_tags(conn, &bookmark.name, &bookmark.tags)
        })
    }

    #[instrument(skip(self), level = "debug")]
    fn delete(&mut self, name: &str) -> DomainResult<()> {
        in_transaction(&mut self.conn, |conn| {
            let removed_tags =
                diesel::delete(tags::table.filter(tags::name.eq(name))).execute(conn)?;

            let removed = diesel::delete(bookmarks::table.filter(bookmarks::name.eq(name)))
                .execute(conn)?;
            if removed == 0 {
                return Err(DomainError::BookmarkNotFound(name.to_string()));
            }

            debug!("Deleted bookmark {} with {} tags", name, removed_tags);
            Ok(())
        })
    }

    #[instrument(skip_all, fields(name = %update.name), level = "debug")]
    fn update(&mut self, update: &BookmarkUpdate) -> DomainResult<()> {
        let changes = BookmarkChanges::from_update(update)?;
        debug!("Applying changes: {:?}", changes);

        in_transaction(&mut self.conn, |conn| {
            let updated = diesel::update(bookmarks::table.filter(bookmarks::name.eq(&update.name)))
                .set(&changes)
                .execute(conn)?;
            if updated == 0 {
                return Err(DomainError::BookmarkNotFound(update.name.clone()));
            }

            if let Some(tag_set) = update.replacement_tags() {
                diesel::delete(tags::table.filter(tags::name.eq(&update.name))).execute(conn)?;
                insert_tags(conn, &update.name, tag_set)?;
                debug!("Replaced tags with {}", Tag::format_tags(tag_set));
            }

            Ok(())
        })
    }

    #[instrument(skip(self), level = "debug")]
    fn list(&mut self, include_archived: bool) -> DomainResult<Vec<Bookmark>> {
        in_transaction(&mut self.conn, |conn| {
            let mut query = bookmarks::table.into_boxed();
            if !include_archived {
                // NULL archived counts as active
                query = query.filter(bookmarks::archived.is_not(true));
            }

            let db_bookmarks = query
                .order(bookmarks::name.asc())
                .load::<DbBookmark>(conn)?;

            let mut tags_by_name: HashMap<String, BTreeSet<Tag>> = HashMap::new();
            for db_tag in tags::table.load::<DbTag>(conn)? {
                tags_by_name
                    .entry(db_tag.name)
                    .or_default()
                    .insert(Tag::from_storage(db_tag.tag));
            }

            let result = db_bookmarks
                .into_iter()
                .map(|db_bookmark| {
                    let tag_set = tags_by_name.remove(&db_bookmark.name).unwrap_or_default();
                    Self::to_domain_model(db_bookmark, tag_set)
                })
                .collect::<Vec<_>>();

            debug!("Listed {} bookmarks", result.len());
            Ok(result)
        })
    }
}
