use diesel::sql_types::Text;
use diesel::{Insertable, Queryable, QueryableByName};
use std::fmt;

use super::schema::{bookmarks, tags};

#[derive(Queryable, Clone, PartialEq, Eq)]
pub struct DbBookmark {
    pub name: String,
    pub url: Option<String>,
    pub archived: Option<bool>,
}

impl fmt::Display for DbBookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, url: {}, archived: {}",
            self.name,
            self.url.as_deref().unwrap_or("None"),
            self.archived
                .map_or("None".to_string(), |archived| archived.to_string())
        )
    }
}

impl fmt::Debug for DbBookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use the same format as Display
        write!(f, "{}", self)
    }
}

/// New bookmark for insertion
#[derive(Insertable, Debug)]
#[diesel(table_name = bookmarks)]
pub struct NewBookmark<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub archived: bool,
}

#[derive(Queryable, Debug, Clone, PartialEq, Eq)]
pub struct DbTag {
    pub name: String,
    pub tag: String,
}

/// New tag row for insertion
#[derive(Insertable, Debug)]
#[diesel(table_name = tags)]
pub struct NewTag<'a> {
    pub name: &'a str,
    pub tag: &'a str,
}

/// One row of `pragma_table_info`
#[derive(QueryableByName, Debug)]
pub struct ColumnName {
    #[diesel(sql_type = Text)]
    pub name: String,
}
