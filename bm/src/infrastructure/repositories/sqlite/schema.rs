// Mirrors the tables created in migration.rs.

diesel::table! {
    bookmarks (name) {
        name -> Text,
        url -> Nullable<Text>,
        archived -> Nullable<Bool>,
    }
}

diesel::table! {
    tags (name, tag) {
        name -> Text,
        tag -> Text,
    }
}
