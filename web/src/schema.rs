// Mirrors the table created by `store::CREATE_COMMENTS_TABLE`.

diesel::table! {
    tbl_comments (id) {
        id -> Integer,
        commenter -> Text,
        details -> Text,
        silent_discard -> Bool,
        created_at -> Timestamp,
    }
}
