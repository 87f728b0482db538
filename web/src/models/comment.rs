use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::tbl_comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Comment {
    pub id: i32,
    pub commenter: String,
    pub details: String,
    pub silent_discard: bool,
    pub created_at: NaiveDateTime,
}

// `id` and `created_at` are assigned by the database
#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::tbl_comments)]
pub struct NewComment<'a> {
    pub commenter: &'a str,
    pub details: &'a str,
    pub silent_discard: bool,
}
