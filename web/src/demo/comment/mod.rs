pub mod create;
pub mod get;

use serde::Deserialize;

use crate::models::comment::Comment;

// The model that will be rendered to the visitor
#[derive(Debug, Clone, PartialEq)]
pub struct CommentRow {
    pub id: i32,
    pub commenter: String,
    pub details: String,
    pub posted_at: String,
    /// Silently discarded, only ever rendered for bot traffic
    pub hidden: bool,
}

impl From<Comment> for CommentRow {
    fn from(c: Comment) -> Self {
        CommentRow {
            id: c.id,
            commenter: c.commenter,
            details: c.details,
            posted_at: c.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            hidden: c.silent_discard,
        }
    }
}

// Either field may be missing from the form, validation happens in the store
#[derive(Deserialize, Debug)]
pub struct CommentSubmission {
    pub commenter: Option<String>,
    pub details: Option<String>,
}
