use askama::Template;
use axum::{extract::State, response::Html};

use crate::{
    App, content,
    error::AppError,
    i18n::Page,
    render,
    trust::Traffic,
};

use super::CommentRow;

#[derive(Template)]
#[template(path = "bot-demo-2.html")]
struct Demo2View<'a> {
    comments: &'a [CommentRow],
    is_bot: bool,
}

pub async fn get_comments(
    State(app): State<App>,
    traffic: Traffic,
) -> Result<Html<String>, AppError> {
    let visibility = content::comment_visibility(traffic);

    let comments: Vec<CommentRow> = app
        .store
        .list_visible(visibility.include_hidden())
        .await?
        .into_iter()
        .map(CommentRow::from)
        .collect();

    if app.config.request_logging {
        tracing::info!(count = comments.len(), ?visibility, "Loaded comments");
    }

    render::page(
        app.config.locale,
        Page::Demo2,
        &Demo2View {
            comments: &comments,
            is_bot: traffic.is_automated(),
        },
    )
}
