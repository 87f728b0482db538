use axum::{debug_handler, extract::State, response::Redirect};

use crate::{App, content, error::AppError, form::Form, trust::Traffic};

use super::CommentSubmission;

#[debug_handler]
pub async fn create_comment(
    State(app): State<App>,
    traffic: Traffic,
    Form(submission): Form<CommentSubmission>,
) -> Result<Redirect, AppError> {
    let silent_discard = content::silent_discard(traffic);

    if app.config.request_logging {
        tracing::info!(
            commenter = ?submission.commenter,
            details = ?submission.details,
            is_bot = traffic.is_automated(),
            silent_discard,
            "Parsed comment submission"
        );
    }

    let id = app
        .store
        .insert_comment(
            submission.commenter.as_deref().unwrap_or_default(),
            submission.details.as_deref().unwrap_or_default(),
            silent_discard,
        )
        .await?;

    tracing::info!(id, silent_discard, "Comment stored");

    Ok(Redirect::to("/bot-demo-2"))
}
