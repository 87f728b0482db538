use axum::extract::{FromRequest, Request, rejection::FormRejection};

use crate::error::AppError;

// We define our own `Form` extractor that turns every rejection from
// `axum::Form` into a plain-text 400
pub struct Form<T>(pub T);

impl<S, T> FromRequest<S> for Form<T>
where
    axum::Form<T>: FromRequest<S, Rejection = FormRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Form::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Rejected form submission");
                Err(AppError::Validation(rejection.body_text()))
            }
        }
    }
}
