use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    i18n::{Locale, Page},
    render::{self, ErrorView, NotFoundView},
    store::StoreError,
};

#[derive(Debug)]
pub enum AppError {
    /// Rejected user input, answered with a plain-text 400
    Validation(String),

    Storage {
        error: StoreError,

        #[cfg(debug_assertions)]
        backtrace: backtrace::Backtrace,
    },

    RouteNotFound { locale: Locale },

    Unhandled(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Storage {
                error,
                #[cfg(debug_assertions)]
                backtrace,
            } => {
                #[cfg(debug_assertions)]
                tracing::error!(
                    %error,
                    frames = ?filter_backtrace(&backtrace),
                    "Database error"
                );
                #[cfg(not(debug_assertions))]
                tracing::error!(%error, "Database error");

                (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
            }
            AppError::RouteNotFound { locale } => {
                error_page(StatusCode::NOT_FOUND, locale, Page::NotFound, &NotFoundView)
            }
            AppError::Unhandled(e) => {
                tracing::error!(error = %e, "Unhandled error");
                error_page(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Locale::default(),
                    Page::ServerError,
                    &ErrorView { error: &e },
                )
            }
        }
    }
}

fn error_page<V: askama::Template>(
    status_code: StatusCode,
    locale: Locale,
    page: Page,
    view: &V,
) -> Response {
    match render::page(locale, page, view) {
        Ok(html) => (status_code, html).into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Couldn't render the error page");
            (status_code, page.title(locale)).into_response()
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(msg) => AppError::Validation(msg.into()),
            error => AppError::Storage {
                error,

                #[cfg(debug_assertions)]
                backtrace: backtrace::Backtrace::new(),
            },
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Unhandled(format!("Template error: {e}"))
    }
}

impl From<&'static str> for AppError {
    fn from(e: &'static str) -> Self {
        AppError::Unhandled(e.into())
    }
}

impl From<String> for AppError {
    fn from(e: String) -> Self {
        AppError::Unhandled(e)
    }
}

#[cfg(debug_assertions)]
#[derive(Debug)]
#[allow(dead_code)] // only read through `Debug` in the error log
struct FrameInfo {
    name: String,
    loc: String,
}

#[cfg(debug_assertions)]
fn filter_backtrace(backtrace: &backtrace::Backtrace) -> Vec<FrameInfo> {
    const MODULE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");
    let mut frames_info: Vec<FrameInfo> = Vec::new();

    for frame in backtrace.frames() {
        for symbol in frame.symbols() {
            if let (Some(name), Some(filename), Some(lineno)) = (
                symbol.name().map(|n| n.to_string()),
                symbol.filename().map(|f| f.to_owned()),
                symbol.lineno(),
            ) {
                if name.contains(MODULE_PREFIX) {
                    frames_info.push(FrameInfo {
                        name,
                        loc: format!("{}:{}", filename.display(), lineno),
                    });
                }
            }
        }
    }

    frames_info
}
