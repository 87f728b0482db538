use askama::Template;
use axum::response::Html;

use crate::{
    error::AppError,
    i18n::{Locale, Page},
};

#[derive(Template)]
#[template(path = "layout.html")]
struct Layout<'a> {
    lang: &'a str,
    title: &'a str,
    body: &'a str,
}

/// Renders `view` on its own, then renders the result into the shared layout.
pub fn page<V: Template>(locale: Locale, page: Page, view: &V) -> Result<Html<String>, AppError> {
    let body = view.render()?;

    let html = Layout {
        lang: locale.code(),
        title: page.title(locale),
        body: &body,
    }
    .render()?;

    Ok(Html(html))
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundView;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView<'a> {
    pub error: &'a str,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_page_wraps_view_in_layout() {
        let Html(html) = page(Locale::En, Page::ServerError, &ErrorView { error: "boom" }).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Server Error</title>"));
        assert!(html.contains("<pre class=\"error\">boom</pre>"));
        assert!(html.contains("lang=\"en\""));
    }

    #[test]
    fn test_inner_view_is_escaped_once() {
        let Html(html) = page(
            Locale::Ko,
            Page::ServerError,
            &ErrorView {
                error: "<script>",
            },
        )
        .unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("&amp;lt;"), "The layout must not escape the body again");
        assert!(html.contains("<title>서버 오류</title>"));
    }
}
