use askama::Template;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};

use crate::{App, content, error::AppError, i18n::Page, render, trust::Traffic};

const ROBOTS_TXT: &str = "User-agent: *
Disallow: /private/*
Allow: /

Sitemap: https://demo.wadafa.xyz/sitemap.xml";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexView<'a> {
    message: &'a str,
    is_bot: bool,
}

#[derive(Template)]
#[template(path = "bot-demo-1-info.html")]
struct Demo1InfoView;

#[derive(Template)]
#[template(path = "bot-demo-1.html")]
struct Demo1View<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(path = "bot-demo-2-info.html")]
struct Demo2InfoView;

#[derive(Template)]
#[template(path = "bot-demo-3-info.html")]
struct Demo3InfoView;

#[derive(Template)]
#[template(path = "aws-edge-services.html")]
struct EdgeServicesView;

pub async fn landing(
    State(app): State<App>,
    traffic: Traffic,
) -> Result<Html<String>, AppError> {
    let locale = app.config.locale;

    render::page(
        locale,
        Page::Landing,
        &IndexView {
            message: content::landing_message(traffic, locale),
            is_bot: traffic.is_automated(),
        },
    )
}

pub async fn demo_1_info(State(app): State<App>) -> Result<Html<String>, AppError> {
    render::page(app.config.locale, Page::Demo1Info, &Demo1InfoView)
}

// Bots are expected to be blocked at the edge before they get here, so the
// page only has a message for humans.
pub async fn demo_1(State(app): State<App>) -> Result<Html<String>, AppError> {
    render::page(
        app.config.locale,
        Page::Demo1,
        &Demo1View {
            message: "hello non-bot",
        },
    )
}

pub async fn demo_2_info(State(app): State<App>) -> Result<Html<String>, AppError> {
    render::page(app.config.locale, Page::Demo2Info, &Demo2InfoView)
}

pub async fn demo_3_info(State(app): State<App>) -> Result<Html<String>, AppError> {
    render::page(app.config.locale, Page::Demo3Info, &Demo3InfoView)
}

pub async fn edge_services(State(app): State<App>) -> Result<Html<String>, AppError> {
    render::page(app.config.locale, Page::EdgeServices, &EdgeServicesView)
}

pub async fn robots_txt() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        ROBOTS_TXT,
    )
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn not_found(State(app): State<App>) -> AppError {
    AppError::RouteNotFound {
        locale: app.config.locale,
    }
}
