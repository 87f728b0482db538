use axum::{Router, routing::get};

use crate::App;

use super::{
    comment::{create::create_comment, get::get_comments},
    flights::get_flights,
    pages::{
        demo_1, demo_1_info, demo_2_info, demo_3_info, edge_services, favicon, landing,
        robots_txt,
    },
};

pub fn route() -> Router<App> {
    Router::<App>::new()
        .route("/", get(landing))
        .route("/bot-demo-1-info", get(demo_1_info))
        .route("/bot-demo-1", get(demo_1))
        .route("/bot-demo-2-info", get(demo_2_info))
        .route("/bot-demo-2", get(get_comments).post(create_comment))
        .route("/bot-demo-3-info", get(demo_3_info))
        .route("/bot-demo-3", get(get_flights))
        .route("/aws-edge-services", get(edge_services))
        .route("/robots.txt", get(robots_txt))
        .route("/favicon.ico", get(favicon))
}
