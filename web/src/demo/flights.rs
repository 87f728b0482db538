use askama::Template;
use axum::{extract::State, response::Html};

use crate::{
    App,
    content::flights::{FlightOffer, flight_offers},
    error::AppError,
    i18n::Page,
    render,
    trust::Traffic,
};

#[derive(Template)]
#[template(path = "bot-demo-3.html")]
struct Demo3View<'a> {
    flights: &'a [FlightOffer],
    is_bot: bool,
}

pub async fn get_flights(
    State(app): State<App>,
    traffic: Traffic,
) -> Result<Html<String>, AppError> {
    let flights = flight_offers(traffic);

    render::page(
        app.config.locale,
        Page::Demo3,
        &Demo3View {
            flights: &flights,
            is_bot: traffic.is_automated(),
        },
    )
}
