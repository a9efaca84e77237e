use axum::extract::{Query, State};
use axum::Json;

use backend_application::commands::estimate_commands;
use backend_application::AppState;
use backend_domain::{CarQuery, CarbonEvent, FlightLeg, FlightQuery, ShippingQuery};

use crate::error::HttpError;

pub async fn create_flight_event(
    State(state): State<AppState>,
    Query(query): Query<FlightQuery>,
    Json(legs): Json<Vec<FlightLeg>>,
) -> Result<Json<CarbonEvent>, HttpError> {
    let event = estimate_commands::create_flight_event(&state, query.passengers, legs).await?;
    Ok(Json(event))
}

pub async fn create_car_event(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<CarbonEvent>, HttpError> {
    let event = estimate_commands::create_car_event(&state, query).await?;
    Ok(Json(event))
}

pub async fn create_shipping_event(
    State(state): State<AppState>,
    Query(query): Query<ShippingQuery>,
) -> Result<Json<CarbonEvent>, HttpError> {
    let event = estimate_commands::create_shipping_event(&state, query).await?;
    Ok(Json(event))
}
