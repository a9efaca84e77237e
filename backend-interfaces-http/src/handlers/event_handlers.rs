use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use backend_application::commands::event_commands;
use backend_application::queries::event_queries;
use backend_application::AppState;
use backend_domain::{CarbonEvent, CarbonEventPayload, DateRangeQuery, TypeSum};

use crate::error::HttpError;

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarbonEvent>, HttpError> {
    let event = event_queries::get_event(&state, id).await?;
    Ok(Json(event))
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<CarbonEvent>>, HttpError> {
    let events = event_queries::list_in_range(&state, range).await?;
    Ok(Json(events))
}

pub async fn accumulate(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<u64>, HttpError> {
    let total = event_queries::accumulate_in_range(&state, range).await?;
    Ok(Json(total))
}

pub async fn accumulate_by_type(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<TypeSum>>, HttpError> {
    let sums = event_queries::accumulate_by_type(&state, range).await?;
    Ok(Json(sums))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CarbonEventPayload>,
) -> Result<Json<CarbonEvent>, HttpError> {
    let event = event_commands::create_event(&state, payload).await?;
    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CarbonEventPayload>,
) -> Result<Json<CarbonEvent>, HttpError> {
    let event = event_commands::update_event(&state, id, payload).await?;
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HttpError> {
    event_commands::delete_event(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_events_in_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<StatusCode, HttpError> {
    event_commands::delete_in_range(&state, range).await?;
    Ok(StatusCode::NO_CONTENT)
}
