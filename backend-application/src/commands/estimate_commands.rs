// Estimate-then-persist workflow
// The gateway call happens first; nothing is written unless it succeeds.

use chrono::Local;
use tracing::error;

use backend_domain::{
    CarQuery, CarbonEvent, CarbonEventType, DistanceUnit, FlightLeg, ShippingQuery, WeightUnit,
};

use crate::{AppError, AppState};

pub async fn create_flight_event(
    state: &AppState,
    passengers: u32,
    legs: Vec<FlightLeg>,
) -> Result<CarbonEvent, AppError> {
    if passengers == 0 {
        return Err(AppError::BadRequest(
            "passengers must be at least 1".to_string(),
        ));
    }
    if legs.is_empty() {
        return Err(AppError::BadRequest(
            "at least one flight leg is required".to_string(),
        ));
    }

    state.metrics.record_estimate_request();
    let grams = state
        .estimator
        .estimate_flight(passengers, &legs)
        .await
        .map_err(|err| {
            state.metrics.record_estimate_error();
            error!("flight estimate failed: {}", err);
            AppError::from(err)
        })?;

    persist_estimated(state, CarbonEventType::Flight, grams).await
}

/// Distances are measured in km at this boundary.
pub async fn create_car_event(state: &AppState, query: CarQuery) -> Result<CarbonEvent, AppError> {
    if query.distance_value <= 0.0 {
        return Err(AppError::BadRequest(
            "distanceValue must be positive".to_string(),
        ));
    }

    state.metrics.record_estimate_request();
    let grams = state
        .estimator
        .estimate_vehicle(
            query.distance_value,
            DistanceUnit::Km,
            &query.vehicle_make,
            &query.vehicle_model,
            query.vehicle_year,
        )
        .await
        .map_err(|err| {
            state.metrics.record_estimate_error();
            error!("vehicle estimate failed: {}", err);
            AppError::from(err)
        })?;

    persist_estimated(state, CarbonEventType::Car, grams).await
}

/// Weight in kg, distance in km at this boundary.
pub async fn create_shipping_event(
    state: &AppState,
    query: ShippingQuery,
) -> Result<CarbonEvent, AppError> {
    if query.weight_value <= 0.0 {
        return Err(AppError::BadRequest(
            "weightValue must be positive".to_string(),
        ));
    }
    if query.distance_value <= 0.0 {
        return Err(AppError::BadRequest(
            "distanceValue must be positive".to_string(),
        ));
    }

    state.metrics.record_estimate_request();
    let grams = state
        .estimator
        .estimate_shipping(
            query.weight_value,
            WeightUnit::Kg,
            query.distance_value,
            DistanceUnit::Km,
            query.transport_method,
        )
        .await
        .map_err(|err| {
            state.metrics.record_estimate_error();
            error!("shipping estimate failed: {}", err);
            AppError::from(err)
        })?;

    persist_estimated(state, CarbonEventType::Shipping, grams).await
}

/// Derived events are stamped with the server's local calendar date.
async fn persist_estimated(
    state: &AppState,
    event_type: CarbonEventType,
    grams: u64,
) -> Result<CarbonEvent, AppError> {
    let event = CarbonEvent::new(event_type, Local::now().date_naive(), grams);
    state.event_repo.save(&event).await.map_err(|err| {
        error!("failed to persist estimated event: {}", err);
        AppError::Internal(err)
    })?;
    state.metrics.record_created();
    Ok(event)
}
