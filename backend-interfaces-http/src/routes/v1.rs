use axum::Router;

use backend_application::AppState;

use crate::handlers::{estimate_handlers, event_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/carbon-events",
            axum::routing::get(event_handlers::list_events)
                .post(event_handlers::create_event)
                .delete(event_handlers::delete_events_in_range),
        )
        .route(
            "/api/v1/carbon-events/accumulate",
            axum::routing::get(event_handlers::accumulate),
        )
        .route(
            "/api/v1/carbon-events/accumulate/by-type",
            axum::routing::get(event_handlers::accumulate_by_type),
        )
        .route(
            "/api/v1/carbon-events/flight",
            axum::routing::post(estimate_handlers::create_flight_event),
        )
        .route(
            "/api/v1/carbon-events/car",
            axum::routing::post(estimate_handlers::create_car_event),
        )
        .route(
            "/api/v1/carbon-events/shipping",
            axum::routing::post(estimate_handlers::create_shipping_event),
        )
        .route(
            "/api/v1/carbon-events/:id",
            axum::routing::get(event_handlers::get_event)
                .put(event_handlers::update_event)
                .delete(event_handlers::delete_event),
        )
        .route(
            "/api/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/api/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/api/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
