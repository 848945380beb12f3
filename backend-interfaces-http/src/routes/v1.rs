use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{event_handlers, ops_handlers, record_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/tags",
            post(record_handlers::create_tag).get(record_handlers::list_tags),
        )
        .route("/v1/tags/:id", get(record_handlers::get_tag))
        .route(
            "/v1/readers",
            post(record_handlers::create_reader).get(record_handlers::list_readers),
        )
        .route("/v1/readers/:id", get(record_handlers::get_reader))
        .route(
            "/v1/assets",
            post(record_handlers::create_asset).get(record_handlers::list_assets),
        )
        .route("/v1/assets/:id", get(record_handlers::get_asset))
        .route(
            "/v1/events",
            post(event_handlers::create_event).get(event_handlers::list_events),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
