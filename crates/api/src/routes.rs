use crate::handlers;
use crate::state::MetricsState;
use axum::{routing::get, Router};

pub fn create_metrics_routes(state: MetricsState) -> Router {
    Router::new()
        .route("/metrics", get(handlers::get_metrics))
        .route("/stats", get(handlers::get_stats))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
