use crate::state::MetricsState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn get_stats(State(state): State<MetricsState>) -> Json<Value> {
    let snapshot = state.counters.snapshot();
    Json(json!({
        "queries_total": snapshot.queries_total,
        "errors_total": snapshot.errors_total,
    }))
}
