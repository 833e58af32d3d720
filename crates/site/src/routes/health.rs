//! Liveness check.

use axum::{Json, extract::State};
use chrono::Utc;
use freshbasket_core::HealthResponse;

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns `"ok"` and the current time in milliseconds since the Unix epoch.
/// Does not check dependencies; there are none.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = Utc::now().max(state.started_at());
    Json(HealthResponse::ok(now.timestamp_millis()))
}
