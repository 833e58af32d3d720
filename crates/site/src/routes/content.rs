//! Homepage content route handler.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::state::AppState;

/// Return the homepage content document.
#[instrument(skip(state))]
pub async fn content(State(state): State<AppState>) -> Response {
    Json(state.content()).into_response()
}
