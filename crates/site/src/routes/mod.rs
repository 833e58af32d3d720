//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Main page, rendered with the homepage content
//! GET  /api/content    - Homepage content document (JSON)
//! POST /api/subscribe  - Newsletter sign-up (GET renders the main page)
//! GET  /api/health     - Liveness check with timestamp
//! GET  /*              - Static file, else the main page
//! ```

pub mod content;
pub mod health;
pub mod newsletter;
pub mod page;

use axum::{
    Router,
    http::{HeaderValue, header::CACHE_CONTROL},
    routing::{get, post},
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/content", get(content::content))
        .route("/subscribe", post(newsletter::subscribe).get(page::page))
        .route("/health", get(health::health))
}

/// Create all routes for the site.
///
/// API responses are never cached: the page must see fresh content and
/// subscribe results on every request.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(page::page))
        .nest(
            "/api",
            api_routes().layer(SetResponseHeaderLayer::overriding(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .fallback(page::static_or_page)
}
