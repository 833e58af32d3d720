//! FreshBasket site - homepage content service.
//!
//! Serves the homepage JSON API and the static page on port 3000 (or `PORT`).
//!
//! # Architecture
//!
//! - Axum web framework, static files via `tower-http`
//! - Homepage copy shared with the renderer through `freshbasket-core`
//! - Newsletter subscribers kept in process memory only

#![cfg_attr(not(test), forbid(unsafe_code))]

use freshbasket_site::{AppState, SiteConfig, telemetry};

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = SiteConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = telemetry::init_sentry(&config);

    telemetry::init_tracing(config.log_format);

    let addr = config.socket_addr();
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("FreshBasket server running on http://{}", addr);

    freshbasket_site::serve(listener, state)
        .await
        .expect("Server error");
}
