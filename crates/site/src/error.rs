//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server faults to Sentry
//! before responding to the client. API handlers return `Result<T, AppError>`
//! and every error body is JSON of the form `{ "message": "..." }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use freshbasket_core::{EmailError, MessageResponse};
use thiserror::Error;

use crate::subscribers::SubscriberStoreError;

/// Message returned for any rejected newsletter address.
pub const INVALID_EMAIL_MESSAGE: &str = "Please provide a valid email address.";

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Newsletter address failed validation.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Subscriber store operation failed.
    #[error("Subscriber store error: {0}")]
    Store(#[from] SubscriberStoreError),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::InvalidEmail(_) => INVALID_EMAIL_MESSAGE,
            Self::Store(_) => "Internal server error",
        };

        (self.status(), Json(MessageResponse::new(message))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::InvalidEmail(EmailError::MissingAtSymbol);
        assert_eq!(err.to_string(), "Invalid email: email must contain an @ symbol");

        let err = AppError::Store(SubscriberStoreError::LockPoisoned);
        assert!(err.to_string().starts_with("Subscriber store error: "));
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::InvalidEmail(EmailError::Empty)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Store(SubscriberStoreError::LockPoisoned)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
