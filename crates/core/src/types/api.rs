//! JSON bodies exchanged between the site and its clients.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/subscribe`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
}

/// Body returned by `POST /api/subscribe`, on success and on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Build a response carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Body returned by `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Milliseconds since the Unix epoch at the time of the request.
    pub timestamp: i64,
}

impl HealthResponse {
    /// The status token reported by a live service.
    pub const OK: &'static str = "ok";

    /// Build a healthy response stamped with `timestamp`.
    #[must_use]
    pub fn ok(timestamp: i64) -> Self {
        Self {
            status: Self::OK.to_string(),
            timestamp,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_request_missing_email_is_empty() {
        let request: SubscribeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.email, "");
    }

    #[test]
    fn test_message_response_without_message() {
        let response: MessageResponse = serde_json::from_str("{}").unwrap();
        assert!(response.message.is_none());
    }

    #[test]
    fn test_health_response_shape() {
        let json = serde_json::to_value(HealthResponse::ok(1_700_000_000_000)).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
    }
}
