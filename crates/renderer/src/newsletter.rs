//! Newsletter form submission.

use crate::client::SubscribeEndpoint;

/// Shown when the email field is blank.
pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Shown when the service accepted the address without a message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thanks for subscribing!";

/// Shown when the request failed or the service rejected the address.
pub const FAILURE_MESSAGE: &str = "We couldn't process your subscription. Please try again.";

/// Feedback for the visitor after submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Rejected locally; nothing was sent.
    Rejected(String),
    /// Accepted by the service. The form should be cleared.
    Subscribed(String),
    /// The request failed.
    Failed(String),
}

impl Notification {
    /// Text to show the visitor.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(message) | Self::Subscribed(message) | Self::Failed(message) => message,
        }
    }

    /// Whether the form should be reset.
    #[must_use]
    pub const fn reset_form(&self) -> bool {
        matches!(self, Self::Subscribed(_))
    }
}

/// Submit the newsletter form.
pub async fn submit<E: SubscribeEndpoint>(endpoint: &E, email: &str) -> Notification {
    let email = email.trim();
    if email.is_empty() {
        return Notification::Rejected(EMPTY_EMAIL_MESSAGE.to_string());
    }

    match endpoint.subscribe(email).await {
        Ok(response) => Notification::Subscribed(
            response
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Newsletter subscription failed");
            Notification::Failed(FAILURE_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use freshbasket_core::MessageResponse;
    use reqwest::StatusCode;

    use super::*;
    use crate::error::ClientError;

    /// Records submitted addresses and answers with a fixed result.
    struct FakeEndpoint {
        reply: Option<Option<String>>,
        seen: Mutex<Vec<String>>,
    }

    impl FakeEndpoint {
        fn replying(message: Option<&str>) -> Self {
            Self {
                reply: Some(message.map(str::to_string)),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl SubscribeEndpoint for FakeEndpoint {
        async fn subscribe(&self, email: &str) -> Result<MessageResponse, ClientError> {
            self.seen.lock().unwrap().push(email.to_string());
            self.reply
                .clone()
                .map(|message| MessageResponse { message })
                .ok_or(ClientError::Status(StatusCode::BAD_REQUEST))
        }
    }

    #[tokio::test]
    async fn test_blank_email_is_rejected_without_request() {
        let endpoint = FakeEndpoint::replying(Some("ok"));

        let notification = submit(&endpoint, "   ").await;

        assert_eq!(
            notification,
            Notification::Rejected(EMPTY_EMAIL_MESSAGE.to_string())
        );
        assert!(!notification.reset_form());
        assert!(endpoint.seen().is_empty());
    }

    #[tokio::test]
    async fn test_success_uses_server_message_and_resets_form() {
        let endpoint = FakeEndpoint::replying(Some("Welcome aboard"));

        let notification = submit(&endpoint, "  jane@example.com ").await;

        assert_eq!(notification.message(), "Welcome aboard");
        assert!(notification.reset_form());
        assert_eq!(endpoint.seen(), vec!["jane@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default() {
        let endpoint = FakeEndpoint::replying(None);

        let notification = submit(&endpoint, "jane@example.com").await;

        assert_eq!(notification.message(), DEFAULT_SUCCESS_MESSAGE);
        assert!(notification.reset_form());
    }

    #[tokio::test]
    async fn test_failure_is_reported() {
        let endpoint = FakeEndpoint::failing();

        let notification = submit(&endpoint, "jane.example.com").await;

        assert_eq!(notification, Notification::Failed(FAILURE_MESSAGE.to_string()));
        assert!(!notification.reset_form());
    }
}
