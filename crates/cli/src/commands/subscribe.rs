//! Newsletter sign-up from the command line.

use freshbasket_renderer::{ClientError, Notification, SiteClient, SubscribeEndpoint, newsletter};
use thiserror::Error;

/// Errors that can occur while subscribing.
#[derive(Debug, Error)]
pub enum SubscribeError {
    /// The client could not be built.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The address was rejected or the request failed.
    #[error("{0}")]
    NotSubscribed(String),
}

/// Submit `email` and print the resulting notification.
///
/// # Errors
///
/// Returns an error if the address was rejected or the request failed.
#[allow(clippy::print_stdout)]
pub async fn run(base_url: &str, email: &str) -> Result<(), SubscribeError> {
    let client = SiteClient::new(base_url)?;
    let message = subscribe(&client, email).await?;
    println!("{message}");
    Ok(())
}

/// Submit `email` through `endpoint`, returning the success message.
///
/// # Errors
///
/// Returns [`SubscribeError::NotSubscribed`] with the notification text
/// unless the address was accepted.
pub async fn subscribe<E: SubscribeEndpoint>(
    endpoint: &E,
    email: &str,
) -> Result<String, SubscribeError> {
    match newsletter::submit(endpoint, email).await {
        Notification::Subscribed(message) => Ok(message),
        Notification::Rejected(message) | Notification::Failed(message) => {
            Err(SubscribeError::NotSubscribed(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use freshbasket_core::MessageResponse;
    use reqwest::StatusCode;

    use super::*;

    struct FixedEndpoint(Option<&'static str>);

    impl SubscribeEndpoint for FixedEndpoint {
        async fn subscribe(&self, _email: &str) -> Result<MessageResponse, ClientError> {
            self.0
                .map(MessageResponse::new)
                .ok_or(ClientError::Status(StatusCode::BAD_REQUEST))
        }
    }

    #[tokio::test]
    async fn test_accepted_address_succeeds() {
        let result = subscribe(&FixedEndpoint(Some("Welcome")), "jane@example.com").await;

        assert!(matches!(result, Ok(message) if message == "Welcome"));
    }

    #[tokio::test]
    async fn test_blank_address_is_an_error() {
        let result = subscribe(&FixedEndpoint(Some("Welcome")), "  ").await;

        assert!(matches!(
            result,
            Err(SubscribeError::NotSubscribed(message))
                if message == newsletter::EMPTY_EMAIL_MESSAGE
        ));
    }

    #[tokio::test]
    async fn test_failed_request_is_an_error() {
        let result = subscribe(&FixedEndpoint(None), "jane.example.com").await;

        assert!(matches!(
            result,
            Err(SubscribeError::NotSubscribed(message))
                if message == newsletter::FAILURE_MESSAGE
        ));
    }
}
