//! Newsletter subscription route handler.
//!
//! Adds the submitted address to the in-memory subscriber set. Repeat
//! sign-ups succeed too, with a different message.

use axum::{Json, body::Bytes, extract::State};
use freshbasket_core::{Email, MessageResponse};
use serde_json::Value;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;
use crate::subscribers::SubscribeOutcome;

/// Message for a first-time subscriber.
pub const WELCOME_MESSAGE: &str =
    "Thanks for joining FreshBasket! Check your inbox for a welcome gift.";

/// Message for an address already on the list.
pub const WELCOME_BACK_MESSAGE: &str =
    "You're already on the FreshBasket list. Weekly harvest updates are headed your way!";

/// Subscribe to the newsletter.
///
/// The page script posts JSON; the plain HTML form (no script) posts
/// `application/x-www-form-urlencoded`. Both are accepted. Anything else,
/// including JSON whose `email` is missing or not a string, counts as an
/// empty address and gets the same 400 as a malformed one.
#[instrument(skip(state, body))]
pub async fn subscribe(State(state): State<AppState>, body: Bytes) -> Result<Json<MessageResponse>> {
    let raw = submitted_email(&body);
    let email = Email::parse(&raw)?;

    let message = match state.subscribers().subscribe(email.clone())? {
        SubscribeOutcome::New => {
            tracing::info!(email = %email, "Newsletter subscription successful");
            WELCOME_MESSAGE
        }
        SubscribeOutcome::AlreadySubscribed => {
            tracing::info!(email = %email, "Email already subscribed - treating as success");
            WELCOME_BACK_MESSAGE
        }
    };

    Ok(Json(MessageResponse::new(message)))
}

/// Pull the `email` string out of a request body, or `""` if there isn't one.
fn submitted_email(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        return value
            .get("email")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
    }

    url::form_urlencoded::parse(body)
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_email() {
        assert_eq!(submitted_email(br#"{"email":" a@b.c "}"#), " a@b.c ");
        assert_eq!(submitted_email(br#"{"email":42}"#), "");
        assert_eq!(submitted_email(br"{}"), "");
        assert_eq!(submitted_email(b""), "");
    }

    #[test]
    fn test_submitted_email_from_form() {
        assert_eq!(submitted_email(b"email=Jane%40Example.com"), "Jane@Example.com");
        assert_eq!(submitted_email(b"name=jane&email=+a@b.c"), " a@b.c");
        assert_eq!(submitted_email(b"name=jane"), "");
    }
}
