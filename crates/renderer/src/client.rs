//! HTTP client for the content service.
//!
//! The renderer only depends on the two traits here; [`SiteClient`] is the
//! `reqwest` implementation, and tests substitute scripted fakes.

use std::future::Future;
use std::time::Duration;

use freshbasket_core::{ContentDocument, HealthResponse, MessageResponse, SubscribeRequest};
use reqwest::header::{CACHE_CONTROL, HeaderValue, PRAGMA};
use url::Url;

use crate::error::ClientError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can produce the homepage content document.
pub trait ContentSource {
    /// Fetch the current content document.
    fn fetch_content(&self) -> impl Future<Output = Result<ContentDocument, ClientError>> + Send;
}

/// Something that accepts newsletter sign-ups.
pub trait SubscribeEndpoint {
    /// Submit `email` (already trimmed) and return the service's reply.
    fn subscribe(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<MessageResponse, ClientError>> + Send;
}

/// Client for a running FreshBasket site.
#[derive(Debug, Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SiteClient {
    /// Create a client for the site at `base_url` with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    /// The site's base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// Fetch `/api/health`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self.http.get(self.endpoint("/api/health")?).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

impl ContentSource for SiteClient {
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_content(&self) -> Result<ContentDocument, ClientError> {
        let response = self
            .http
            .get(self.endpoint("/api/content")?)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .header(PRAGMA, HeaderValue::from_static("no-cache"))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

impl SubscribeEndpoint for SiteClient {
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    async fn subscribe(&self, email: &str) -> Result<MessageResponse, ClientError> {
        let body = SubscribeRequest {
            email: email.to_string(),
        };

        let response = self
            .http
            .post(self.endpoint("/api/subscribe")?)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_against_base() {
        let client = SiteClient::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(
            client.endpoint("/api/content").unwrap().as_str(),
            "http://127.0.0.1:3000/api/content"
        );

        let client = SiteClient::new("https://freshbasket.example/shop/").unwrap();
        assert_eq!(
            client.endpoint("/api/subscribe").unwrap().as_str(),
            "https://freshbasket.example/api/subscribe"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            SiteClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
