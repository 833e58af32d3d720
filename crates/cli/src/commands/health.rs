//! Health check.

use freshbasket_renderer::{ClientError, SiteClient};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Fetch `/api/health` and print it as JSON.
///
/// # Errors
///
/// Returns an error if the site is unreachable or unhealthy.
#[allow(clippy::print_stdout)]
pub async fn run(base_url: &str) -> Result<(), HealthError> {
    let client = SiteClient::new(base_url)?;
    let health = client.health().await?;
    println!("{}", serde_json::to_string_pretty(&health)?);
    Ok(())
}
