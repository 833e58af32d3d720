//! Render the homepage once.
//!
//! Runs the same load the browser does: live content if the site answers,
//! otherwise the embedded fallback with the offline banner.

use std::path::Path;

use freshbasket_renderer::{ClientError, LoadOutcome, PageDocument, Renderer, SiteClient};
use thiserror::Error;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The client could not be built.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Reading the shell or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the page and write it to `out`, or stdout.
///
/// # Errors
///
/// Returns an error if the base URL is invalid or a file can't be read or written.
/// An unreachable site is not an error: the fallback content is rendered.
#[allow(clippy::print_stdout)]
pub async fn run(base_url: &str, shell: Option<&Path>, out: Option<&Path>) -> Result<(), RenderError> {
    let mut page = match shell {
        Some(path) => PageDocument::from_shell(std::fs::read_to_string(path)?),
        None => PageDocument::default(),
    };

    let mut renderer = Renderer::new(SiteClient::new(base_url)?);
    match renderer.load(&mut page).await {
        LoadOutcome::Live => tracing::info!(base_url, "Rendered live content"),
        LoadOutcome::Fallback | LoadOutcome::Stale => {
            tracing::warn!(base_url, "Site unavailable, rendered fallback content");
        }
    }

    let html = page.render();
    match out {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!(path = %path.display(), "Wrote page");
        }
        None => println!("{html}"),
    }

    Ok(())
}
