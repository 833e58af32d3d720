//! Main page and static file route handlers.
//!
//! The main page is rendered on the server: the shell's regions are filled
//! from the content document before it is sent. Any GET that isn't an API
//! route is served from the static directory when a file exists there, and
//! gets the main page otherwise.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Local};
use freshbasket_renderer::{
    PageDocument,
    render::{render_content, set_year},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::instrument;

use crate::state::AppState;

/// Render the main page.
#[instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state))
}

/// Fill the page shell with the current content.
#[must_use]
pub fn render_page(state: &AppState) -> String {
    let mut page = PageDocument::from_shell(state.shell());
    set_year(&mut page, Local::now().year());
    render_content(&mut page, state.content());
    page.render()
}

/// Serve a static file, or the main page when there is none.
///
/// Hidden paths (any segment starting with `.`) and the raw `index.html`
/// shell are never served from disk.
pub async fn static_or_page(State(state): State<AppState>, request: Request) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let path = request.uri().path();
    if is_hidden(path) || path == "/index.html" {
        return Html(render_page(&state)).into_response();
    }

    let files = ServeDir::new(&state.config().static_dir).append_index_html_on_directories(false);
    match files.oneshot(request).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.into_response(),
        _ => Html(render_page(&state)).into_response(),
    }
}

/// Whether any path segment is a dotfile or dot-directory, encoded or not.
fn is_hidden(path: &str) -> bool {
    path.split('/').any(|segment| {
        segment.starts_with('.')
            || segment
                .get(..3)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("%2e"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden("/.env"));
        assert!(is_hidden("/.git/config"));
        assert!(is_hidden("/assets/../.env"));
        assert!(is_hidden("/%2eenv"));
        assert!(is_hidden("/%2Egit/HEAD"));

        assert!(!is_hidden("/"));
        assert!(!is_hidden("/deals/weekly"));
        assert!(!is_hidden("/styles.css"));
    }
}
