//! Application state shared across handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use freshbasket_core::{ContentDocument, site_content};
use freshbasket_renderer::page::DEFAULT_SHELL;

use crate::config::SiteConfig;
use crate::subscribers::{InMemorySubscriberStore, SubscriberStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// content document, the subscriber store, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    content: Arc<ContentDocument>,
    subscribers: Arc<dyn SubscriberStore>,
    shell: String,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Create application state serving the FreshBasket homepage copy with an
    /// empty in-memory subscriber set.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self::with_parts(
            config,
            Arc::new(site_content().clone()),
            Arc::new(InMemorySubscriberStore::new()),
        )
    }

    /// Create application state from explicit parts.
    ///
    /// # Arguments
    ///
    /// * `config` - Site configuration
    /// * `content` - Document served at `/api/content`
    /// * `subscribers` - Newsletter subscriber store
    #[must_use]
    pub fn with_parts(
        config: SiteConfig,
        content: Arc<ContentDocument>,
        subscribers: Arc<dyn SubscriberStore>,
    ) -> Self {
        let shell = load_shell(&config);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                subscribers,
                shell,
                started_at: Utc::now(),
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get the homepage content document.
    #[must_use]
    pub fn content(&self) -> &ContentDocument {
        &self.inner.content
    }

    /// Get the newsletter subscriber store.
    #[must_use]
    pub fn subscribers(&self) -> &dyn SubscriberStore {
        self.inner.subscribers.as_ref()
    }

    /// Page shell the main page is rendered into.
    #[must_use]
    pub fn shell(&self) -> &str {
        &self.inner.shell
    }

    /// When this state was created, i.e. process start for the server.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.inner.started_at
    }
}

/// Read `index.html` from the static directory, or use the bundled shell.
fn load_shell(config: &SiteConfig) -> String {
    let path = config.index_path();
    match std::fs::read_to_string(&path) {
        Ok(shell) => shell,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Using bundled page shell");
            DEFAULT_SHELL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_missing_index_uses_bundled_shell() {
        let config = SiteConfig {
            static_dir: PathBuf::from("/nonexistent/freshbasket"),
            ..SiteConfig::default()
        };

        let state = AppState::new(config);

        assert_eq!(state.shell(), DEFAULT_SHELL);
    }
}
