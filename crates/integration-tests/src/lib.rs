//! End-to-end test harness for FreshBasket.
//!
//! Each test starts its own site on an ephemeral port, so tests run in
//! parallel without sharing subscribers.
//!
//! ```rust,ignore
//! let server = TestServer::spawn().await;
//! let client = SiteClient::new(&server.base_url()).unwrap();
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use freshbasket_site::{AppState, SiteConfig};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A site running in the background for the duration of a test.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    /// Start a site with fresh state on `127.0.0.1:0`.
    ///
    /// # Panics
    ///
    /// Panics if the listener can't be bound.
    pub async fn spawn() -> Self {
        Self::spawn_with(AppState::new(test_config())).await
    }

    /// Start a site with the given state.
    ///
    /// # Panics
    ///
    /// Panics if the listener can't be bound.
    pub async fn spawn_with(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read test listener address");
        let handle = tokio::spawn(freshbasket_site::serve(listener, state));

        Self { addr, handle }
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://127.0.0.1:<port>`
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Full URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Config pointing at the site crate's static directory.
#[must_use]
pub fn test_config() -> SiteConfig {
    SiteConfig {
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("site")
            .join("static"),
        ..SiteConfig::default()
    }
}

/// A base URL nothing is listening on.
///
/// # Panics
///
/// Panics if a port can't be reserved.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to reserve a port");
    let addr = listener
        .local_addr()
        .expect("Failed to read reserved address");
    drop(listener);
    format!("http://{addr}")
}
