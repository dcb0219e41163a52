//! Integration tests for the SkyRay website.
//!
//! Each test starts the full application on an ephemeral local port and
//! talks to it over HTTP with a cookie-keeping client, the way a browser
//! with htmx would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p skyray-integration-tests
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use skyray_site::config::{ConfirmationDelays, SiteConfig};
use skyray_site::state::AppState;
use tokio::task::JoinHandle;

/// Confirmation delays used by the tests: short enough to wait out.
pub const TEST_DELAYS: ConfirmationDelays = ConfirmationDelays {
    quotation_submitted: Duration::from_millis(300),
    quotation_added: Duration::from_millis(200),
    registered: Duration::from_millis(200),
    contact_sent: Duration::from_millis(300),
};

/// A running site plus a client holding one visitor's cookie.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
    server: JoinHandle<()>,
}

impl TestContext {
    /// Start a fresh site with [`TEST_DELAYS`].
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the client cannot be built.
    #[allow(clippy::expect_used)]
    pub async fn new() -> Self {
        let config = SiteConfig {
            port: 0,
            delays: TEST_DELAYS,
            ..SiteConfig::default()
        };
        let listener = tokio::net::TcpListener::bind(config.socket_addr())
            .await
            .expect("bind test listener");
        let addr: SocketAddr = listener.local_addr().expect("listener address");

        let app = skyray_site::app(AppState::new(config));
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("build client");

        Self {
            client,
            base_url: format!("http://{addr}"),
            server,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A second visitor against the same server, with its own cookie jar.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn other_visitor(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("build client")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}
