//! Application state shared across handlers.

use std::sync::Arc;

use skyray_core::{AcceptAllProvider, AuthProvider};

use crate::config::SiteConfig;
use crate::visitors::VisitorRegistry;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration, the visitor registry and the authentication provider.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    visitors: VisitorRegistry,
    auth: Box<dyn AuthProvider>,
}

impl AppState {
    /// Create application state with the accept-all login stub.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self::with_auth_provider(config, AcceptAllProvider)
    }

    /// Create application state with a specific authentication provider.
    #[must_use]
    pub fn with_auth_provider(config: SiteConfig, auth: impl AuthProvider + 'static) -> Self {
        let visitors = VisitorRegistry::new(config.visitor_idle, config.delays);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                visitors,
                auth: Box::new(auth),
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the visitor registry.
    #[must_use]
    pub fn visitors(&self) -> &VisitorRegistry {
        &self.inner.visitors
    }

    /// Get the authentication provider used by the login form.
    #[must_use]
    pub fn auth(&self) -> &dyn AuthProvider {
        self.inner.auth.as_ref()
    }
}
