//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! Nothing is required; every variable has a default.
//!
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_BASE_URL` - Public URL (default: `http://localhost:3000`). An
//!   `https://` URL marks the session cookie `Secure`.
//! - `SITE_STATIC_DIR` - Directory served under `/static` (default: the
//!   crate's own `static/` directory)
//! - `SITE_VISITOR_IDLE_SECS` - Idle expiry of a visitor, both the session
//!   cookie and the in-memory state (default: 1800, at most one year)
//! - `QUOTATION_SUBMIT_DELAY_MS` - Submitted screen before the cart clears (default: 3000)
//! - `QUOTATION_ADDED_DELAY_MS` - Added screen before the form resets (default: 2000)
//! - `REGISTER_REDIRECT_DELAY_MS` - Registered screen before login shows (default: 2000)
//! - `CONTACT_RESET_DELAY_MS` - Sent screen before the form resets (default: 3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use skyray_core::Confirmation;
use thiserror::Error;

/// Longest accepted visitor idle time (one year).
pub const MAX_VISITOR_IDLE_SECS: u64 = 365 * 24 * 60 * 60;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Directory of stylesheets and scripts
    pub static_dir: PathBuf,
    /// How long an untouched visitor is kept
    pub visitor_idle: Duration,
    /// How long each confirmation screen stays up
    pub delays: ConfirmationDelays,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Display time of each confirmation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationDelays {
    pub quotation_submitted: Duration,
    pub quotation_added: Duration,
    pub registered: Duration,
    pub contact_sent: Duration,
}

impl Default for ConfirmationDelays {
    fn default() -> Self {
        Self {
            quotation_submitted: Duration::from_millis(3000),
            quotation_added: Duration::from_millis(2000),
            registered: Duration::from_millis(2000),
            contact_sent: Duration::from_millis(3000),
        }
    }
}

impl ConfirmationDelays {
    /// How long `confirmation` is shown before it resolves.
    #[must_use]
    pub const fn for_confirmation(&self, confirmation: Confirmation) -> Duration {
        match confirmation {
            Confirmation::QuotationSubmitted => self.quotation_submitted,
            Confirmation::QuotationAdded => self.quotation_added,
            Confirmation::Registered => self.registered,
            Confirmation::ContactSent => self.contact_sent,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            visitor_idle: Duration::from_secs(1800),
            delays: ConfirmationDelays::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(&|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    fn from_source(source: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let millis = |key: &str, default: Duration| -> Result<Duration, ConfigError> {
            let default = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
            parse_env(source, key, default).map(Duration::from_millis)
        };

        let delays = ConfirmationDelays {
            quotation_submitted: millis(
                "QUOTATION_SUBMIT_DELAY_MS",
                defaults.delays.quotation_submitted,
            )?,
            quotation_added: millis("QUOTATION_ADDED_DELAY_MS", defaults.delays.quotation_added)?,
            registered: millis("REGISTER_REDIRECT_DELAY_MS", defaults.delays.registered)?,
            contact_sent: millis("CONTACT_RESET_DELAY_MS", defaults.delays.contact_sent)?,
        };

        let sentry_sample_rate =
            parse_env(source, "SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?;
        let sentry_traces_sample_rate = parse_env(
            source,
            "SENTRY_TRACES_SAMPLE_RATE",
            defaults.sentry_traces_sample_rate,
        )?;
        validate_rate("SENTRY_SAMPLE_RATE", sentry_sample_rate)?;
        validate_rate("SENTRY_TRACES_SAMPLE_RATE", sentry_traces_sample_rate)?;

        let visitor_idle_secs = parse_env(
            source,
            "SITE_VISITOR_IDLE_SECS",
            defaults.visitor_idle.as_secs(),
        )?;
        validate_idle("SITE_VISITOR_IDLE_SECS", visitor_idle_secs)?;

        Ok(Self {
            host: parse_env(source, "SITE_HOST", defaults.host)?,
            port: parse_env(source, "SITE_PORT", defaults.port)?,
            base_url: get_env_or_default(source, "SITE_BASE_URL", &defaults.base_url),
            static_dir: get_optional_env(source, "SITE_STATIC_DIR")
                .map_or(defaults.static_dir, PathBuf::from),
            visitor_idle: Duration::from_secs(visitor_idle_secs),
            delays,
            sentry_dsn: get_optional_env(source, "SENTRY_DSN"),
            sentry_environment: get_optional_env(source, "SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable. Blank values count as unset.
fn get_optional_env(source: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    source(key).filter(|value| !value.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(
    source: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> String {
    get_optional_env(source, key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(
    source: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(source, key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Sample rates must be within `0.0..=1.0`.
fn validate_rate(key: &str, rate: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

/// Visitor idle time must be between one second and [`MAX_VISITOR_IDLE_SECS`].
fn validate_idle(key: &str, secs: u64) -> Result<(), ConfigError> {
    if (1..=MAX_VISITOR_IDLE_SECS).contains(&secs) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 1 and {MAX_VISITOR_IDLE_SECS} seconds (got {secs})"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SiteConfig::from_source(&|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.visitor_idle, Duration::from_secs(1800));
        assert_eq!(config.delays, ConfirmationDelays::default());
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", "8080"),
            ("SITE_BASE_URL", "https://skyray.example"),
            ("QUOTATION_SUBMIT_DELAY_MS", "10"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
            ("SENTRY_TRACES_SAMPLE_RATE", "0.25"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(config.is_secure());
        assert_eq!(config.delays.quotation_submitted, Duration::from_millis(10));
        assert_eq!(config.delays.registered, Duration::from_millis(2000));
        assert!(config.sentry_dsn.is_some());
        assert!((config.sentry_traces_sample_rate - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = load(&[("SITE_PORT", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("SITE_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SITE_PORT"));
    }

    #[test]
    fn test_sample_rate_out_of_range() {
        let err = load(&[("SENTRY_SAMPLE_RATE", "1.5")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_visitor_idle_bounds() {
        let err = load(&[("SITE_VISITOR_IDLE_SECS", "18446744073709551615")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SITE_VISITOR_IDLE_SECS")
        );
        assert!(load(&[("SITE_VISITOR_IDLE_SECS", "0")]).is_err());

        let max = MAX_VISITOR_IDLE_SECS.to_string();
        let config = load(&[("SITE_VISITOR_IDLE_SECS", &max)]).unwrap();
        assert_eq!(config.visitor_idle, Duration::from_secs(MAX_VISITOR_IDLE_SECS));
    }

    #[test]
    fn test_delay_per_confirmation() {
        let delays = ConfirmationDelays::default();
        assert_eq!(
            delays.for_confirmation(Confirmation::QuotationSubmitted),
            Duration::from_secs(3)
        );
        assert_eq!(
            delays.for_confirmation(Confirmation::Registered),
            Duration::from_secs(2)
        );
    }
}
