//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions) - added by the binary
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with the in-memory store)
//! 4. Security headers (CSP, framing, sniffing)
//!
//! The [`CurrentVisit`] extractor then resolves the visitor from the session.

pub mod security_headers;
pub mod session;
pub mod visitor;

pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use visitor::CurrentVisit;
