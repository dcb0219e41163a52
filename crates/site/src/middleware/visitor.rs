//! Visitor extractor.
//!
//! Resolves the visitor behind a request: reads the visitor id from the
//! session (minting one on first contact) and fetches that visitor's state
//! from the registry.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;
use crate::visitors::Visit;

/// Session key holding the visitor id.
pub const VISITOR_ID_KEY: &str = "visitor_id";

/// The current visitor's state.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentVisit(visit): CurrentVisit) -> impl IntoResponse {
///     let guard = visit.lock().await;
///     format!("{} lines in cart", guard.site().cart().len())
/// }
/// ```
pub struct CurrentVisit(pub Arc<Visit>);

impl FromRequestParts<AppState> for CurrentVisit {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        let visitor_id = if let Some(id) = session.get::<Uuid>(VISITOR_ID_KEY).await? {
            id
        } else {
            let id = Uuid::new_v4();
            session.insert(VISITOR_ID_KEY, id).await?;
            debug!(visitor = %id, "New visitor");
            id
        };

        Ok(Self(state.visitors().get_or_create(visitor_id).await))
    }
}
