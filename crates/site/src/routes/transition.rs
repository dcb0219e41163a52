//! Confirmation polling.
//!
//! A page showing a timed confirmation polls `/transition/{ticket}` every
//! second. While the ticket is still pending the answer is an empty 204;
//! afterwards htmx is redirected to whatever page the visitor is now on.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use skyray_core::Ticket;
use tracing::instrument;

use crate::middleware::CurrentVisit;
use crate::routes::HX_REDIRECT;
use crate::views::page_path;

/// Report whether the confirmation for `ticket` is over.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn poll(CurrentVisit(visit): CurrentVisit, Path(ticket): Path<Ticket>) -> Response {
    let guard = visit.lock().await;
    let site = guard.site();
    if site.pending_ticket() == Some(ticket) {
        return StatusCode::NO_CONTENT.into_response();
    }

    let to = page_path(site.navigator());
    tracing::debug!(%ticket, %to, "Confirmation over");
    AppendHeaders([(HX_REDIRECT, to)]).into_response()
}
