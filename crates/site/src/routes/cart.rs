//! Cart route handlers.
//!
//! Line edits use HTMX: each returns the cart items fragment and fires
//! `cart-updated` so the badge follows. Submitting needs a logged-in visitor.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use skyray_core::{CartLineId, Confirmation, Destination, ScrollRequest, SubmitOutcome, Ticket};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::CurrentVisit;
use crate::routes::{CART_UPDATED, HX_TRIGGER, redirect, respond};
use crate::views::{CartView, Chrome};
use crate::visitors::VisitGuard;

/// Line edit form data.
#[derive(Debug, Deserialize)]
pub struct LineForm {
    pub line_id: CartLineId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub chrome: Chrome,
    pub cart: CartView,
    pub logged_in: bool,
    /// Set while the "quotation submitted" confirmation is showing.
    pub ticket: Option<Ticket>,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
    pub logged_in: bool,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

// =============================================================================
// Helper Functions
// =============================================================================

/// The cart items fragment after an edit, with the badge refresh trigger.
fn items_fragment(guard: &VisitGuard<'_>) -> Response {
    let site = guard.site();
    (
        AppendHeaders([(HX_TRIGGER, CART_UPDATED)]),
        CartItemsTemplate {
            cart: CartView::new(site),
            logged_in: site.session().is_some(),
        },
    )
        .into_response()
}

// =============================================================================
// Routes
// =============================================================================

/// Display the cart page.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn show(CurrentVisit(visit): CurrentVisit) -> Response {
    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::Cart);
    let site = guard.site();
    let page = CartShowTemplate {
        chrome: Chrome::new(site),
        cart: CartView::new(site),
        logged_in: site.session().is_some(),
        ticket: site.pending_for(Confirmation::QuotationSubmitted),
    };
    respond(page, scroll, false)
}

/// Increase a line's quantity by one (HTMX).
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn increment(CurrentVisit(visit): CurrentVisit, Form(form): Form<LineForm>) -> Response {
    let mut guard = visit.lock().await;
    if guard.site_mut().cart_mut().increment(form.line_id).is_none() {
        tracing::debug!(line = %form.line_id, "Increment of unknown line ignored");
    }
    items_fragment(&guard)
}

/// Decrease a line's quantity by one, never below one (HTMX).
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn decrement(CurrentVisit(visit): CurrentVisit, Form(form): Form<LineForm>) -> Response {
    let mut guard = visit.lock().await;
    if guard.site_mut().cart_mut().decrement(form.line_id).is_none() {
        tracing::debug!(line = %form.line_id, "Decrement of unknown line ignored");
    }
    items_fragment(&guard)
}

/// Remove a line (HTMX).
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn remove(CurrentVisit(visit): CurrentVisit, Form(form): Form<LineForm>) -> Response {
    let mut guard = visit.lock().await;
    if guard.site_mut().cart_mut().remove_item(form.line_id) {
        add_breadcrumb("cart", "Removed line", None);
    }
    items_fragment(&guard)
}

/// Remove every line (HTMX).
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn clear(CurrentVisit(visit): CurrentVisit) -> Response {
    let mut guard = visit.lock().await;
    guard.site_mut().cart_mut().clear();
    add_breadcrumb("cart", "Cleared cart", None);
    items_fragment(&guard)
}

/// Submit the cart for a quotation.
///
/// Without a session the visitor is sent to the login page and the cart is
/// kept. Otherwise the confirmation shows and the cart is cleared when it
/// elapses.
#[instrument(skip(visit, headers), fields(visitor = %visit.id()))]
pub async fn submit(CurrentVisit(visit): CurrentVisit, headers: HeaderMap) -> Response {
    let mut guard = visit.lock().await;
    let mut scroll = ScrollRequest::new();

    match guard.site_mut().submit_quotation(&mut scroll) {
        SubmitOutcome::RedirectToLogin => redirect(&headers, "/auth/login"),
        SubmitOutcome::Submitted(ticket) => {
            add_breadcrumb("cart", "Submitted quotation", None);
            let site = guard.site();
            let page = CartShowTemplate {
                chrome: Chrome::new(site),
                cart: CartView::new(site),
                logged_in: true,
                ticket: Some(ticket),
            };
            respond(page, scroll, false)
        }
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn count(CurrentVisit(visit): CurrentVisit) -> CartCountTemplate {
    let guard = visit.lock().await;
    CartCountTemplate {
        count: guard.site().cart().len(),
    }
}
