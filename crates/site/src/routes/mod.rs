//! HTTP route handlers for the site.
//!
//! Every GET page route is a navigation: it moves the visitor's single
//! "current page" slot and renders it. POST routes mutate the visitor's state
//! and either render a page, return an HTMX fragment, or redirect.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /about                  - About page
//! GET  /projects?category=     - Project showcase
//! GET  /gallery?category=&image= - Gallery with lightbox
//! GET  /contact                - Contact form
//! POST /contact                - Send contact message (confirmation)
//! GET  /services               - Service listing
//! GET  /services/{id}          - Service detail
//!
//! # Shop
//! GET  /shop                   - Product categories
//! GET  /shop/{category}        - Product listing
//! POST /shop/add               - Add product (returns "added" button, triggers cart-updated)
//! GET  /shop/button/{product}  - Plain add button (fragment)
//!
//! # Quotation
//! GET  /quotation              - Quotation request form
//! POST /quotation              - Add service request (confirmation)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/increment         - Quantity +1 (returns cart_items fragment)
//! POST /cart/decrement         - Quantity -1, floored at 1 (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! POST /cart/clear             - Remove all lines (returns cart_items fragment)
//! POST /cart/submit            - Submit, or redirect to login without a session
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action (confirmation)
//! POST /auth/logout            - Logout action
//!
//! # Confirmations
//! GET  /transition/{ticket}    - 204 while showing, HX-Redirect once over
//! ```

pub mod auth;
pub mod cart;
pub mod contact;
pub mod pages;
pub mod quotation;
pub mod shop;
pub mod transition;

use axum::{
    Router,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use skyray_core::ScrollRequest;

use crate::state::AppState;

/// Response header carrying client-side events.
pub const HX_TRIGGER: &str = "HX-Trigger";
/// Response header asking htmx to load another URL.
pub const HX_REDIRECT: &str = "HX-Redirect";
/// Event fired whenever the cart changes; the badge refreshes on it.
pub const CART_UPDATED: &str = "cart-updated";
/// Event fired when a navigation asked the viewport to scroll to the top.
pub const SCROLL_TOP: &str = "scroll-top";

/// Attach the `HX-Trigger` events a response needs.
pub fn respond(body: impl IntoResponse, scroll: ScrollRequest, cart_changed: bool) -> Response {
    let events: Vec<&str> = [(CART_UPDATED, cart_changed), (SCROLL_TOP, scroll.requested())]
        .into_iter()
        .filter_map(|(event, fired)| fired.then_some(event))
        .collect();

    if events.is_empty() {
        body.into_response()
    } else {
        (AppendHeaders([(HX_TRIGGER, events.join(", "))]), body).into_response()
    }
}

/// Redirect that htmx follows as a full navigation.
///
/// htmx requests get `HX-Redirect`; plain requests get a 303.
pub fn redirect(headers: &HeaderMap, to: &str) -> Response {
    if headers.contains_key("hx-request") {
        AppendHeaders([(HX_REDIRECT, to.to_string())]).into_response()
    } else {
        Redirect::to(to).into_response()
    }
}

/// Liveness health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::categories))
        .route("/add", post(shop::add))
        .route("/button/{product}", get(shop::button))
        .route("/{category}", get(shop::listing))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/submit", post(cart::submit))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(health))
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/gallery", get(pages::gallery))
        .route("/services", get(pages::services))
        .route("/services/{id}", get(pages::service_detail))
        .route("/contact", get(contact::show).post(contact::send))
        .route("/quotation", get(quotation::show).post(quotation::submit))
        .route("/transition/{ticket}", get(transition::poll))
        .nest("/shop", shop_routes())
        .nest("/cart", cart_routes())
        .nest("/auth", auth_routes())
}


#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::test_support::TestClient;
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let mut client = TestClient::new();
        let response = client.get("/health").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "ok");
    }

    #[tokio::test]
    async fn test_navigation_requests_scroll() {
        let mut client = TestClient::new();
        let response = client.get("/about").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.header(HX_TRIGGER), Some(SCROLL_TOP));
        assert!(response.body.contains("About Us"));
    }

    #[tokio::test]
    async fn test_security_headers() {
        let mut client = TestClient::new();
        let response = client.get("/").await;
        assert_eq!(response.header("x-frame-options"), Some("DENY"));
        assert!(
            response
                .header("content-security-policy")
                .is_some_and(|csp| csp.contains("https://images.unsplash.com"))
        );
    }

    #[test]
    fn test_respond_combines_events() {
        let mut scroll = ScrollRequest::new();
        skyray_core::Viewport::scroll_to_top(&mut scroll);
        let response = respond("body", scroll, true);
        assert_eq!(
            response.headers().get(HX_TRIGGER).and_then(|v| v.to_str().ok()),
            Some("cart-updated, scroll-top")
        );

        let response = respond("body", ScrollRequest::new(), false);
        assert!(response.headers().get(HX_TRIGGER).is_none());
    }

    #[test]
    fn test_redirect_flavours() {
        let mut headers = HeaderMap::new();
        let plain = redirect(&headers, "/auth/login");
        assert_eq!(plain.status(), StatusCode::SEE_OTHER);

        headers.insert("hx-request", axum::http::HeaderValue::from_static("true"));
        let htmx = redirect(&headers, "/auth/login");
        assert_eq!(htmx.status(), StatusCode::OK);
        assert_eq!(
            htmx.headers().get(HX_REDIRECT).and_then(|v| v.to_str().ok()),
            Some("/auth/login")
        );
    }
}
