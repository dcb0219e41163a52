//! End-to-end visitor flows over real HTTP.
//!
//! The server runs with [`TEST_DELAYS`] so the timed confirmations can be
//! waited out in real time.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use reqwest::{Client, StatusCode};
use skyray_integration_tests::{TEST_DELAYS, TestContext};

const HX_REDIRECT: &str = "hx-redirect";
const HX_TRIGGER: &str = "hx-trigger";

// =============================================================================
// Helpers
// =============================================================================

async fn post_htmx(client: &Client, url: String, form: &str) -> reqwest::Response {
    client
        .post(url)
        .header("hx-request", "true")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(form.to_string())
        .send()
        .await
        .unwrap()
}

async fn post_form(client: &Client, url: String, form: &str) -> reqwest::Response {
    client
        .post(url)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(form.to_string())
        .send()
        .await
        .unwrap()
}

async fn badge(client: &Client, ctx: &TestContext) -> String {
    client
        .get(ctx.url("/cart/count"))
        .header("hx-request", "true")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap()
}

async fn poll(client: &Client, ctx: &TestContext, ticket: u64) -> reqwest::Response {
    client
        .get(ctx.url(&format!("/transition/{ticket}")))
        .header("hx-request", "true")
        .send()
        .await
        .unwrap()
}

fn redirect_target(response: &reqwest::Response) -> Option<&str> {
    response
        .headers()
        .get(HX_REDIRECT)
        .and_then(|v| v.to_str().ok())
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;
    let response = ctx.client.get(ctx.url("/health")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_security_headers_present() {
    let ctx = TestContext::new().await;
    let response = ctx.client.get(ctx.url("/")).send().await.unwrap();
    assert!(response.headers().contains_key("content-security-policy"));
    assert!(response.headers().contains_key("x-content-type-options"));
}

// =============================================================================
// Cart Scenario
// =============================================================================

#[tokio::test]
async fn test_quotation_and_product_lines_then_remove_and_clear() {
    let ctx = TestContext::new().await;
    let client = &ctx.client;

    let response = post_form(
        client,
        ctx.url("/quotation"),
        "service=automation&project_type=upgrade&requirements=Retrofit+conveyor&quantity=1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_htmx(client, ctx.url("/shop/add"), "product_id=contactor").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(HX_TRIGGER)
            .is_some_and(|v| v.to_str().unwrap().contains("cart-updated"))
    );
    assert!(badge(client, &ctx).await.contains(">2<"));

    let cart = client.get(ctx.url("/cart")).send().await.unwrap();
    let body = cart.text().await.unwrap();
    assert!(body.contains("Retrofit conveyor"));
    assert!(body.contains("Industrial Contactor"));

    // Lines are numbered in insertion order, so the product is line 2.
    let response = post_htmx(client, ctx.url("/cart/remove"), "line_id=2").await;
    let body = response.text().await.unwrap();
    assert!(!body.contains("Industrial Contactor"));
    assert!(badge(client, &ctx).await.contains(">1<"));

    let response = post_htmx(client, ctx.url("/cart/clear"), "").await;
    assert!(response.text().await.unwrap().contains("Your cart is empty"));
    assert!(badge(client, &ctx).await.contains(">0<"));
}

#[tokio::test]
async fn test_submit_requires_login_then_clears_cart() {
    let ctx = TestContext::new().await;
    let client = &ctx.client;

    post_htmx(client, ctx.url("/shop/add"), "product_id=air-cylinder").await;
    client.get(ctx.url("/cart")).send().await.unwrap();

    let response = post_htmx(client, ctx.url("/cart/submit"), "").await;
    assert_eq!(redirect_target(&response), Some("/auth/login"));
    assert!(badge(client, &ctx).await.contains(">1<"));

    // Plain form post: the 303 to home is followed.
    let response = post_form(
        client,
        ctx.url("/auth/login"),
        "email=jane.doe%40example.com&password=secret",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("jane.doe"));

    client.get(ctx.url("/cart")).send().await.unwrap();
    let response = post_htmx(client, ctx.url("/cart/submit"), "").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Quotation Submitted"));
    assert!(body.contains("/transition/1"));

    assert_eq!(poll(client, &ctx, 1).await.status(), StatusCode::NO_CONTENT);

    tokio::time::sleep(TEST_DELAYS.quotation_submitted + Duration::from_millis(200)).await;

    let response = poll(client, &ctx, 1).await;
    assert_eq!(redirect_target(&response), Some("/"));
    assert!(badge(client, &ctx).await.contains(">0<"));
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_registration_redirects_to_login() {
    let ctx = TestContext::new().await;
    let client = &ctx.client;

    let response = post_form(
        client,
        ctx.url("/auth/register"),
        "full_name=Jane+Doe&email=jane%40example.com&phone=0771234567\
         &password=pw&confirm_password=pw",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Registration Successful"));

    tokio::time::sleep(TEST_DELAYS.registered + Duration::from_millis(200)).await;

    let response = poll(client, &ctx, 1).await;
    assert_eq!(redirect_target(&response), Some("/auth/login"));
}

// =============================================================================
// Visitor Isolation
// =============================================================================

#[tokio::test]
async fn test_visitors_have_separate_carts_and_sessions() {
    let ctx = TestContext::new().await;
    let other = ctx.other_visitor();

    post_form(
        &ctx.client,
        ctx.url("/auth/login"),
        "email=jane.doe%40example.com&password=secret",
    )
    .await;
    post_htmx(&ctx.client, ctx.url("/shop/add"), "product_id=contactor").await;

    assert!(badge(&ctx.client, &ctx).await.contains(">1<"));
    assert!(badge(&other, &ctx).await.contains(">0<"));

    let home = other.get(ctx.url("/")).send().await.unwrap();
    assert!(!home.text().await.unwrap().contains("jane.doe"));
}
