//! Product shop route handlers.
//!
//! Adding a product never navigates: the button swaps itself for an "added"
//! state, fires `cart-updated` and reverts on its own after a moment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Path,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use skyray_core::Destination;
use skyray_core::catalog::{
    PRODUCT_CATEGORIES, Product, ProductCategory, find_category, find_product,
    products_in_category,
};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::CurrentVisit;
use crate::routes::{CART_UPDATED, HX_TRIGGER, respond};
use crate::views::Chrome;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddProductForm {
    pub product_id: String,
}

/// Product categories template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/categories.html")]
pub struct CategoriesTemplate {
    pub chrome: Chrome,
    pub categories: &'static [ProductCategory],
}

/// Product listing template. `category` is `None` for unknown ids.
#[derive(Template, WebTemplate)]
#[template(path = "shop/listing.html")]
pub struct ListingTemplate {
    pub chrome: Chrome,
    pub category: Option<&'static ProductCategory>,
    pub products: Vec<&'static Product>,
}

/// Add button fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/add_button.html")]
pub struct AddButtonTemplate {
    pub product_id: &'static str,
    pub added: bool,
}

/// Display the product categories.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn categories(CurrentVisit(visit): CurrentVisit) -> Response {
    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::CartCategories);
    let page = CategoriesTemplate {
        chrome: Chrome::new(guard.site()),
        categories: PRODUCT_CATEGORIES,
    };
    respond(page, scroll, false)
}

/// Display the products of one category.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn listing(
    CurrentVisit(visit): CurrentVisit,
    Path(category_id): Path<String>,
) -> Response {
    let category = find_category(&category_id);
    let products = products_in_category(&category_id);

    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::ProductListing(category_id));
    let page = ListingTemplate {
        chrome: Chrome::new(guard.site()),
        category,
        products,
    };
    respond(page, scroll, false)
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the button in its "added" state with an HTMX trigger so the
/// cart badge refreshes.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn add(
    CurrentVisit(visit): CurrentVisit,
    Form(form): Form<AddProductForm>,
) -> Result<Response> {
    let product = find_product(&form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let mut guard = visit.lock().await;
    guard
        .site_mut()
        .add_product(product.id)
        .ok_or_else(|| AppError::NotFound(format!("category {}", product.category)))?;
    add_breadcrumb("cart", "Added product", Some(&[("product", product.id)]));

    Ok((
        AppendHeaders([(HX_TRIGGER, CART_UPDATED)]),
        AddButtonTemplate {
            product_id: product.id,
            added: true,
        },
    )
        .into_response())
}

/// The plain add button for a product (HTMX), swapped back in after the
/// "added" state.
#[instrument]
pub async fn button(Path(product_id): Path<String>) -> Result<AddButtonTemplate> {
    let product = find_product(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;
    Ok(AddButtonTemplate {
        product_id: product.id,
        added: false,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::TestClient;
    use crate::routes::{CART_UPDATED, HX_TRIGGER};

    #[tokio::test]
    async fn test_listing_shows_category_products() {
        let mut client = TestClient::new();
        let response = client.get("/shop/pneumatic-hydraulic").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Pneumatic Air Cylinder"));
        assert!(!response.body.contains("Industrial PLC Controller"));
    }

    #[tokio::test]
    async fn test_unknown_category_renders_fallback() {
        let mut client = TestClient::new();
        let response = client.get("/shop/garden-furniture").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Category not found"));
        assert!(response.body.contains("href=\"/shop\""));
    }

    #[tokio::test]
    async fn test_add_product_updates_cart() {
        let mut client = TestClient::new();
        client.get("/shop/pneumatic-hydraulic").await;

        let response = client
            .post_htmx("/shop/add", "product_id=air-cylinder")
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.header(HX_TRIGGER), Some(CART_UPDATED));
        assert!(response.body.contains("Added"));
        assert!(response.body.contains("/shop/button/air-cylinder"));

        let count = client.get_htmx("/cart/count").await;
        assert!(count.body.contains(">1<"));
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let mut client = TestClient::new();
        let response = client
            .post_htmx("/shop/add", "product_id=flux-capacitor")
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_button_fragment() {
        let mut client = TestClient::new();
        let response = client.get_htmx("/shop/button/contactor").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Add to Cart"));
        assert!(response.header(HX_TRIGGER).is_none());
    }
}
