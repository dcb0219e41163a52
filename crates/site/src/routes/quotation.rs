//! Quotation request form.
//!
//! A valid submission adds a service-request line to the cart and shows the
//! "added" confirmation; the form comes back empty once it elapses.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use skyray_core::catalog::{FormOption, PROJECT_TYPES, SERVICE_OPTIONS};
use skyray_core::{Confirmation, Destination, Quantity, QuotationRequest, ScrollRequest, Ticket};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::CurrentVisit;
use crate::routes::respond;
use crate::views::Chrome;

/// Optional preselected service, used by "request a quote" links.
#[derive(Debug, Deserialize)]
pub struct QuotationQuery {
    pub service: Option<String>,
}

/// Quotation form data.
///
/// `quantity` stays a string so an empty number input is not a rejection.
#[derive(Debug, Default, Deserialize)]
pub struct QuotationForm {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub quantity: String,
}

impl QuotationForm {
    fn quantity(&self) -> Quantity {
        self.quantity
            .trim()
            .parse::<u32>()
            .map_or(Quantity::ONE, Quantity::clamped)
    }

    fn to_request(&self) -> QuotationRequest {
        QuotationRequest {
            service: self.service.clone(),
            project_type: self.project_type.clone(),
            requirements: self.requirements.clone(),
            quantity: self.quantity(),
        }
    }
}

/// Quotation page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/quotation.html")]
pub struct QuotationTemplate {
    pub chrome: Chrome,
    pub services: &'static [FormOption],
    pub project_types: &'static [FormOption],
    pub form: QuotationForm,
    pub errors: Vec<&'static str>,
    /// Set while the "added to cart" confirmation is showing.
    pub ticket: Option<Ticket>,
}

impl QuotationTemplate {
    fn new(chrome: Chrome, form: QuotationForm) -> Self {
        Self {
            chrome,
            services: SERVICE_OPTIONS,
            project_types: PROJECT_TYPES,
            form,
            errors: Vec::new(),
            ticket: None,
        }
    }
}

/// Display the quotation form.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn show(
    CurrentVisit(visit): CurrentVisit,
    Query(query): Query<QuotationQuery>,
) -> Response {
    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::Quotation);
    let form = QuotationForm {
        service: query.service.unwrap_or_default(),
        ..QuotationForm::default()
    };
    let mut page = QuotationTemplate::new(Chrome::new(guard.site()), form);
    page.ticket = guard.site().pending_for(Confirmation::QuotationAdded);
    respond(page, scroll, false)
}

/// Add the requested service to the cart.
///
/// Blank required fields re-render the form with errors and leave the cart
/// untouched.
#[instrument(skip(visit, form), fields(visitor = %visit.id()))]
pub async fn submit(CurrentVisit(visit): CurrentVisit, Form(form): Form<QuotationForm>) -> Response {
    let request = form.to_request();
    let missing = request.missing_fields();

    let mut guard = visit.lock().await;
    if !missing.is_empty() {
        tracing::debug!(?missing, "Quotation form incomplete");
        let scroll = guard.navigate(Destination::Quotation);
        let mut page = QuotationTemplate::new(Chrome::new(guard.site()), form);
        page.errors = missing;
        return (StatusCode::UNPROCESSABLE_ENTITY, respond(page, scroll, false)).into_response();
    }

    let mut scroll = ScrollRequest::new();
    let (line, ticket) = guard.site_mut().request_quotation(&request, &mut scroll);
    add_breadcrumb(
        "cart",
        "Requested quotation",
        Some(&[("line", &line.to_string())]),
    );

    let mut page = QuotationTemplate::new(Chrome::new(guard.site()), QuotationForm::default());
    page.ticket = Some(ticket);
    respond(page, scroll, true)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::TestClient;
    use crate::routes::{CART_UPDATED, HX_TRIGGER};

    #[tokio::test]
    async fn test_preselected_service() {
        let mut client = TestClient::new();
        let response = client.get("/quotation?service=automation").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(
            response
                .body
                .contains("<option value=\"automation\" selected>")
        );
    }

    #[tokio::test]
    async fn test_submit_adds_line_and_confirms() {
        let mut client = TestClient::new();
        let response = client
            .post(
                "/quotation",
                "service=automation&project_type=new-installation&requirements=Line+4+PLC&quantity=2",
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(
            response
                .header(HX_TRIGGER)
                .is_some_and(|events| events.contains(CART_UPDATED))
        );
        assert!(response.body.contains("/transition/1"));

        let cart = client.get("/cart").await;
        assert!(cart.body.contains("Automation Solutions"));
        assert!(cart.body.contains("New Installation"));
        assert!(cart.body.contains("Line 4 PLC"));
    }

    #[tokio::test]
    async fn test_incomplete_submit_is_rejected() {
        let mut client = TestClient::new();
        let response = client
            .post("/quotation", "service=automation&requirements=&quantity=")
            .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.body.contains("project type"));
        assert!(response.body.contains("requirements"));
        assert!(!response.body.contains("/transition/"));

        let count = client.get_htmx("/cart/count").await;
        assert!(count.body.contains(">0<"));
    }
}
