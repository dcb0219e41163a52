//! Contact form route handlers.
//!
//! Messages are accepted and acknowledged but not delivered anywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use skyray_core::{Confirmation, ContactMessage, Destination, Email, ScrollRequest, Ticket};
use tracing::instrument;

use crate::filters;
use crate::middleware::CurrentVisit;
use crate::routes::respond;
use crate::views::Chrome;

/// Contact form data.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    fn to_message(&self) -> ContactMessage {
        let phone = self.phone.trim();
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub chrome: Chrome,
    pub form: ContactForm,
    pub errors: Vec<String>,
    /// Set while the "message sent" confirmation is showing.
    pub ticket: Option<Ticket>,
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Everything wrong with a submission, in form order.
fn validate(message: &ContactMessage) -> Vec<String> {
    let missing = message.missing_fields();
    let mut errors: Vec<String> = missing
        .iter()
        .map(|field| format!("Please enter your {field}."))
        .collect();

    if !missing.contains(&"email")
        && let Err(e) = Email::parse(&message.email)
    {
        errors.push(format!("Please enter a valid email address ({e})."));
    }
    errors
}

// =============================================================================
// Routes
// =============================================================================

/// Display the contact form.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn show(CurrentVisit(visit): CurrentVisit) -> Response {
    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::Contact);
    let page = ContactTemplate {
        chrome: Chrome::new(guard.site()),
        form: ContactForm::default(),
        errors: Vec::new(),
        ticket: guard.site().pending_for(Confirmation::ContactSent),
    };
    respond(page, scroll, false)
}

/// Accept a contact message.
#[instrument(skip(visit, form), fields(visitor = %visit.id()))]
pub async fn send(CurrentVisit(visit): CurrentVisit, Form(form): Form<ContactForm>) -> Response {
    let message = form.to_message();
    let errors = validate(&message);

    let mut guard = visit.lock().await;
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "Contact form rejected");
        let scroll = guard.navigate(Destination::Contact);
        let page = ContactTemplate {
            chrome: Chrome::new(guard.site()),
            form,
            errors,
            ticket: None,
        };
        return (StatusCode::UNPROCESSABLE_ENTITY, respond(page, scroll, false)).into_response();
    }

    let mut scroll = ScrollRequest::new();
    let ticket = guard.site_mut().send_contact_message(&message, &mut scroll);
    tracing::info!(subject = %message.subject, "Contact message received");

    let page = ContactTemplate {
        chrome: Chrome::new(guard.site()),
        form: ContactForm::default(),
        errors: Vec::new(),
        ticket: Some(ticket),
    };
    respond(page, scroll, false)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;

    use super::*;
    use crate::routes::HX_REDIRECT;
    use crate::routes::test_support::TestClient;

    fn message(email: &str) -> ContactMessage {
        ContactMessage {
            name: "Jane Doe".to_string(),
            email: email.to_string(),
            phone: None,
            subject: "Panel upgrade".to_string(),
            message: "Please call me.".to_string(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate(&message("jane.doe@example.com")).is_empty());

        let errors = validate(&message("jane.doe"));
        assert_eq!(errors.len(), 1);
        assert!(errors.first().unwrap().contains("valid email"));

        let errors = validate(&message(""));
        assert_eq!(errors, ["Please enter your email."]);
    }

    #[test]
    fn test_blank_phone_is_none() {
        let form = ContactForm {
            phone: "   ".to_string(),
            ..ContactForm::default()
        };
        assert!(form.to_message().phone.is_none());
    }

    #[tokio::test]
    async fn test_invalid_submission_keeps_input() {
        let mut client = TestClient::new();
        let response = client
            .post("/contact", "name=Jane&email=nope&subject=Hi&message=Hello")
            .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.body.contains("valid email"));
        assert!(response.body.contains("value=\"Jane\""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmation_resets_form() {
        let mut client = TestClient::new();
        let response = client
            .post(
                "/contact",
                "name=Jane&email=jane%40example.com&subject=Hi&message=Hello",
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Message Sent"));

        tokio::time::sleep(Duration::from_millis(3100)).await;
        let poll = client.get_htmx("/transition/1").await;
        assert_eq!(poll.header(HX_REDIRECT), Some("/contact"));

        let page = client.get("/contact").await;
        assert!(!page.body.contains("Message Sent"));
    }
}
