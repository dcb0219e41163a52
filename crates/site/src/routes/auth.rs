//! Authentication route handlers.
//!
//! Login goes through the configured [`AuthProvider`](skyray_core::AuthProvider);
//! registration only shows a confirmation before the login page. No account
//! is ever stored.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use skyray_core::{Confirmation, Credentials, Destination, RegistrationProfile, ScrollRequest, Ticket};
use tracing::instrument;

use crate::error::{add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::CurrentVisit;
use crate::routes::{redirect, respond};
use crate::state::AppState;
use crate::views::Chrome;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Registration form data.
#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl RegisterForm {
    fn into_profile(self) -> RegistrationProfile {
        RegistrationProfile {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: SecretString::from(self.password),
            confirm_password: SecretString::from(self.confirm_password),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub chrome: Chrome,
    pub email: String,
    pub error: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub chrome: Chrome,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub errors: Vec<&'static str>,
    /// Set while the "registration successful" confirmation is showing.
    pub ticket: Option<Ticket>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn login_page(CurrentVisit(visit): CurrentVisit) -> Response {
    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::Login);
    let page = LoginTemplate {
        chrome: Chrome::new(guard.site()),
        email: String::new(),
        error: None,
    };
    respond(page, scroll, false)
}

/// Handle login form submission.
///
/// Success starts a session and goes home. A rejected or blank form
/// re-renders the login page with the email kept.
#[instrument(skip(state, visit, headers, form), fields(visitor = %visit.id()))]
pub async fn login(
    State(state): State<AppState>,
    CurrentVisit(visit): CurrentVisit,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let email = form.email.trim().to_string();
    let mut guard = visit.lock().await;
    let visitor_id = guard.visitor_id();

    let (status, error) = if email.is_empty() || form.password.is_empty() {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            "Please enter your email and password.".to_string(),
        )
    } else {
        let credentials = Credentials::new(email.clone(), form.password);
        let mut scroll = ScrollRequest::new();
        match guard
            .site_mut()
            .login(state.auth(), &credentials, &mut scroll)
        {
            Ok(session) => {
                set_sentry_user(&visitor_id, &session.name);
                add_breadcrumb("auth", "Logged in", None);
                return redirect(&headers, "/");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login rejected");
                (StatusCode::UNAUTHORIZED, format!("Login failed: {e}."))
            }
        }
    };

    let scroll = guard.navigate(Destination::Login);
    let page = LoginTemplate {
        chrome: Chrome::new(guard.site()),
        email,
        error: Some(error),
    };
    (status, respond(page, scroll, false)).into_response()
}

/// Handle logout.
#[instrument(skip(visit, headers), fields(visitor = %visit.id()))]
pub async fn logout(CurrentVisit(visit): CurrentVisit, headers: HeaderMap) -> Response {
    let mut guard = visit.lock().await;
    guard.site_mut().logout(&mut ScrollRequest::new());
    clear_sentry_user();
    add_breadcrumb("auth", "Logged out", None);
    redirect(&headers, "/")
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn register_page(CurrentVisit(visit): CurrentVisit) -> Response {
    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::Register);
    let page = RegisterTemplate {
        chrome: Chrome::new(guard.site()),
        full_name: String::new(),
        email: String::new(),
        phone: String::new(),
        errors: Vec::new(),
        ticket: guard.site().pending_for(Confirmation::Registered),
    };
    respond(page, scroll, false)
}

/// Handle registration form submission.
///
/// Shows the confirmation, after which the login page appears.
#[instrument(skip(visit, form), fields(visitor = %visit.id()))]
pub async fn register(CurrentVisit(visit): CurrentVisit, Form(form): Form<RegisterForm>) -> Response {
    let profile = form.into_profile();
    let missing = profile.missing_fields();

    let mut guard = visit.lock().await;
    if !missing.is_empty() {
        let scroll = guard.navigate(Destination::Register);
        let page = RegisterTemplate {
            chrome: Chrome::new(guard.site()),
            full_name: profile.full_name,
            email: profile.email,
            phone: profile.phone,
            errors: missing,
            ticket: None,
        };
        return (StatusCode::UNPROCESSABLE_ENTITY, respond(page, scroll, false)).into_response();
    }

    let mut scroll = ScrollRequest::new();
    let ticket = guard.site_mut().register(&profile, &mut scroll);
    add_breadcrumb("auth", "Registered", None);

    let page = RegisterTemplate {
        chrome: Chrome::new(guard.site()),
        full_name: String::new(),
        email: String::new(),
        phone: String::new(),
        errors: Vec::new(),
        ticket: Some(ticket),
    };
    respond(page, scroll, false)
}
