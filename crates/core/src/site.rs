//! Per-visitor application state.
//!
//! [`SiteState`] owns the navigator, the cart, the optional session and at
//! most one pending timed confirmation. It is a plain value: the web layer
//! keeps one per visitor, tests build as many as they like.
//!
//! # Timed confirmations
//!
//! Some actions show a confirmation screen for a few seconds before
//! something else happens (the cart is cleared, the login page appears, a
//! form resets). The state only records *which* confirmation is showing and
//! hands out a [`Ticket`]; whoever owns the clock later calls
//! [`SiteState::resolve`] with that ticket. A ticket only resolves while it is
//! still the pending one, and leaving the page drops it, so a timer that
//! fires after its view is gone changes nothing.

use tracing::{debug, info};

use crate::cart::{Cart, LineItem, Quantity};
use crate::catalog::{PROJECT_TYPES, SERVICE_OPTIONS, find_category, find_product, option_label};
use crate::navigation::{Destination, Navigator, Page, Viewport};
use crate::session::{AuthError, AuthProvider, Credentials, RegistrationProfile, Session};
use crate::types::{CartLineId, Ticket};

/// A timed confirmation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirmation {
    /// Quotation form: line added, form resets afterwards.
    QuotationAdded,
    /// Cart: quotation sent, then the cart is cleared and home is shown.
    QuotationSubmitted,
    /// Register: account "created", then the login page is shown.
    Registered,
    /// Contact: message "sent", form resets afterwards.
    ContactSent,
}

impl Confirmation {
    /// The page the confirmation is shown on.
    #[must_use]
    pub const fn page(self) -> Page {
        match self {
            Self::QuotationAdded => Page::Quotation,
            Self::QuotationSubmitted => Page::Cart,
            Self::Registered => Page::Register,
            Self::ContactSent => Page::Contact,
        }
    }

    const fn destination(self) -> Destination {
        match self {
            Self::QuotationAdded => Destination::Quotation,
            Self::QuotationSubmitted => Destination::Cart,
            Self::Registered => Destination::Register,
            Self::ContactSent => Destination::Contact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    ticket: Ticket,
    confirmation: Confirmation,
}

/// Result of [`SiteState::submit_quotation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nobody is logged in: the login page is shown and the cart is untouched.
    RedirectToLogin,
    /// The confirmation is showing; resolving the ticket clears the cart.
    Submitted(Ticket),
}

/// A quotation form submission. `service` and `project_type` are option
/// values, not labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotationRequest {
    pub service: String,
    pub project_type: String,
    pub requirements: String,
    pub quantity: Quantity,
}

impl QuotationRequest {
    /// Names of required fields left blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("project type", self.project_type.trim().is_empty()),
            ("service", self.service.trim().is_empty()),
            ("requirements", self.requirements.trim().is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

/// A contact form submission. Nothing is sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Names of required fields left blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.trim().is_empty()),
            ("email", self.email.trim().is_empty()),
            ("subject", self.subject.trim().is_empty()),
            ("message", self.message.trim().is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

/// Navigation, cart and session for one visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteState {
    navigator: Navigator,
    cart: Cart,
    session: Option<Session>,
    pending: Option<Pending>,
    last_ticket: Ticket,
}

impl SiteState {
    /// Fresh state: home page, empty cart, nobody logged in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub const fn current_page(&self) -> Page {
        self.navigator.current()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Direct cart access for line edits (remove, quantity, clear).
    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The confirmation screen currently showing, if any.
    #[must_use]
    pub fn confirmation(&self) -> Option<Confirmation> {
        self.pending.map(|pending| pending.confirmation)
    }

    /// Ticket of the confirmation currently showing, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.map(|pending| pending.ticket)
    }

    /// Ticket of `confirmation` if it is the one currently showing.
    #[must_use]
    pub fn pending_for(&self, confirmation: Confirmation) -> Option<Ticket> {
        self.pending
            .filter(|pending| pending.confirmation == confirmation)
            .map(|pending| pending.ticket)
    }

    /// Show `destination`. Moving to a different page tears down the view
    /// that was showing, which drops its pending confirmation.
    pub fn navigate(&mut self, destination: Destination, viewport: &mut dyn Viewport) -> bool {
        let changed = self.navigator.navigate(destination, viewport);
        if changed && let Some(pending) = self.pending.take() {
            debug!(
                ticket = %pending.ticket,
                confirmation = ?pending.confirmation,
                "Confirmation abandoned by navigation"
            );
        }
        changed
    }

    /// Log in through `provider` and go home.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`AuthError`]; state is unchanged then.
    pub fn login(
        &mut self,
        provider: &dyn AuthProvider,
        credentials: &Credentials,
        viewport: &mut dyn Viewport,
    ) -> Result<&Session, AuthError> {
        let session = provider.authenticate(credentials)?;
        info!(name = %session.name, "Visitor logged in");
        self.navigate(Destination::Home, viewport);
        Ok(self.session.insert(session))
    }

    /// Forget the session and go home.
    pub fn logout(&mut self, viewport: &mut dyn Viewport) {
        if self.session.take().is_some() {
            info!("Visitor logged out");
        }
        self.navigate(Destination::Home, viewport);
    }

    /// Accept a registration. No account is created.
    pub fn register(
        &mut self,
        profile: &RegistrationProfile,
        viewport: &mut dyn Viewport,
    ) -> Ticket {
        debug!(full_name = %profile.full_name, "Registration received");
        self.begin(Confirmation::Registered, viewport)
    }

    /// Add a service-request line from the quotation form.
    ///
    /// Unknown option values produce empty labels rather than an error.
    pub fn request_quotation(
        &mut self,
        request: &QuotationRequest,
        viewport: &mut dyn Viewport,
    ) -> (CartLineId, Ticket) {
        let item = LineItem::service_request(
            option_label(SERVICE_OPTIONS, &request.service),
            option_label(PROJECT_TYPES, &request.project_type),
            request.requirements.trim(),
            request.quantity,
        );
        let line = self.cart.add_item(item).id();
        info!(line = %line, lines = self.cart.len(), "Quotation line added");
        let ticket = self.begin(Confirmation::QuotationAdded, viewport);
        (line, ticket)
    }

    /// Add one unit of a catalog product. `None` if the product (or its
    /// category) is not in the catalog.
    pub fn add_product(&mut self, product_id: &str) -> Option<CartLineId> {
        let product = find_product(product_id)?;
        let category = find_category(product.category)?;
        let line = self
            .cart
            .add_item(LineItem::product_order(product, category))
            .id();
        info!(line = %line, product = product.id, lines = self.cart.len(), "Product line added");
        Some(line)
    }

    /// Submit the cart for a quotation.
    ///
    /// Without a session this is a redirect to login, nothing else changes.
    /// With one, the submitted confirmation shows; the cart is cleared when
    /// the returned ticket resolves.
    pub fn submit_quotation(&mut self, viewport: &mut dyn Viewport) -> SubmitOutcome {
        if self.session.is_none() {
            debug!("Quotation submit without session, redirecting to login");
            self.navigate(Destination::Login, viewport);
            return SubmitOutcome::RedirectToLogin;
        }
        info!(lines = self.cart.len(), "Quotation submitted");
        SubmitOutcome::Submitted(self.begin(Confirmation::QuotationSubmitted, viewport))
    }

    /// Accept a contact form message. Nothing is sent.
    pub fn send_contact_message(
        &mut self,
        message: &ContactMessage,
        viewport: &mut dyn Viewport,
    ) -> Ticket {
        debug!(subject = %message.subject, "Contact message received");
        self.begin(Confirmation::ContactSent, viewport)
    }

    /// Finish the confirmation identified by `ticket`.
    ///
    /// Returns `false`, changing nothing, when `ticket` is not the pending
    /// one: already resolved, replaced by a newer confirmation, or abandoned
    /// by navigation.
    pub fn resolve(&mut self, ticket: Ticket, viewport: &mut dyn Viewport) -> bool {
        let Some(pending) = self.pending.filter(|pending| pending.ticket == ticket) else {
            debug!(ticket = %ticket, "Ignoring stale confirmation ticket");
            return false;
        };
        self.pending = None;

        match pending.confirmation {
            Confirmation::QuotationSubmitted => {
                self.cart.clear();
                self.navigate(Destination::Home, viewport);
            }
            Confirmation::Registered => {
                self.navigate(Destination::Login, viewport);
            }
            Confirmation::QuotationAdded | Confirmation::ContactSent => {}
        }
        debug!(ticket = %ticket, confirmation = ?pending.confirmation, "Confirmation resolved");
        true
    }

    /// Show `confirmation` on its page, replacing any older one.
    fn begin(&mut self, confirmation: Confirmation, viewport: &mut dyn Viewport) -> Ticket {
        self.navigate(confirmation.destination(), viewport);
        self.last_ticket = self.last_ticket.next();
        let ticket = self.last_ticket;
        self.pending = Some(Pending {
            ticket,
            confirmation,
        });
        ticket
    }
}
