//! SkyRay Core - the site's state model.
//!
//! Everything a visitor can do on the SkyRay Engineering Solutions website,
//! minus the web: the static catalog, page navigation, the quotation cart,
//! the login session and the timed confirmation screens. The `site` crate
//! renders this over HTTP.
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no clocks, no HTTP. Timers live with the caller, which hands back the
//! [`Ticket`] it was given when the delay elapses.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids and email addresses
//! - [`catalog`] - Services, products, gallery, projects, form options
//! - [`navigation`] - Pages, destinations and the scroll side effect
//! - [`session`] - Login session and the authentication boundary
//! - [`cart`] - Quotation cart
//! - [`site`] - Per-visitor state tying the above together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod navigation;
pub mod session;
pub mod site;
pub mod types;

pub use cart::{Cart, CartLine, ItemKind, LineItem, Quantity};
pub use navigation::{Destination, Navigator, Page, ScrollRequest, Viewport};
pub use session::{
    AcceptAllProvider, AuthError, AuthProvider, Credentials, RegistrationProfile, Session,
};
pub use site::{Confirmation, ContactMessage, QuotationRequest, SiteState, SubmitOutcome};
pub use types::*;
