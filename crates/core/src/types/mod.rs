//! Small value types shared by the state model.

pub mod email;
pub mod id;

pub use email::{Email, EmailError};
pub use id::{CartLineId, Ticket};
