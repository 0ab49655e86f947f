//! Waitlist sign-up: submission record, endpoint configuration, request
//! encoding, best-effort local persistence and the submission controller

mod controller;
mod encoding;
mod endpoint;
mod error;
mod record;
mod store;

pub use controller::*;
pub use encoding::*;
pub use endpoint::*;
pub use error::*;
pub use record::*;
pub use store::*;
