//! Browser side of the waitlist controller
//!
//! Implements the controller's seams on top of Leptos signals (page surface),
//! gloo-net (transport) and `localStorage` (submission cache).

mod form;
#[cfg(not(feature = "ssr"))]
mod storage;
mod surface;
#[cfg(not(feature = "ssr"))]
mod transport;

pub use form::WaitlistForm;
#[cfg(not(feature = "ssr"))]
pub use storage::BrowserStore;
pub use surface::{WaitlistFields, WaitlistView};
#[cfg(not(feature = "ssr"))]
pub use transport::FetchTransport;
