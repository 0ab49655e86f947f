pub mod common;
pub mod copy_button;
pub mod counter;
pub mod icon;
pub mod lifecycle;
pub mod navbar;
pub mod pages;
pub mod pricing;
pub mod reveal;
pub mod waitlist;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
