//! Core domain logic for the landing page: waitlist submission flow and the
//! pure state-to-style mappings behind every page interaction

#[cfg(feature = "ssr")]
pub mod config;
pub mod landing;
#[cfg(feature = "ssr")]
pub mod server;
#[cfg(test)]
mod tests;
pub mod validation;
pub mod waitlist;

pub use validation::*;
pub use waitlist::*;
