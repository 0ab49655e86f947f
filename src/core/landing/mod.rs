//! Pure state → style/class mappings for the landing page interactions
//!
//! Each module maps a small piece of UI state to the classes, inline styles
//! or labels the page renders. The `ui` layer only subscribes to events and
//! feeds these functions, so the mapping logic is testable without a browser.

pub mod clipboard;
pub mod counter;
pub mod interactions;
pub mod lifecycle;
pub mod navigation;
pub mod pricing;
pub mod reveal;
pub mod seo;

pub use clipboard::*;
pub use counter::*;
pub use interactions::*;
pub use lifecycle::*;
pub use navigation::*;
pub use pricing::*;
pub use reveal::*;
pub use seo::*;
