//! Common reusable UI components
//!
//! Buttons, form fields, spinners and messages shared by the landing page
//! sections.

pub mod button;
pub mod form;
pub mod message;
pub mod spinner;

pub use button::{ButtonSize, ButtonVariant, LinkButton};
pub use form::{CheckboxField, FormField, SelectField};
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::{InlineSpinner, LoadingButton, Spinner, SpinnerSize};
