//! Reusable message components for errors and success panels

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success panel with a check icon, a heading and free content
#[component]
pub fn SuccessMessage(
    /// Heading text
    title: &'static str,
    /// Panel body
    children: Children,
) -> impl IntoView {
    view! {
        <div class="success-message" role="status">
            <div class="success-icon">
                <Icon name=icons::CHECK class="icon-success"/>
            </div>
            <h3>{title}</h3>
            {children()}
        </div>
    }
}
