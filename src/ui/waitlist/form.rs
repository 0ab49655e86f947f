//! Waitlist sign-up form and success panel

use leptos::prelude::*;

use super::surface::WaitlistView;
use crate::ui::common::{
    CheckboxField, ErrorMessage, FormField, LoadingButton, SelectField, SuccessMessage,
};

const USE_CASE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select your primary use case"),
    ("content-creation", "Content Creation"),
    ("ecommerce", "E-commerce Product Images"),
    ("marketing", "Marketing & Advertising"),
    ("game-dev", "Game Development"),
    ("research", "Research & Education"),
    ("other", "Other"),
];

const VOLUME_OPTIONS: &[(&str, &str)] = &[
    ("", "Select estimated volume"),
    ("<1k", "Less than 1,000 images/month"),
    ("1k-10k", "1,000 - 10,000 images/month"),
    ("10k-100k", "10,000 - 100,000 images/month"),
    ("100k+", "More than 100,000 images/month"),
];

/// Waitlist form wired to a [`WaitlistController`](crate::core::WaitlistController)
///
/// One controller is created per mounted form; it lives for the page
/// lifetime and serializes submissions.
#[component]
pub fn WaitlistForm() -> impl IntoView {
    let state = WaitlistView::new();
    let fields = state.fields;

    #[cfg(not(feature = "ssr"))]
    let controller = {
        use super::{BrowserStore, FetchTransport};
        use crate::core::{WaitlistConfig, WaitlistController};
        use std::rc::Rc;

        let config = WaitlistConfig::from_build_env();
        leptos::logging::log!("Waitlist endpoint: {} ({})", config.endpoint, config.kind);

        StoredValue::new_local(Rc::new(WaitlistController::new(
            config,
            FetchTransport,
            BrowserStore::open(),
        )))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::SubmitOutcome;
            use leptos::logging::{error, log, warn};

            let controller = controller.get_value();
            let draft = fields.draft();

            leptos::task::spawn_local(async move {
                match controller.submit(&state, draft, chrono::Utc::now()).await {
                    Ok(SubmitOutcome::Joined) => log!("Waitlist submission accepted"),
                    Ok(SubmitOutcome::AlreadyInFlight) => {
                        warn!("Waitlist submission ignored, one is already in flight")
                    }
                    Err(err) if err.is_validation() => warn!("Waitlist form invalid: {}", err),
                    Err(err) => error!("Error submitting form: {}", err),
                }
            });
        }
    };

    let busy = state.busy;
    let joined = state.joined;

    view! {
        <div class="waitlist-form-container">
            <form
                id="waitlistForm"
                class="waitlist-form"
                class:hidden=move || joined.get()
                on:submit=on_submit
            >
                <div class="form-row">
                    <FormField
                        id="fullName"
                        label="Full Name"
                        required=true
                        placeholder="John Doe"
                        value=fields.full_name
                    />
                    <FormField
                        id="email"
                        label="Email Address"
                        required=true
                        input_type="email"
                        placeholder="john@example.com"
                        value=fields.email
                    />
                </div>
                <div class="form-row">
                    <FormField
                        id="company"
                        label="Company (Optional)"
                        placeholder="Acme Inc."
                        value=fields.company
                    />
                    <SelectField
                        id="useCase"
                        label="Primary Use Case"
                        required=true
                        value=fields.use_case
                        options=USE_CASE_OPTIONS
                    />
                </div>
                <SelectField
                    id="estimatedVolume"
                    label="Estimated Monthly Volume"
                    value=fields.estimated_volume
                    options=VOLUME_OPTIONS
                />
                <CheckboxField
                    id="newsletter"
                    label="Send me product updates and early access news"
                    checked=fields.newsletter
                />

                <ErrorMessage error=state.notice />

                <LoadingButton
                    id="submitBtn"
                    class="btn-large btn-block".to_string()
                    loading=busy
                    text="Join the Waitlist"
                    loading_text="Joining..."
                />
                <p class="form-note">"No spam. Unsubscribe anytime."</p>
            </form>

            <div id="successMessage" class:hidden=move || !joined.get()>
                <SuccessMessage title="You're on the list!">
                    <p>
                        "Thanks for joining the Z Image API waitlist. We'll email you as soon as early access opens."
                    </p>
                </SuccessMessage>
            </div>
        </div>
    }
}
