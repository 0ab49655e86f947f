//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - Z Image API" />

        <div class="not-found">
            <div class="not-found-content">
                // 404 icon
                <div class="not-found-icon">
                    <Icon name=icons::ALERT_CIRCLE class="icon-large" />
                </div>

                // Error code
                <h1>"404"</h1>

                // Title
                <h2>"Page Not Found"</h2>

                // Description
                <p>"The page you're looking for doesn't exist or has been moved."</p>

                // Actions
                <div class="not-found-actions">
                    <A href="/" attr:class="btn btn-primary">
                        "Go Home"
                    </A>
                    <A href="/#waitlist" attr:class="btn btn-outline">
                        "Join the Waitlist"
                    </A>
                </div>
            </div>

            // Footer
            <p class="not-found-footer">"© 2025 Z Image API"</p>
        </div>
    }
}
