//! Pricing section with the self-hosted / API toggle

use leptos::prelude::*;

use crate::core::landing::{PricingPlan, pricing_card_transform};
use crate::ui::common::{ButtonVariant, LinkButton};
use crate::ui::icon::{Icon, icons};

/// One pricing card
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub featured: bool,
}

const SELF_HOSTED_PLANS: &[Plan] = &[
    Plan {
        name: "Community",
        price: "Free",
        period: "forever",
        features: &[
            "Full model weights",
            "Python SDK",
            "Community support",
            "Apache 2.0 license",
        ],
        cta: "#github",
        featured: false,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "annual",
        features: &[
            "Deployment assistance",
            "Priority support",
            "Custom fine-tuning",
            "SLA guarantees",
        ],
        cta: "#waitlist",
        featured: true,
    },
];

const API_PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$0.002",
        period: "per image",
        features: &["1,000 free images", "Standard queue", "Email support"],
        cta: "#waitlist",
        featured: false,
    },
    Plan {
        name: "Pro",
        price: "$0.0015",
        period: "per image",
        features: &[
            "Priority queue",
            "Batch generation",
            "Webhooks",
            "Dedicated support",
        ],
        cta: "#waitlist",
        featured: true,
    },
    Plan {
        name: "Scale",
        price: "Custom",
        period: "volume pricing",
        features: &["Reserved capacity", "Private endpoints", "99.9% uptime SLA"],
        cta: "#waitlist",
        featured: false,
    },
];

#[component]
pub fn PricingSection() -> impl IntoView {
    let plan = RwSignal::new(PricingPlan::default());

    view! {
        <div class="pricing-toggle">
            <span class:active=move || !plan.get().is_checked()>"Self-Hosted"</span>
            <label class="switch">
                <input
                    type="checkbox"
                    id="pricingToggle"
                    prop:checked=move || plan.get().is_checked()
                    on:change=move |ev| plan.set(PricingPlan::from_toggle(event_target_checked(&ev)))
                />
                <span class="slider"></span>
            </label>
            <span class:active=move || plan.get().is_checked()>"Hosted API"</span>
        </div>

        <div
            id="selfHostedPricing"
            class=move || plan.get().table_class(PricingPlan::SelfHosted)
        >
            {SELF_HOSTED_PLANS.iter().map(|p| view! { <PricingCard plan=p /> }).collect_view()}
        </div>
        <div id="apiPricing" class=move || plan.get().table_class(PricingPlan::Api)>
            {API_PLANS.iter().map(|p| view! { <PricingCard plan=p /> }).collect_view()}
        </div>
    }
}

#[component]
fn PricingCard(plan: &'static Plan) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    view! {
        <div
            class="pricing-card"
            class:featured=plan.featured
            style=move || pricing_card_transform(hovered.get())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <h3>{plan.name}</h3>
            <div class="price">
                <span class="amount">{plan.price}</span>
                <span class="period">{plan.period}</span>
            </div>
            <ul class="pricing-features">
                {plan.features.iter().map(|feature| view! {
                    <li>
                        <Icon name=icons::CHECK class="icon-check"/>
                        {*feature}
                    </li>
                }).collect_view()}
            </ul>
            <LinkButton
                href=plan.cta
                variant=if plan.featured { ButtonVariant::Primary } else { ButtonVariant::Outline }
                class="btn-block".to_string()
            >
                {if plan.cta == "#github" { "View on GitHub" } else { "Join Waitlist" }}
            </LinkButton>
        </div>
    }
}
