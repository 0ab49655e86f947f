//! Pricing plan toggle and card hover

/// Which pricing table is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PricingPlan {
    #[default]
    SelfHosted,
    Api,
}

impl PricingPlan {
    /// Plan selected by the toggle switch (checked = API pricing)
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            PricingPlan::Api
        } else {
            PricingPlan::SelfHosted
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, PricingPlan::Api)
    }

    /// Class of the table belonging to `plan` while `self` is selected
    pub fn table_class(&self, plan: PricingPlan) -> &'static str {
        if *self == plan { "pricing-grid" } else { "pricing-grid hidden" }
    }
}

/// Inline transform of a pricing card
pub fn pricing_card_transform(hovered: bool) -> &'static str {
    if hovered {
        "transform: translateY(-10px);"
    } else {
        "transform: translateY(0);"
    }
}
