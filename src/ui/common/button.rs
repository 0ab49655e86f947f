use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-large",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    let base = format!("btn {} {}", variant.class(), size.class());
    let base = base.trim_end().to_string();
    if class.is_empty() {
        base
    } else {
        format!("{} {}", base, class)
    }
}

/// Anchor styled as a button
///
/// Same-page `#id` links are picked up by the page-wide smooth scrolling;
/// external links open in a new tab.
#[component]
pub fn LinkButton(
    /// Link target
    href: &'static str,
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Optional icon name shown after the text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Open in a new tab
    #[prop(default = false)]
    external: bool,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Button content
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, &class);

    view! {
        <a
            href=href
            class=classes
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
            {icon.map(|name| view! { <Icon name=name class="icon-btn"/> })}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(
            button_classes(ButtonVariant::Primary, ButtonSize::Medium, ""),
            "btn btn-primary"
        );
        assert_eq!(
            button_classes(ButtonVariant::Outline, ButtonSize::Large, "hero-cta"),
            "btn btn-outline btn-large hero-cta"
        );
    }
}
