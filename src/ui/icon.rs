use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name (without the .svg extension)
    name: &'static str,
    /// CSS classes
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped under `/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const GITHUB: &str = "github";
    pub const LIGHTNING: &str = "lightning";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
}
