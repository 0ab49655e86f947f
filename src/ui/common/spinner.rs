use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("spinner {}", size.class());

    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <span class=full_classes role="status" aria-live="polite">
            <span class="sr-only">"Loading..."</span>
        </span>
    }
}

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Small class="spinner-inline".to_string() />
    }
}

/// Submit button that swaps its label for a spinner while busy
#[component]
pub fn LoadingButton(
    /// Whether button is in loading state
    #[prop(into)]
    loading: Signal<bool>,
    /// Button text when not loading
    text: &'static str,
    /// Button text when loading
    #[prop(default = "Loading...")]
    loading_text: &'static str,
    /// Element id
    #[prop(optional)]
    id: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn btn-primary".to_string()
    } else {
        format!("btn btn-primary {}", class)
    };

    view! {
        <button
            type="submit"
            id=id
            class=full_classes
            disabled=move || loading.get()
            aria-busy=move || loading.get().to_string()
        >
            <span class="btn-text" class:hidden=move || loading.get()>{text}</span>
            <span class="btn-loading" class:hidden=move || !loading.get()>
                <InlineSpinner />
                <span>{loading_text}</span>
            </span>
        </button>
    }
}
