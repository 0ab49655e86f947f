use leptos::prelude::*;

use crate::core::landing::field_is_focused;

/// Classes of a field wrapper; `focused` while focused or holding a value
fn group_class(has_focus: bool, value: &str) -> &'static str {
    if field_is_focused(has_focus, value) {
        "form-group focused"
    } else {
        "form-group"
    }
}

/// Text input with label, bound to a signal
#[component]
pub fn FormField(
    /// Input id and name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Bound value
    value: RwSignal<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let (has_focus, set_has_focus) = signal(false);

    view! {
        <div class=move || value.with(|v| group_class(has_focus.get(), v))>
            <label for=id>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <input
                type=input_type
                id=id
                name=id
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| set_has_focus.set(true)
                on:blur=move |_| set_has_focus.set(false)
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Select id and name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Bound value
    value: RwSignal<String>,
    /// Options as (value, display_text) pairs; the first is the placeholder
    options: &'static [(&'static str, &'static str)],
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let (has_focus, set_has_focus) = signal(false);

    view! {
        <div class=move || value.with(|v| group_class(has_focus.get(), v))>
            <label for=id>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <select
                id=id
                name=id
                required=required
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| set_has_focus.set(true)
                on:blur=move |_| set_has_focus.set(false)
                disabled=move || disabled.get()
            >
                {options.iter().map(|(val, text)| {
                    view! { <option value=*val>{*text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Checkbox form field component
#[component]
pub fn CheckboxField(
    /// Input id and name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Bound checked state
    checked: RwSignal<bool>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group checkbox-group">
            <label for=id class="checkbox-label">
                <input
                    type="checkbox"
                    id=id
                    name=id
                    prop:checked=move || checked.get()
                    on:change=move |ev| checked.set(event_target_checked(&ev))
                    disabled=move || disabled.get()
                />
                <span>{label}</span>
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_class() {
        assert_eq!(group_class(false, ""), "form-group");
        assert_eq!(group_class(true, ""), "form-group focused");
        assert_eq!(group_class(false, "Ada"), "form-group focused");
    }
}
