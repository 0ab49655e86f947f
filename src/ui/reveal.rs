//! Scroll-triggered visibility
//!
//! Thin wrappers around `IntersectionObserver`. Observers and their
//! callbacks live for the page lifetime.

use leptos::html;
use leptos::prelude::*;

use crate::core::landing::{ObserverOptions, REVEAL_OBSERVER, reveal_style};
#[cfg(not(feature = "ssr"))]
use crate::core::landing::{SECTION_OBSERVER, section_title};

/// Call `on_visible` whenever `element` intersects the viewport
///
/// With `once`, the element is unobserved after its first intersection.
#[cfg(not(feature = "ssr"))]
pub fn observe_intersection<F>(
    element: &web_sys::Element,
    options: ObserverOptions,
    once: bool,
    on_visible: F,
) where
    F: Fn() + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible();
                    if once {
                        observer.unobserve(&entry.target());
                    }
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer.observe(element),
        Err(e) => leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e),
    }

    callback.forget();
}

/// Flag that turns true once the referenced element has scrolled into view
pub fn use_revealed(node: NodeRef<html::Div>, options: ObserverOptions) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if let Some(el) = node.get() {
            observe_intersection(&el, options, true, move || set_revealed.set(true));
        }
    });

    #[cfg(feature = "ssr")]
    let _ = (node, options, set_revealed);

    revealed
}

/// Card that fades and slides in the first time it becomes visible
#[component]
pub fn Reveal(
    /// Classes of the wrapper (`feature-card`, `tutorial-step`, ...)
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_revealed(node, REVEAL_OBSERVER);

    view! {
        <div node_ref=node class=class style=move || reveal_style(revealed.get())>
            {children()}
        </div>
    }
}

/// Id of the section most recently scrolled half into view
#[derive(Clone, Copy)]
pub struct ActiveSection(pub RwSignal<Option<&'static str>>);

pub fn provide_active_section() -> ActiveSection {
    let active = ActiveSection(RwSignal::new(None));
    provide_context(active);
    active
}

/// Page section that reports itself as active when half visible
#[component]
pub fn Section(
    id: &'static str,
    #[prop(default = "")] class: &'static str,
    /// Set once the section reaches the given visibility
    #[prop(optional)]
    seen: Option<(ObserverOptions, RwSignal<bool>)>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();

    #[cfg(not(feature = "ssr"))]
    {
        let active = use_context::<ActiveSection>();
        Effect::new(move |_| {
            let Some(el) = node.get() else {
                return;
            };
            // Only titled sections take over the document title
            if let (Some(ActiveSection(active)), Some(_)) = (active, section_title(id)) {
                observe_intersection(&el, SECTION_OBSERVER, false, move || {
                    active.set(Some(id))
                });
            }
            if let Some((options, flag)) = seen {
                observe_intersection(&el, options, true, move || flag.set(true));
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = seen;

    view! {
        <section node_ref=node id=id class=class>
            {children()}
        </section>
    }
}
