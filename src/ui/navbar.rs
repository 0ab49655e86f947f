//! Fixed navigation bar and page-wide link handling

use leptos::ev;
use leptos::prelude::*;

use crate::core::landing::{MobileMenu, navbar_shadow};
use crate::ui::icon::{Icon, icons};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#demo", "Demo"),
    ("#tutorial", "Tutorial"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
];

/// Navigation bar with scroll shadow and a collapsible mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let (shadow, set_shadow) = signal(navbar_shadow(0.0));
    let menu = RwSignal::new(MobileMenu::default());

    let scroll = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        set_shadow.set(navbar_shadow(offset));
    });
    let keys = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        if menu.try_update(|m| m.key_pressed(&key)).unwrap_or(false) {
            leptos::logging::log!("Mobile menu closed with Escape");
        }
    });
    on_cleanup(move || {
        scroll.remove();
        keys.remove();
    });

    view! {
        <nav class="navbar" style=move || format!("box-shadow: {};", shadow.get())>
            <div class="container nav-container">
                <a href="#" class="logo">
                    <Icon name=icons::LIGHTNING class="logo-icon"/>
                    <span>"Z Image API"</span>
                </a>
                <ul
                    class=move || format!("nav-links {}", menu.get().active_class()).trim_end().to_string()
                    style=move || menu.get().links_style()
                >
                    {NAV_LINKS.iter().map(|(href, label)| view! {
                        <li>
                            <a href=*href on:click=move |_| menu.update(|m| m.link_clicked())>
                                {*label}
                            </a>
                        </li>
                    }).collect_view()}
                    <li>
                        <a
                            href="#waitlist"
                            class="btn btn-primary nav-cta"
                            on:click=move |_| menu.update(|m| m.link_clicked())
                        >
                            "Join Waitlist"
                        </a>
                    </li>
                </ul>
                <button
                    type="button"
                    class=move || format!("mobile-menu-toggle {}", menu.get().active_class()).trim_end().to_string()
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    {move || if menu.get().is_open() {
                        view! { <Icon name=icons::X class="icon-menu"/> }
                    } else {
                        view! { <Icon name=icons::MENU class="icon-menu"/> }
                    }}
                </button>
            </div>
        </nav>
    }
}

/// Delegated click handling for every link on the page
///
/// Same-page `#id` links scroll smoothly to just below the navbar, and links
/// opening a new tab are logged before the browser follows them.
pub fn use_link_handlers() {
    let clicks = window_event_listener(ev::click, |ev| {
        #[cfg(not(feature = "ssr"))]
        handle_link_click(&ev);
        #[cfg(feature = "ssr")]
        let _ = ev;
    });
    on_cleanup(move || clicks.remove());
}

#[cfg(not(feature = "ssr"))]
fn handle_link_click(ev: &web_sys::MouseEvent) {
    use crate::core::landing::{anchor_target, scroll_target_top};
    use wasm_bindgen::JsCast;

    let Some(target) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return;
    };

    if let Ok(Some(external)) = target.closest("a[target=\"_blank\"]") {
        let url = external.get_attribute("href").unwrap_or_default();
        leptos::logging::log!("External link clicked: {}", url);
        return;
    }

    let Ok(Some(anchor)) = target.closest("a[href^=\"#\"]") else {
        return;
    };
    ev.prevent_default();

    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(id) = anchor_target(&href) else {
        return;
    };

    let document = document();
    let Some(section) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let navbar_height = document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.offset_height())
        .unwrap_or_default();

    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll_target_top(
        section.offset_top() as f64,
        navbar_height as f64,
    ));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
