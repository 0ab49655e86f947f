//! Window load and history listeners

use leptos::ev;
use leptos::prelude::*;

/// Log the load time, start lazy images and log back/forward navigation
///
/// Hydration can finish after `load` already fired; the load work then runs
/// right away.
pub fn use_page_lifecycle() {
    let load = window_event_listener(ev::load, |_| {
        #[cfg(not(feature = "ssr"))]
        page_loaded();
    });
    let history = window_event_listener(ev::popstate, |ev| {
        #[cfg(not(feature = "ssr"))]
        {
            let state = ev.state();
            if !state.is_null() && !state.is_undefined() {
                leptos::logging::log!("Navigation state: {:?}", state);
            }
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    });
    on_cleanup(move || {
        load.remove();
        history.remove();
    });

    #[cfg(not(feature = "ssr"))]
    if document().ready_state() == "complete" {
        page_loaded();
    }
}

#[cfg(not(feature = "ssr"))]
fn page_loaded() {
    use crate::core::landing::page_load_time_ms;

    if let Some(performance) = window().performance() {
        let timing = performance.timing();
        let load_time = page_load_time_ms(timing.navigation_start(), timing.load_event_end())
            .unwrap_or_else(|| performance.now().round() as u64);
        leptos::logging::log!("Page load time: {}ms", load_time);
    }

    load_lazy_images();
}

/// Swap `data-src` into `src` for every lazy image once it becomes visible
#[cfg(not(feature = "ssr"))]
fn load_lazy_images() {
    use crate::core::landing::{LAZY_IMAGE_OBSERVER, LAZY_IMAGE_SELECTOR, lazy_image_source};
    use crate::ui::reveal::observe_intersection;
    use wasm_bindgen::JsCast;

    let Ok(images) = document().query_selector_all(LAZY_IMAGE_SELECTOR) else {
        return;
    };

    for index in 0..images.length() {
        let Some(image) = images
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };

        let target = image.clone();
        observe_intersection(&image, LAZY_IMAGE_OBSERVER, true, move || {
            let data_src = target.get_attribute("data-src");
            if let Some(src) = lazy_image_source(data_src.as_deref()) {
                if target.set_attribute("src", src).is_ok() {
                    let _ = target.remove_attribute("data-src");
                }
            }
        });
    }
}
