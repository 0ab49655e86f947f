//! Z Image API - waitlist landing page
//!
//! A server-rendered marketing page with a waitlist sign-up form, built with
//! Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use leptos::logging::log;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);

    log!("👋 Welcome to Z Image API!");
    log!("Interested in contributing? Visit our GitHub: https://github.com/Tongyi-MAI/Z-Image");
}
