//! Navbar, mobile menu, in-page scrolling and section titles

/// Scroll offset (px) past which the navbar gets its raised shadow
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Extra gap (px) kept between the navbar and a scrolled-to section
pub const SCROLL_TARGET_GAP: f64 = 20.0;

/// Shadow of the navbar while the page is scrolled
pub const NAVBAR_SHADOW_RAISED: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";

/// Shadow of the navbar at the top of the page
pub const NAVBAR_SHADOW_RESTING: &str =
    "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)";

/// Title used when no tracked section is in view
pub const DEFAULT_PAGE_TITLE: &str = "Z Image API - Advanced AI Image Generation";

/// Navbar box-shadow for the current vertical scroll offset
pub fn navbar_shadow(scroll_top: f64) -> &'static str {
    if scroll_top > NAVBAR_SCROLL_THRESHOLD {
        NAVBAR_SHADOW_RAISED
    } else {
        NAVBAR_SHADOW_RESTING
    }
}

/// Element id targeted by a same-page link, if the link should scroll
///
/// A bare `#` and links to other pages keep their default behaviour.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window scroll position that puts a section just below the fixed navbar
pub fn scroll_target_top(element_top: f64, navbar_height: f64) -> f64 {
    element_top - navbar_height - SCROLL_TARGET_GAP
}

/// Open/closed state of the mobile navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button pressed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was followed
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    /// A key was pressed anywhere on the page
    ///
    /// Returns `true` when the key closed the menu.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Class toggled on both the toggle button and the link list
    pub fn active_class(&self) -> &'static str {
        if self.open { "active" } else { "" }
    }

    /// Inline style of the link list on small screens
    pub fn links_style(&self) -> &'static str {
        if self.open {
            "display: flex; position: absolute; top: 100%; left: 0; right: 0; \
             flex-direction: column; background: white; padding: 1rem; \
             box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);"
        } else {
            ""
        }
    }
}

/// Document title for a section id that has scrolled into view
pub fn section_title(section_id: &str) -> Option<&'static str> {
    match section_id {
        "features" => Some("Features - Z Image API"),
        "demo" => Some("Live Demo - Z Image API"),
        "tutorial" => Some("Tutorial - Z Image API"),
        "python-guide" => Some("Python Guide - Z Image API"),
        "github" => Some("GitHub - Z Image API"),
        _ => None,
    }
}

/// Document title given the most recently viewed section
pub fn page_title(active_section: Option<&str>) -> &'static str {
    active_section
        .and_then(section_title)
        .unwrap_or(DEFAULT_PAGE_TITLE)
}
