//! Scroll-triggered fade-in

/// Options for an intersection observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport
    pub root_margin: &'static str,
}

impl ObserverOptions {
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px",
        }
    }

    pub const fn with_root_margin(mut self, root_margin: &'static str) -> Self {
        self.root_margin = root_margin;
        self
    }
}

/// Cards that fade in as they scroll into view
pub const REVEAL_OBSERVER: ObserverOptions =
    ObserverOptions::new(0.1).with_root_margin("0px 0px -100px 0px");

/// Hero statistics block
pub const HERO_STATS_OBSERVER: ObserverOptions = ObserverOptions::new(0.5);

/// Sections that drive the document title
pub const SECTION_OBSERVER: ObserverOptions = ObserverOptions::new(0.5);

/// Waitlist section that starts the sign-up counter
pub const WAITLIST_OBSERVER: ObserverOptions = ObserverOptions::new(0.3);

const REVEAL_TRANSITION: &str = "transition: opacity 0.6s ease-out, transform 0.6s ease-out;";

/// Inline style of a revealable card
///
/// Reveal is one-way: once shown, a card never hides again.
pub fn reveal_style(revealed: bool) -> String {
    if revealed {
        format!("opacity: 1; transform: translateY(0); {}", REVEAL_TRANSITION)
    } else {
        format!("opacity: 0; transform: translateY(30px); {}", REVEAL_TRANSITION)
    }
}

/// Inline style of a hero stat number
pub fn stat_style(revealed: bool) -> &'static str {
    if revealed {
        "opacity: 1; transition: opacity 0.5s ease-in;"
    } else {
        "opacity: 0;"
    }
}
