//! Small cosmetic interactions: FAQ pulse, staggered cards, focused fields
//! and the comparison table scroll hint

/// Viewport width (px) below which the comparison table shows a swipe hint
pub const SCROLL_HINT_MAX_WIDTH: f64 = 768.0;

/// Duration of the FAQ click pulse (ms)
pub const FAQ_PULSE_MS: u32 = 200;

/// Fade-out of the scroll hint before it is removed (ms)
pub const SCROLL_HINT_FADE_MS: u32 = 300;

/// Inline transform of a FAQ item while pulsing
pub fn faq_item_style(pulsing: bool) -> &'static str {
    if pulsing {
        "cursor: pointer; transform: scale(1.02);"
    } else {
        "cursor: pointer; transform: scale(1);"
    }
}

/// Staggered animation delay of the `index`-th use-case card
pub fn use_case_delay(index: usize) -> String {
    // index * 0.1s, printed without float noise
    if index % 10 == 0 {
        format!("animation-delay: {}s;", index / 10)
    } else {
        format!("animation-delay: {}.{}s;", index / 10, index % 10)
    }
}

/// Whether a form field wrapper carries the `focused` class
pub fn field_is_focused(has_focus: bool, value: &str) -> bool {
    has_focus || !value.is_empty()
}

/// Lifecycle of the comparison table swipe hint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollHint {
    /// Not shown (wide viewport or already removed)
    #[default]
    Hidden,
    /// Visible, waiting for the first scroll
    Shown,
    /// Fading out after the first scroll
    Fading,
}

impl ScrollHint {
    /// Initial state for a viewport of the given width
    pub fn for_viewport(width: f64) -> Self {
        if width < SCROLL_HINT_MAX_WIDTH {
            ScrollHint::Shown
        } else {
            ScrollHint::Hidden
        }
    }

    /// The table was scrolled; only the first scroll matters
    pub fn scrolled(self) -> Self {
        match self {
            ScrollHint::Shown => ScrollHint::Fading,
            other => other,
        }
    }

    pub fn is_rendered(&self) -> bool {
        !matches!(self, ScrollHint::Hidden)
    }

    pub fn style(&self) -> &'static str {
        match self {
            ScrollHint::Fading => "opacity: 0; transition: opacity 0.3s;",
            _ => "opacity: 1; transition: opacity 0.3s;",
        }
    }
}
