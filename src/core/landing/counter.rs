//! Animated number counters

/// Waitlist size shown before the counter starts
pub const WAITLIST_COUNT_START: u64 = 1200;
/// Waitlist size the counter settles on
pub const WAITLIST_COUNT_END: u64 = 1247;
/// Duration of the waitlist counter animation
pub const WAITLIST_COUNT_DURATION_MS: f64 = 2000.0;

/// A linear count-up from `start` to `end` over `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub start: u64,
    pub end: u64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub const fn new(start: u64, end: u64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
        }
    }

    /// Counter used for the "developers on the waitlist" social proof
    pub const fn waitlist() -> Self {
        Self::new(
            WAITLIST_COUNT_START,
            WAITLIST_COUNT_END,
            WAITLIST_COUNT_DURATION_MS,
        )
    }

    /// Progress in `[0, 1]` after `elapsed_ms`
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value shown after `elapsed_ms`, floored like the browser version
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let progress = self.progress(elapsed_ms);
        let start = self.start as f64;
        let end = self.end as f64;
        (progress * (end - start) + start).floor() as u64
    }

    /// Whether the animation has reached its final value
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Format a count with `,` thousands separators (en-US grouping)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Social proof label for the waitlist counter
pub fn waitlist_label(count: u64) -> String {
    format!("{}+ developers", format_thousands(count))
}
