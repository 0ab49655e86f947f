//! Page load and history events

use super::reveal::ObserverOptions;

/// Images whose real source waits in `data-src` until they scroll into view
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Any intersection loads a lazy image
pub const LAZY_IMAGE_OBSERVER: ObserverOptions = ObserverOptions::new(0.0);

/// Source to swap into a lazy image, if its `data-src` holds one
pub fn lazy_image_source(data_src: Option<&str>) -> Option<&str> {
    data_src.map(str::trim).filter(|src| !src.is_empty())
}

/// Milliseconds between navigation start and the end of the load event
///
/// Returns `None` while `load_end` is still unset (zero) or when the
/// timestamps are inconsistent.
pub fn page_load_time_ms(navigation_start: f64, load_end: f64) -> Option<u64> {
    if !navigation_start.is_finite() || !load_end.is_finite() || load_end <= 0.0 {
        return None;
    }
    let elapsed = load_end - navigation_start;
    (elapsed >= 0.0).then(|| elapsed.round() as u64)
}
