//! Window viewport size lookup.

/// Current window inner size in CSS pixels.
///
/// Falls back to zero when the window or its dimensions are unavailable;
/// the canvas then simply has no columns to paint.
#[must_use]
pub fn size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}
