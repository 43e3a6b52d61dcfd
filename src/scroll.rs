#[cfg(all(test, target_arch = "wasm32"))]
#[path = "scroll_test.rs"]
mod scroll_test;

use web_sys::Element;

/// Pins a scrollable viewport to its end.
///
/// Stateless and idempotent; calling it again on an unchanged element
/// leaves the offset where it is.
pub fn pin_to_latest(el: &Element) {
    el.set_scroll_top(el.scroll_height());
}
