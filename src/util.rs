// DOM helpers shared by the views.
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement};

use crate::state::Viewport;

/// Client size of `el`, or `None` if it has not been laid out yet.
pub fn measure(el: &HtmlElement) -> Option<Viewport> {
    let width = el.client_width() as f64;
    let height = el.client_height() as f64;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Viewport { width, height })
}

/// Keyboard shortcuts stay out of the way while the user types.
pub fn is_text_entry(e: &Event) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .is_some()
}
