//! Pointer-event glue for the gesture machines in `tasks::gesture`.

use leptos::ev::PointerEvent;

/// Client coordinates in CSS pixels.
pub fn point(ev: &PointerEvent) -> (f64, f64) {
    (f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Keep receiving moves for this pointer after it leaves the element.
pub fn capture(ev: &PointerEvent) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
    }
}

/// Viewport height for sizing the bottom sheet.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(DEFAULT_VIEWPORT_HEIGHT)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_VIEWPORT_HEIGHT
    }
}

const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;
