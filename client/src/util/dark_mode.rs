//! Theme preference.
//!
//! The choice lives in `localStorage` under [`THEME_KEY`] and is reflected
//! as `data-theme` on `<html>`. With nothing stored the system
//! `prefers-color-scheme` decides. SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

pub const THEME_KEY: &str = "today.dark";

/// Stored preference, else the system preference, else light.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::load_json::<bool>(THEME_KEY) {
        return stored;
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Attribute value for `data-theme`.
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Set `data-theme` on the document element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_name(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_json(THEME_KEY, &next);
    next
}
