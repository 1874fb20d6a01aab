//! Dark mode initialization and toggle.
//!
//! The preference persists under a single `localStorage` key holding
//! `"dark"` or `"light"`; with nothing stored, the `prefers-color-scheme`
//! media query decides. Applying a theme toggles the `.dark-mode` class on
//! the `<html>` element and keeps the navbar toggle button's `aria-pressed`
//! in sync. Requires a browser environment; degrades to a no-op without one.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "site-theme";

/// Read the stored theme preference, falling back to the system preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                return stored == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply a theme: class on `<html>`, `aria-pressed` on the toggle button.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(root) = doc.document_element() {
            let _ = if dark {
                root.class_list().add_1("dark-mode")
            } else {
                root.class_list().remove_1("dark-mode")
            };
        }
        if let Some(btn) = doc.get_element_by_id("theme-toggle") {
            let _ = btn.set_attribute("aria-pressed", if dark { "true" } else { "false" });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current_dark: bool) -> bool {
    let next = !current_dark;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
            }
        }
    }
    next
}
