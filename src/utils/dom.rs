//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

use crate::config::THEME_ATTRIBUTE;
use crate::models::Theme;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Set the document-wide theme attribute (`<html data-theme="...">`).
pub fn apply_theme(theme: Theme) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(root) = document.document_element()
    {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}
