//! Browser console logging.
//!
//! Thin wrappers over `web_sys::console`. Off wasm32 (native unit tests)
//! they compile to no-ops, since JS imports cannot be called there.

/// Log an informational message.
pub fn info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::info_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Log a warning.
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Log an error.
pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}
