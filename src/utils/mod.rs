//! Browser utility modules.
//!
//! Provides:
//! - [`console`] - Console logging (no-op off wasm32)
//! - [`dom`] - Window, storage, theme attribute, new-tab navigation
//! - [`fetch_text`] - Network fetching

pub mod console;
pub mod dom;
mod fetch;

pub use fetch::fetch_text;
