//! UI components built with Leptos.
//!
//! - [`Browser`] - Repository browser (listing, card grid, error panel)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`settings`] - Repository settings form
//! - [`topbar`] - Page header with the theme toggle

pub mod browser;
pub mod icons;
pub mod settings;
pub mod topbar;

pub use browser::Browser;
