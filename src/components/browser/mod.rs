//! Repository browser UI components.
//!
//! Components:
//! - [`Browser`] - Content region (loading, listing, error panel or settings)
//! - [`CardGrid`] - One card per directory entry
//! - [`ErrorPanel`] - Diagnostic panel for failed listings

#[allow(clippy::module_inception)]
mod browser;
mod card_grid;
mod error_panel;
mod header;
mod preview;

pub use browser::Browser;
pub use card_grid::CardGrid;
pub use error_panel::ErrorPanel;
