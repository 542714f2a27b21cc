//! Core business logic for the repository browser.
//!
//! This module provides:
//! - [`load_if_current`] fetch, filter and card building for the newest navigation
//! - [`Preferences`] persisted repository target and theme
//! - [`RequestSequencer`] stale-response guard for navigation
//! - [`render_first_page`] document previews

pub mod error;
mod listing;
mod preferences;
mod preview;
mod sequence;
pub mod storage;

pub use listing::{GitHubContents, ListingState, load_if_current};
pub use preferences::{Preferences, SubmitOutcome};
pub use preview::render_first_page;
pub use sequence::RequestSequencer;
