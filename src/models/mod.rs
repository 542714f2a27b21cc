//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`RepositoryConfig`], [`PersistedRepository`], [`SettingsDraft`] - Repository target
//! - [`DirectoryEntry`], [`EntryKind`], [`FileKind`] - Contents API entries
//! - [`Listing`], [`Card`] - Card grid view models
//! - [`Theme`] - Color theme preference

mod entry;
mod listing;
pub mod path;
mod repository;
mod theme;

pub use entry::{DirectoryEntry, FileKind};
pub use listing::{Card, CardKind, CardPreview, Listing};
pub use repository::{PersistedRepository, RepositoryConfig, SettingsDraft};
pub use theme::Theme;
