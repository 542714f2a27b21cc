//! Persisted user preferences: repository target and color theme.
//!
//! Both live in localStorage as two independent entries. [`Preferences`]
//! owns every read and write of them, so the in-memory config and its stored
//! copy only change together.

use crate::config::{REPO_CONFIG_KEY, THEME_KEY};
use crate::core::error::StorageError;
use crate::core::storage::KeyValueStore;
use crate::models::{PersistedRepository, RepositoryConfig, SettingsDraft, Theme};
use crate::utils::console;

/// Result of a settings form submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Config updated and persisted; the browser should reload from root.
    Committed,
    /// Owner or name was blank. Nothing changed and nothing is shown.
    Ignored,
}

/// Preference storage over an injected [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Built-in defaults overlaid with the stored repository record.
    pub fn load_repository(&self) -> RepositoryConfig {
        let mut config = RepositoryConfig::default();
        if let Some(stored) = self.store.get_json::<PersistedRepository>(REPO_CONFIG_KEY) {
            config.merge(stored);
        }
        config
    }

    /// Apply a settings form submission.
    ///
    /// Trims the draft and, if owner and name are present, persists the new
    /// record and then commits it to `config`. A failed write leaves `config`
    /// untouched. A blank owner or name is a silent no-op.
    pub fn submit(
        &self,
        config: &mut RepositoryConfig,
        draft: &SettingsDraft,
    ) -> Result<SubmitOutcome, StorageError> {
        let Some((owner, name, branch)) = draft.normalize() else {
            return Ok(SubmitOutcome::Ignored);
        };

        let next = RepositoryConfig {
            owner,
            name,
            branch,
            excluded_names: config.excluded_names.clone(),
        };
        self.store.set_json(REPO_CONFIG_KEY, &next.to_persisted())?;
        *config = next;

        Ok(SubmitOutcome::Committed)
    }

    /// Stored theme, or the default when absent or unrecognized.
    pub fn load_theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Flip the theme and persist the new value.
    ///
    /// The flip always happens; a failed write is only logged.
    pub fn toggle_theme(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(e) = self.store.set(THEME_KEY, next.as_str()) {
            console::warn(&format!("theme not saved: {}", e));
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::repository::{DEFAULT_NAME, DEFAULT_OWNER};
    use crate::core::storage::MemoryStore;

    fn draft(owner: &str, name: &str, branch: &str) -> SettingsDraft {
        SettingsDraft {
            owner: owner.to_string(),
            name: name.to_string(),
            branch: branch.to_string(),
        }
    }

    #[test]
    fn test_load_defaults_without_stored_record() {
        let prefs = Preferences::new(MemoryStore::new());
        let config = prefs.load_repository();
        assert_eq!(config, RepositoryConfig::default());
        assert_eq!(config.owner, DEFAULT_OWNER);
        assert_eq!(config.name, DEFAULT_NAME);
    }

    #[test]
    fn test_load_overlays_stored_record() {
        let store = MemoryStore::new().with(
            REPO_CONFIG_KEY,
            r#"{"owner":"alice","name":"notes","branch":"pages"}"#,
        );
        let config = Preferences::new(store).load_repository();
        assert_eq!(config.owner, "alice");
        assert_eq!(config.name, "notes");
        assert_eq!(config.branch, "pages");
        assert!(config.is_excluded("README.md"));
    }

    #[test]
    fn test_stored_excluded_names_are_ignored() {
        let store = MemoryStore::new().with(
            REPO_CONFIG_KEY,
            r#"{"owner":"alice","name":"notes","excludedFiles":[]}"#,
        );
        let config = Preferences::new(store).load_repository();
        assert_eq!(config.excluded_names, RepositoryConfig::default().excluded_names);
    }

    #[test]
    fn test_load_ignores_corrupt_record() {
        let store = MemoryStore::new().with(REPO_CONFIG_KEY, "not json");
        let config = Preferences::new(store).load_repository();
        assert_eq!(config, RepositoryConfig::default());
    }

    #[test]
    fn test_submit_trims_and_defaults_branch() {
        let prefs = Preferences::new(MemoryStore::new());
        let mut config = RepositoryConfig::default();

        let outcome = prefs.submit(&mut config, &draft(" Alice ", " Repo ", "")).unwrap();

        assert_eq!(outcome, SubmitOutcome::Committed);
        assert_eq!(config.owner, "Alice");
        assert_eq!(config.name, "Repo");
        assert_eq!(config.branch, "main");
        assert_eq!(
            prefs.store().get(REPO_CONFIG_KEY).as_deref(),
            Some(r#"{"owner":"Alice","name":"Repo","branch":"main"}"#)
        );
    }

    /// Blank owner/name is deliberately silent: no mutation, no write, and
    /// the caller gets `Ignored` so it does not navigate.
    #[test]
    fn test_submit_with_blank_name_is_silent_noop() {
        let prefs = Preferences::new(MemoryStore::new());
        let mut config = RepositoryConfig::default();
        let before = config.clone();

        let outcome = prefs.submit(&mut config, &draft("x", "", "dev")).unwrap();

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(config, before);
        assert_eq!(prefs.store().writes(), 0);
    }

    #[test]
    fn test_submit_write_failure_leaves_config_untouched() {
        let prefs = Preferences::new(MemoryStore::read_only());
        let mut config = RepositoryConfig::default();
        let before = config.clone();

        let result = prefs.submit(&mut config, &draft("alice", "notes", "main"));

        assert_eq!(result, Err(StorageError::WriteFailed));
        assert_eq!(config, before);
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.load_theme(), Theme::Light);

        let junk = Preferences::new(MemoryStore::new().with(THEME_KEY, "solarized"));
        assert_eq!(junk.load_theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let prefs = Preferences::new(MemoryStore::new());
        let dark = prefs.toggle_theme(Theme::Light);
        assert_eq!(dark, Theme::Dark);
        assert_eq!(prefs.store().get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(prefs.load_theme(), Theme::Dark);

        let light = prefs.toggle_theme(dark);
        assert_eq!(light, Theme::Light);
        assert_eq!(prefs.store().get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(prefs.store().writes(), 2);
    }

    #[test]
    fn test_toggle_theme_flips_even_if_write_fails() {
        let prefs = Preferences::new(MemoryStore::read_only());
        assert_eq!(prefs.toggle_theme(Theme::Dark), Theme::Light);
    }
}
