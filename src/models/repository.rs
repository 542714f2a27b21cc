//! Repository target configuration.
//!
//! Builds the two URLs the browser needs from owner/name: the contents API
//! listing URL and the GitHub Pages static base.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::{GITHUB_API_HOST, PAGES_HOST_SUFFIX, repository};

// ============================================================================
// RepositoryConfig
// ============================================================================

/// The repository currently being browsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Branch name (persisted and displayed)
    pub branch: String,
    /// Entry names hidden from every listing (exact, case-sensitive)
    pub excluded_names: BTreeSet<String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: repository::DEFAULT_OWNER.to_string(),
            name: repository::DEFAULT_NAME.to_string(),
            branch: repository::DEFAULT_BRANCH.to_string(),
            excluded_names: repository::EXCLUDED_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl RepositoryConfig {
    /// Whether a listing request may be attempted (owner and name set).
    pub fn is_complete(&self) -> bool {
        !self.owner.is_empty() && !self.name.is_empty()
    }

    /// `owner/name` label for headers.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Contents API URL for a directory (empty path = root).
    ///
    /// The path is appended verbatim; no validation is performed.
    pub fn listing_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            GITHUB_API_HOST, self.owner, self.name, path
        )
    }

    /// GitHub Pages root for this repository.
    pub fn static_base_url(&self) -> String {
        format!("https://{}.{}/{}", self.owner, PAGES_HOST_SUFFIX, self.name)
    }

    /// Direct link to a file served by GitHub Pages.
    pub fn file_url(&self, path: &str) -> String {
        format!("{}/{}", self.static_base_url(), path)
    }

    /// Check whether an entry name is hidden.
    #[inline]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.contains(name)
    }

    /// The persisted subset of this config (excluded names are never stored).
    pub fn to_persisted(&self) -> PersistedRepository {
        PersistedRepository {
            owner: Some(self.owner.clone()),
            name: Some(self.name.clone()),
            branch: Some(self.branch.clone()),
        }
    }

    /// Overlay a stored record onto this config.
    ///
    /// Fields missing from the record keep their current values.
    pub fn merge(&mut self, stored: PersistedRepository) {
        if let Some(owner) = stored.owner {
            self.owner = owner;
        }
        if let Some(name) = stored.name {
            self.name = name;
        }
        if let Some(branch) = stored.branch {
            self.branch = branch;
        }
    }
}

// ============================================================================
// Persisted record
// ============================================================================

/// JSON shape stored under the `repoConfig` key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PersistedRepository {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

// ============================================================================
// Settings draft
// ============================================================================

/// Raw values typed into the settings form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl SettingsDraft {
    /// Pre-fill a draft from the live config.
    pub fn from_config(config: &RepositoryConfig) -> Self {
        Self {
            owner: config.owner.clone(),
            name: config.name.clone(),
            branch: config.branch.clone(),
        }
    }

    /// Trim all fields and apply the branch default.
    ///
    /// Returns `None` when owner or name is blank.
    pub fn normalize(&self) -> Option<(String, String, String)> {
        let owner = self.owner.trim();
        let name = self.name.trim();
        let branch = self.branch.trim();

        if owner.is_empty() || name.is_empty() {
            return None;
        }

        let branch = if branch.is_empty() {
            repository::DEFAULT_BRANCH
        } else {
            branch
        };

        Some((owner.to_string(), name.to_string(), branch.to_string()))
    }
}
