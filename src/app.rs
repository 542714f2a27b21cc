//! Root application module.
//!
//! Contains the main App component and the AppContext definition, which
//! holds the browser's reactive state and every user-triggered action.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Browser;
use crate::components::topbar::TopBar;
use crate::core::storage::LocalStore;
use crate::core::{
    GitHubContents, ListingState, Preferences, RequestSequencer, SubmitOutcome, load_if_current,
};
use crate::models::path::display_path;
use crate::models::{RepositoryConfig, SettingsDraft, Theme};
use crate::utils::{console, dom};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Repository being browsed.
    pub config: RwSignal<RepositoryConfig>,
    /// Content region state (loading / loaded / failed).
    pub listing: RwSignal<ListingState>,
    /// Whether the settings form replaces the content region.
    pub settings_open: RwSignal<bool>,
    /// Active color theme.
    pub theme: RwSignal<Theme>,
    /// Latest listing request; older responses are dropped.
    requests: StoredValue<RequestSequencer>,
}

fn preferences() -> Preferences<LocalStore> {
    Preferences::new(LocalStore)
}

impl AppContext {
    /// Creates the context from persisted preferences.
    ///
    /// The listing starts in the loading state for root; call
    /// [`AppContext::load_listing`] to issue the first read.
    pub fn new() -> Self {
        let prefs = preferences();
        Self {
            config: RwSignal::new(prefs.load_repository()),
            listing: RwSignal::new(ListingState::Loading),
            settings_open: RwSignal::new(false),
            theme: RwSignal::new(prefs.load_theme()),
            requests: StoredValue::new(RequestSequencer::default()),
        }
    }

    /// List a directory of the configured repository (empty = root).
    ///
    /// Shows the loading indicator immediately, then replaces the content
    /// region with the result unless a newer navigation started meanwhile.
    pub fn load_listing(&self, path: impl Into<String>) {
        let path = path.into();
        let Some(requests) = self.requests.try_get_value() else {
            return;
        };

        self.listing.set(ListingState::Loading);

        let config = self.config.get_untracked();
        let region = self.listing;
        spawn_local(async move {
            let Some(result) = load_if_current(&requests, &GitHubContents, &config, &path).await
            else {
                console::info(&format!(
                    "discarding stale listing for {}",
                    display_path(&path)
                ));
                return;
            };

            let state = match result {
                Ok(listing) => ListingState::Loaded(listing),
                Err(e) => {
                    console::error(&format!(
                        "failed to list {} of {}: {}",
                        display_path(&path),
                        config.slug(),
                        e
                    ));
                    ListingState::Failed(e)
                }
            };
            region.set(state);
        });
    }

    /// Show the settings form in place of the listing.
    pub fn open_settings(&self) {
        self.settings_open.set(true);
    }

    /// Close the settings form without changes.
    ///
    /// The preserved listing state reappears; nothing is re-fetched.
    pub fn cancel_settings(&self) {
        self.settings_open.set(false);
    }

    /// Apply a settings submission.
    ///
    /// On commit the browser resets to the repository root. Blank owner or
    /// name leaves everything as it is, including the open form.
    pub fn submit_settings(&self, draft: SettingsDraft) {
        let mut config = self.config.get_untracked();
        match preferences().submit(&mut config, &draft) {
            Ok(SubmitOutcome::Committed) => {
                console::info(&format!("switching to {}", config.slug()));
                self.config.set(config);
                self.settings_open.set(false);
                self.load_listing(String::new());
            }
            Ok(SubmitOutcome::Ignored) => {}
            Err(e) => console::error(&format!("repository settings not saved: {}", e)),
        }
    }

    /// Flip the color theme and persist it.
    pub fn toggle_theme(&self) {
        let next = preferences().toggle_theme(self.theme.get_untracked());
        self.theme.set(next);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Keeps the document theme attribute in sync with the theme signal
/// - Issues the initial root listing
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    Effect::new(move || dom::apply_theme(ctx.theme.get()));

    ctx.load_listing(String::new());

    view! {
        <TopBar />
        <main class="container">
            <Browser />
        </main>
    }
}
