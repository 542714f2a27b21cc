//! Diagnostic panel for failed listings.
//!
//! Every listing failure renders this same panel; the cause is only logged.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

const CHECKLIST: &[&str] = &[
    "The repository exists and is public",
    "GitHub Pages is enabled for this repository",
    "The repository owner and name are correct",
];

/// Replaces the whole content region when a listing fails.
#[component]
pub fn ErrorPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::errorPanel role="alert">
            <p class=css::errorTitle>
                <Icon icon=ic::WARNING />
                " Error loading repository. Please check if:"
            </p>
            <ul class=css::errorList>
                {CHECKLIST.iter().map(|hint| view! { <li>{*hint}</li> }).collect_view()}
            </ul>
            <button class=css::settingsButton on:click=move |_| ctx.open_settings()>
                <Icon icon=ic::SETTINGS />
                " Check Repository Settings"
            </button>
        </div>
    }
}
