//! Listing header and breadcrumb.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::path::{display_path, parent_of};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Repository title with the settings shortcut.
#[component]
pub fn RepoHeader(repository: String, branch: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::repoHeader>
            <h3 class=css::repoTitle>
                {repository}
                <span class=css::branch>{branch}</span>
            </h3>
            <button class=css::settingsButton on:click=move |_| ctx.open_settings()>
                <Icon icon=ic::SETTINGS />
                " Change Repository"
            </button>
        </div>
    }
}

/// Back action and current path, shown below the root only.
#[component]
pub fn Breadcrumb(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let label = display_path(&path);
    let parent = parent_of(&path).to_string();

    let on_back = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ctx.load_listing(parent.clone());
    };

    view! {
        <nav class=css::breadcrumb>
            <a href="#" class=css::backButton on:click=on_back title="Go to parent directory">
                <Icon icon=ic::BACK />
                " Back"
            </a>
            <span class=css::currentPath>{label}</span>
        </nav>
    }
}
