//! Main browser component.
//!
//! The content region is re-rendered wholesale on every state change:
//! settings form, loading indicator, listing, or error panel.

use leptos::prelude::*;

use super::header::{Breadcrumb, RepoHeader};
use super::{CardGrid, ErrorPanel};
use crate::app::AppContext;
use crate::components::settings::SettingsForm;
use crate::core::ListingState;
use crate::models::Listing;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Repository browser content region.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::content>
            {move || {
                if ctx.settings_open.get() {
                    return view! { <SettingsForm /> }.into_any();
                }

                match ctx.listing.get() {
                    ListingState::Loading => view! {
                        <p class=css::loading>"Loading repository contents..."</p>
                    }.into_any(),
                    ListingState::Loaded(listing) => view! {
                        <ListingView listing=listing />
                    }.into_any(),
                    ListingState::Failed(_) => view! { <ErrorPanel /> }.into_any(),
                }
            }}
        </section>
    }
}

/// A loaded directory: optional breadcrumb, header, card grid.
#[component]
fn ListingView(listing: Listing) -> impl IntoView {
    let breadcrumb = (!listing.is_root()).then(|| {
        let path = listing.path.clone();
        view! { <Breadcrumb path=path /> }
    });

    view! {
        {breadcrumb}
        <RepoHeader repository=listing.repository branch=listing.branch />
        <CardGrid cards=listing.cards />
    }
}
