//! Top bar component.
//!
//! Page title on the left, theme toggle on the right.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Theme;

stylance::import_crate_style!(css, "src/components/topbar/topbar.module.css");

/// Page header with the theme toggle.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class=css::bar>
            <h1 class=css::title>"Repository Browser"</h1>
            <ThemeToggle />
        </header>
    }
}

/// Light/dark toggle.
///
/// The icon and label always describe the theme one would switch *to*.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_toggle = move |_: leptos::ev::MouseEvent| {
        ctx.toggle_theme();
    };

    view! {
        <button class=css::toggle on:click=on_toggle>
            <span class=css::toggleIcon>
                {move || match ctx.theme.get() {
                    Theme::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
                    Theme::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
                }}
            </span>
            <span class=css::toggleText>{move || ctx.theme.get().toggle_label()}</span>
        </button>
    }
}
