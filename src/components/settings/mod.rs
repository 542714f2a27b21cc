//! Repository settings form.
//!
//! Edits owner, name and branch. Saving commits and persists the record,
//! then reloads from the repository root. Cancel returns to the current
//! listing without fetching.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::models::SettingsDraft;

stylance::import_crate_style!(css, "src/components/settings/settings.module.css");

/// Read the value of the input that fired `ev`.
fn input_value(ev: &ev::Event) -> Option<String> {
    let target = ev.target()?;
    Some(target.unchecked_into::<web_sys::HtmlInputElement>().value())
}

#[component]
pub fn SettingsForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Edits stay local until submit.
    let draft = RwSignal::new(SettingsDraft::from_config(&ctx.config.get_untracked()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_settings(draft.get_untracked());
    };

    let on_cancel = move |_: ev::MouseEvent| ctx.cancel_settings();

    view! {
        <div class=css::container>
            <h3 class=css::heading>"Repository Settings"</h3>
            <form class=css::form on:submit=on_submit>
                <div class=css::group>
                    <label for="repoOwner">"Repository Owner:"</label>
                    <input
                        id="repoOwner"
                        type="text"
                        class=css::input
                        placeholder="e.g., username"
                        required=true
                        prop:value=move || draft.with(|d| d.owner.clone())
                        on:input=move |ev| {
                            if let Some(value) = input_value(&ev) {
                                draft.update(|d| d.owner = value);
                            }
                        }
                    />
                </div>
                <div class=css::group>
                    <label for="repoName">"Repository Name:"</label>
                    <input
                        id="repoName"
                        type="text"
                        class=css::input
                        placeholder="e.g., my-repo"
                        required=true
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| {
                            if let Some(value) = input_value(&ev) {
                                draft.update(|d| d.name = value);
                            }
                        }
                    />
                </div>
                <div class=css::group>
                    <label for="repoBranch">"Branch:"</label>
                    <input
                        id="repoBranch"
                        type="text"
                        class=css::input
                        placeholder="e.g., main"
                        prop:value=move || draft.with(|d| d.branch.clone())
                        on:input=move |ev| {
                            if let Some(value) = input_value(&ev) {
                                draft.update(|d| d.branch = value);
                            }
                        }
                    />
                </div>
                <div class=css::actions>
                    <button type="submit" class=css::button>"Save & Load"</button>
                    <button
                        type="button"
                        class=format!("{} {}", css::button, css::cancel)
                        on:click=on_cancel
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
