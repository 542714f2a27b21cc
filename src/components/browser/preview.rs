//! Card previews.
//!
//! Each document preview owns its render task. A failure or a slow render
//! only affects its own card.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::core::render_first_page;
use crate::utils::{console, dom};

stylance::import_crate_style!(css, "src/components/browser/card_grid.module.css");

/// Render progress of a document preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PreviewState {
    Loading,
    Ready,
    Unavailable,
}

/// Inline image, loaded lazily so it never holds up other cards.
#[component]
pub fn ImagePreview(url: String, alt: String) -> impl IntoView {
    view! {
        <div class=css::preview>
            <img src=url alt=alt loading="lazy" class=css::image />
        </div>
    }
}

/// First page of a document, rendered into a canvas once mounted.
#[component]
pub fn DocumentPreview(url: String) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let (state, set_state) = signal(PreviewState::Loading);

    // Start the render once, when the canvas is in the DOM.
    let render_url = url.clone();
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        let Some(canvas) = canvas_ref.get() else {
            return false;
        };

        let url = render_url.clone();
        spawn_local(async move {
            match render_first_page(&url, &canvas).await {
                Ok(()) => set_state.set(PreviewState::Ready),
                Err(e) => {
                    console::error(&format!("preview of {} failed: {}", url, e));
                    set_state.set(PreviewState::Unavailable);
                }
            }
        });
        true
    });

    let open_url = url.clone();
    let on_open = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        dom::open_in_new_tab(&open_url);
    };

    let canvas_class = move || {
        if state.get() == PreviewState::Ready {
            css::canvas.to_string()
        } else {
            format!("{} {}", css::canvas, css::hidden)
        }
    };

    view! {
        <div class=css::preview>
            <div class=css::documentContainer>
                <canvas node_ref=canvas_ref class=canvas_class />
                {move || match state.get() {
                    PreviewState::Loading => Some(view! {
                        <div class=css::placeholder>
                            <div class=css::spinner></div>
                            "Loading preview..."
                        </div>
                    }.into_any()),
                    PreviewState::Unavailable => Some(view! {
                        <div class=css::placeholder>
                            <Icon icon=ic::FILE_PDF />
                            <div class=css::previewError>"Preview not available"</div>
                        </div>
                    }.into_any()),
                    PreviewState::Ready => None,
                }}
            </div>
            <div class=css::previewActions>
                <button class=css::actionButton on:click=on_open>
                    <Icon icon=ic::EXTERNAL_LINK />
                    " Open PDF"
                </button>
            </div>
        </div>
    }
}
