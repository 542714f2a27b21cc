//! Card grid for a directory listing.
//!
//! Cards are built synchronously from the filtered listing. Image previews
//! load lazily through the `<img>` tag; document previews start their own
//! render task once mounted.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::preview::{DocumentPreview, ImagePreview};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Card, CardKind, CardPreview};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser/card_grid.module.css");

/// Get icon for a card based on its type
fn card_icon(card: &Card) -> IconData {
    match &card.kind {
        CardKind::Folder => ic::FOLDER,
        CardKind::File(file) => ic::file_icon(file.file_kind),
    }
}

/// Grid of entry cards. Rendered in API order.
#[component]
pub fn CardGrid(cards: Vec<Card>) -> impl IntoView {
    view! {
        <div class=css::grid role="list">
            {cards
                .into_iter()
                .map(|card| view! { <CardItem card=card /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn CardItem(card: Card) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = card_icon(&card);
    let badge = card.badge();
    let is_folder = card.is_folder();
    let click_url = card.click_url().map(str::to_string);
    let clickable = is_folder || click_url.is_some();
    let path = card.path.clone();

    // Folder: re-list. File: open the Pages URL. Documents: no-op (the
    // preview has its own open button).
    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_folder {
            ctx.load_listing(path.clone());
        } else if let Some(url) = &click_url {
            dom::open_in_new_tab(url);
        }
    };

    let preview = match card.kind {
        CardKind::Folder => None,
        CardKind::File(file) => Some(match file.preview {
            CardPreview::Image { url } => view! {
                <ImagePreview url=url alt=card.name.clone() />
            }
            .into_any(),
            CardPreview::Document { url } => view! { <DocumentPreview url=url /> }.into_any(),
            CardPreview::Glyph => view! {
                <div class=css::placeholder>
                    <Icon icon=icon />
                </div>
            }
            .into_any(),
        }),
    };

    let item_class = if clickable {
        format!("{} {}", css::card, css::clickable)
    } else {
        css::card.to_string()
    };

    let aria_label = if is_folder {
        format!("Folder: {}", card.name)
    } else {
        format!("File: {}", card.name)
    };

    view! {
        <div class=item_class on:click=handle_click role="listitem" aria-label=aria_label>
            <div class=css::cardTitle>
                <span class=css::cardIcon aria-hidden="true"><Icon icon=icon /></span>
                <span class=css::cardName>{card.name}</span>
            </div>
            {preview}
            <span class=css::badge>{badge}</span>
        </div>
    }
}
