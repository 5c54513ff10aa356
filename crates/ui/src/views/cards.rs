use dioxus::prelude::*;

use crate::context::AppContext;
use crate::routes::DeckNameQuery;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{DeckRowVm, map_deck_rows};

/// Deck listing for the community named in the `deck_name` query parameter.
#[component]
pub fn CardsView(deck_name: DeckNameQuery) -> Element {
    let ctx = use_context::<AppContext>();
    let deck_service = ctx.deck_service();

    let resource = use_resource(move || {
        let deck_service = deck_service.clone();
        async move {
            let mut decks = Vec::new();
            deck_service.load_decks().await.apply_to(&mut decks);
            map_deck_rows(&decks)
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "{deck_name.as_str()}" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(rows) => rsx! {
                    if rows.is_empty() {
                        p { "No decks yet." }
                    } else {
                        ul { class: "deck-list",
                            for row in rows {
                                DeckRow { row }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn DeckRow(row: DeckRowVm) -> Element {
    rsx! {
        li { class: "deck-row",
            span { class: "deck-row-name", "{row.name}" }
            span { class: "deck-row-category", "{row.category}" }
            span { class: "deck-row-rating", "{row.rating}" }
        }
    }
}
