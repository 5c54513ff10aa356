use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::CreateGate;

/// Popup for creating a deck without leaving the card form.
///
/// The open flag belongs to the parent. Closing it, whether after "Create" or
/// "Cancel", is what tells the parent to reload its decks.
#[component]
pub fn DeckCreationPopup(is_open: Signal<bool>) -> Element {
    let ctx = use_context::<AppContext>();
    let deck_service = ctx.deck_service();
    let mut is_open = is_open;
    let mut name = use_signal(String::new);
    let mut gate = use_signal(CreateGate::default);

    let create = move |_: MouseEvent| {
        if !gate.write().try_begin() {
            return;
        }
        let value = name.read().to_string();
        let deck_service = deck_service.clone();
        spawn(async move {
            if let Err(err) = deck_service
                .create_deck(&value, String::new(), String::new())
                .await
            {
                tracing::warn!(error = %err, "deck creation failed");
            }
            gate.write().finish();
            name.set(String::new());
            is_open.set(false);
        });
    };

    rsx! {
        button {
            class: "btn deck-popup-trigger",
            r#type: "button",
            onclick: move |_| is_open.set(true),
            "New Deck"
        }
        if is_open() {
            div { class: "deck-popup-overlay",
                div { class: "deck-popup",
                    h3 { class: "deck-popup-title", "New Deck" }
                    input {
                        r#type: "text",
                        id: "deck-name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    div { class: "deck-popup-actions",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| {
                                name.set(String::new());
                                is_open.set(false);
                            },
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: gate.read().is_busy(),
                            onclick: create,
                            "Create"
                        }
                    }
                }
            }
        }
    }
}
