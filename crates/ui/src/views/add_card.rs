use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{CardFormVm, DECK_PLACEHOLDER, DeckRefresh, PopupWatch, SubmitStep, write_card};

use super::deck_popup::DeckCreationPopup;

#[component]
pub fn AddCardView() -> Element {
    let popup_open = use_signal(|| false);
    rsx! {
        CardForm { popup_open }
    }
}

/// Card authoring form. `popup_open` is the deck popup's open flag, owned by
/// the caller.
#[component]
pub fn CardForm(popup_open: Signal<bool>) -> Element {
    let ctx = use_context::<AppContext>();
    let deck_service = ctx.deck_service();
    let card_service = ctx.card_service();
    let navigator = use_navigator();

    let mut form = use_signal(CardFormVm::new);
    let mut popup_watch = use_signal(PopupWatch::default);

    // Loads on mount and again whenever the popup closes.
    use_effect(move || {
        let open = popup_open();
        if popup_watch.write().observe(open) == DeckRefresh::Skip {
            return;
        }
        let deck_service = deck_service.clone();
        spawn(async move {
            let outcome = deck_service.load_decks().await;
            form.write().apply_decks(outcome);
        });
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let step = form.write().begin_submit();
        let SubmitStep::Write(card) = step else {
            return;
        };
        let card_service = card_service.clone();
        spawn(async move {
            write_card(&card_service, &card).await;
            let target = form.write().finish_submit();
            navigator.push(Route::from(target));
        });
    };

    let (front, back, selected_deck, error, options) = {
        let vm = form.read();
        (
            vm.front().to_owned(),
            vm.back().to_owned(),
            vm.selected_deck().to_owned(),
            vm.error().to_owned(),
            vm.deck_options(),
        )
    };

    rsx! {
        div { class: "page page--add-card",
            h1 { class: "page-title", "Add Card" }
            form { class: "card-form", onsubmit: on_submit,
                div { class: "card-form-field",
                    label { r#for: "front", "Question:" }
                    input {
                        r#type: "text",
                        id: "front",
                        value: "{front}",
                        oninput: move |evt| form.write().set_front(evt.value()),
                    }
                }
                div { class: "card-form-field",
                    label { r#for: "back", "Answer:" }
                    input {
                        r#type: "text",
                        id: "back",
                        value: "{back}",
                        oninput: move |evt| form.write().set_back(evt.value()),
                    }
                }
                div { class: "card-form-field card-form-field--inline",
                    label { r#for: "deck", "Deck:" }
                    select {
                        id: "deck",
                        value: "{selected_deck}",
                        onchange: move |evt| form.write().select_deck(evt.value()),
                        option { value: "", "{DECK_PLACEHOLDER}" }
                        for opt in options {
                            option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                        }
                    }
                }
                if !error.is_empty() {
                    p { class: "card-form-error", "{error}" }
                }
                button { class: "btn btn-primary card-form-save", r#type: "submit", "Save" }
            }
            DeckCreationPopup { is_open: popup_open }
        }
    }
}
