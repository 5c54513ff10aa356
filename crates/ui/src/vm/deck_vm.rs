use study_core::model::Deck;

/// Placeholder shown before a deck is chosen. Its value is empty.
pub const DECK_PLACEHOLDER: &str = "Select a deck";

/// UI-ready representation of a deck for selection controls.
///
/// `value` is the deck identifier as the select element reports it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckOptionVm {
    pub value: String,
    pub label: String,
}

impl DeckOptionVm {
    #[must_use]
    pub fn new(value: String, label: String) -> Self {
        Self { value, label }
    }
}

/// Convert domain decks into selection-friendly view models, keeping order.
#[must_use]
pub fn map_deck_options(decks: &[Deck]) -> Vec<DeckOptionVm> {
    decks
        .iter()
        .map(|deck| DeckOptionVm::new(deck.id().to_string(), deck.name().to_owned()))
        .collect()
}

/// Row for the deck listing page.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckRowVm {
    pub name: String,
    pub category: String,
    pub rating: String,
}

#[must_use]
pub fn map_deck_rows(decks: &[Deck]) -> Vec<DeckRowVm> {
    decks
        .iter()
        .map(|deck| DeckRowVm {
            name: deck.name().to_owned(),
            category: deck.category().to_owned(),
            rating: format!("{:.1}", deck.rating()),
        })
        .collect()
}
