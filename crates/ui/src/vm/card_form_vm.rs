use services::{CardService, FetchOutcome};
use study_core::model::{CardDraft, Deck, NewCard};

use super::deck_vm::{DeckOptionVm, map_deck_options};
use super::nav_vm::NavTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

/// What the view should do after the submit button was pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// Validation failed; the error message is set and nothing is written.
    Rejected,
    /// A write is already in flight.
    Busy,
    /// Write this card, then call [`CardFormVm::finish_submit`].
    Write(NewCard),
}

/// Field state of the "Add Card" form.
///
/// The error message is only ever overwritten by the next validation failure;
/// neither a write attempt nor editing a field clears it.
#[derive(Clone, Debug, PartialEq)]
pub struct CardFormVm {
    draft: CardDraft,
    error: String,
    decks: Vec<Deck>,
    submit_state: SubmitState,
}

impl Default for CardFormVm {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFormVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: CardDraft::default(),
            error: String::new(),
            decks: Vec::new(),
            submit_state: SubmitState::Idle,
        }
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.draft.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.draft.back
    }

    #[must_use]
    pub fn selected_deck(&self) -> &str {
        &self.draft.deck
    }

    /// Empty when there is nothing to show.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[must_use]
    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn set_front(&mut self, value: String) {
        self.draft.front = value;
    }

    pub fn set_back(&mut self, value: String) {
        self.draft.back = value;
    }

    /// `value` is the option value; empty means the placeholder was picked.
    pub fn select_deck(&mut self, value: String) {
        self.draft.deck = value;
    }

    pub fn apply_decks(&mut self, outcome: FetchOutcome<Deck>) {
        outcome.apply_to(&mut self.decks);
    }

    #[must_use]
    pub fn deck_options(&self) -> Vec<DeckOptionVm> {
        map_deck_options(&self.decks)
    }

    /// Validate the current fields.
    ///
    /// The deck list is not consulted: a selection made before a reload is
    /// submitted as-is.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.submit_state == SubmitState::Submitting {
            return SubmitStep::Busy;
        }

        match self.draft.validate() {
            Ok(card) => {
                self.submit_state = SubmitState::Submitting;
                SubmitStep::Write(card)
            }
            Err(err) => {
                self.error = err.to_string();
                SubmitStep::Rejected
            }
        }
    }

    /// The write call resolved, whatever its outcome.
    pub fn finish_submit(&mut self) -> NavTarget {
        self.submit_state = SubmitState::Idle;
        NavTarget::Root
    }
}

/// Write `card`, logging a failure instead of returning it.
///
/// The form navigates away once this resolves, even when the write failed.
pub async fn write_card(cards: &CardService, card: &NewCard) {
    if let Err(err) = cards.create_card(card).await {
        tracing::error!(error = %err, deck = card.deck(), "card write failed");
    }
}
