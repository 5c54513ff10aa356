use serde::Serialize;
use thiserror::Error;

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Transient card state collected by the authoring form.
///
/// `deck` holds the selected deck identifier exactly as presented in the deck
/// options; an empty string means no deck has been chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub front: String,
    pub back: String,
    pub deck: String,
}

impl CardDraft {
    /// Check that every field is filled in.
    ///
    /// Values are passed through verbatim. Whitespace-only text counts as
    /// filled in.
    ///
    /// # Errors
    ///
    /// Returns `CardDraftError::MissingFields` if any field is empty.
    pub fn validate(&self) -> Result<NewCard, CardDraftError> {
        if self.front.is_empty() || self.back.is_empty() || self.deck.is_empty() {
            return Err(CardDraftError::MissingFields);
        }

        Ok(NewCard {
            front: self.front.clone(),
            back: self.back.clone(),
            deck: self.deck.clone(),
        })
    }
}

/// A validated card ready to be written. Serializes to the `create/card` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCard {
    front: String,
    back: String,
    deck: String,
}

impl NewCard {
    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    #[must_use]
    pub fn deck(&self) -> &str {
        &self.deck
    }
}

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

/// Display text is shown to the user as-is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CardDraftError {
    #[error("Please fill in all fields")]
    MissingFields,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
