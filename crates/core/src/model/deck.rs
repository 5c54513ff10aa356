use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::DeckId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck name cannot be empty")]
    EmptyName,
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// A named, rated and categorized collection of cards.
///
/// Decks belong to exactly one community on the server; that link is not part
/// of the payload the client receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    id: DeckId,
    #[serde(rename = "deck_name")]
    name: String,
    rating: f64,
    category: String,
    description: String,
}

impl Deck {
    #[must_use]
    pub fn new(
        id: DeckId,
        name: impl Into<String>,
        rating: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            category: category.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ─── NEW DECK ──────────────────────────────────────────────────────────────────
//

/// Request shape for creating a deck on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDeck {
    #[serde(rename = "deck_name")]
    name: String,
    category: String,
    description: String,
}

impl NewDeck {
    /// Build a deck creation request. The name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyName` if the name is blank.
    pub fn new(
        name: &str,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DeckError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::EmptyName);
        }
        Ok(Self {
            name: name.to_owned(),
            category: category.into(),
            description: description.into(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
