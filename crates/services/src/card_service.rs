use std::sync::Arc;

use storage::CardRepository;
use study_core::model::{CardDraft, NewCard};

use crate::error::CardServiceError;

/// Validates card drafts and writes them.
#[derive(Clone)]
pub struct CardService {
    cards: Arc<dyn CardRepository>,
}

impl CardService {
    #[must_use]
    pub fn new(cards: Arc<dyn CardRepository>) -> Self {
        Self { cards }
    }

    /// Validate a draft without touching the network.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::Draft` if any field is empty.
    pub fn validate(&self, draft: &CardDraft) -> Result<NewCard, CardServiceError> {
        Ok(draft.validate()?)
    }

    /// Write a validated card.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::Storage` if the write fails.
    pub async fn create_card(&self, card: &NewCard) -> Result<(), CardServiceError> {
        self.cards.create_card(card).await?;
        tracing::info!(deck = card.deck(), "card created");
        Ok(())
    }
}
