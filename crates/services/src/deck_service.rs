use std::sync::Arc;

use storage::{DeckRepository, Endpoint};
use study_core::model::{Deck, NewDeck};

use crate::error::DeckServiceError;
use crate::fetch::{FetchOutcome, fetch_collection};

/// Loads the eligible deck set and creates decks.
#[derive(Clone)]
pub struct DeckService {
    decks: Arc<dyn DeckRepository>,
}

impl DeckService {
    #[must_use]
    pub fn new(decks: Arc<dyn DeckRepository>) -> Self {
        Self { decks }
    }

    /// Fetch decks in server order. Failures are logged.
    pub async fn load_decks(&self) -> FetchOutcome<Deck> {
        fetch_collection(Endpoint::GetDecks, self.decks.list_decks()).await
    }

    /// Create a deck with the given name.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Deck` if the name is blank.
    /// Returns `DeckServiceError::Storage` if the write fails.
    pub async fn create_deck(
        &self,
        name: &str,
        category: String,
        description: String,
    ) -> Result<(), DeckServiceError> {
        let deck = NewDeck::new(name, category, description)?;
        self.decks.create_deck(&deck).await?;
        tracing::info!(deck = deck.name(), "deck created");
        Ok(())
    }
}
