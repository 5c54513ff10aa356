use study_core::model::{Deck, NewDeck};

use super::{Endpoint, HttpRepository};
use crate::repository::{DeckRepository, StorageError};

#[async_trait::async_trait]
impl DeckRepository for HttpRepository {
    async fn list_decks(&self) -> Result<Vec<Deck>, StorageError> {
        self.get_json(Endpoint::GetDecks).await
    }

    async fn create_deck(&self, deck: &NewDeck) -> Result<(), StorageError> {
        self.post_json(Endpoint::CreateDeck, deck).await
    }
}
