use study_core::model::NewCard;

use super::{Endpoint, HttpRepository};
use crate::repository::{CardRepository, StorageError};

#[async_trait::async_trait]
impl CardRepository for HttpRepository {
    async fn create_card(&self, card: &NewCard) -> Result<(), StorageError> {
        self.post_json(Endpoint::CreateCard, card).await
    }
}
