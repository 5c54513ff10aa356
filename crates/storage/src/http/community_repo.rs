use study_core::model::Community;

use super::{Endpoint, HttpRepository};
use crate::repository::{CommunityRepository, StorageError};

#[async_trait::async_trait]
impl CommunityRepository for HttpRepository {
    async fn list_communities(&self) -> Result<Vec<Community>, StorageError> {
        self.get_json(Endpoint::GetCommunities).await
    }
}
