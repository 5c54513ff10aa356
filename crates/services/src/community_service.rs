use std::sync::Arc;

use storage::{CommunityRepository, Endpoint};
use study_core::model::Community;

use crate::fetch::{FetchOutcome, fetch_collection};
use crate::session_context::SessionContext;

/// Loads communities and records the user's choice of active community.
#[derive(Clone)]
pub struct CommunityService {
    communities: Arc<dyn CommunityRepository>,
    session: Arc<dyn SessionContext>,
}

impl CommunityService {
    #[must_use]
    pub fn new(communities: Arc<dyn CommunityRepository>, session: Arc<dyn SessionContext>) -> Self {
        Self {
            communities,
            session,
        }
    }

    /// Fetch every community in server order. Failures are logged.
    pub async fn load_communities(&self) -> FetchOutcome<Community> {
        fetch_collection(Endpoint::GetCommunities, self.communities.list_communities()).await
    }

    /// Make `community` the active one for this session.
    pub fn select_community(&self, community: &Community) {
        tracing::info!(community = community.name(), "switching community");
        self.session.set_active_community(community.id());
    }

    #[must_use]
    pub fn session(&self) -> Arc<dyn SessionContext> {
        Arc::clone(&self.session)
    }
}
