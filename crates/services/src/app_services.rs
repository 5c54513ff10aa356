use std::sync::Arc;

use storage::{Storage, StorageConfig, StorageError};

use crate::card_service::CardService;
use crate::community_service::CommunityService;
use crate::deck_service::DeckService;
use crate::session_context::{InMemorySessionContext, SessionContext};

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    community_service: Arc<CommunityService>,
    deck_service: Arc<DeckService>,
    card_service: Arc<CardService>,
    session: Arc<dyn SessionContext>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, session: Arc<dyn SessionContext>) -> Self {
        let community_service = Arc::new(CommunityService::new(
            Arc::clone(&storage.communities),
            Arc::clone(&session),
        ));
        let deck_service = Arc::new(DeckService::new(Arc::clone(&storage.decks)));
        let card_service = Arc::new(CardService::new(Arc::clone(&storage.cards)));

        Self {
            community_service,
            deck_service,
            card_service,
            session,
        }
    }

    /// Build services backed by the HTTP study API.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the HTTP client cannot be built.
    pub fn new_http(config: StorageConfig) -> Result<Self, StorageError> {
        let storage = Storage::http(config)?;
        Ok(Self::new(
            &storage,
            Arc::new(InMemorySessionContext::default()),
        ))
    }

    #[must_use]
    pub fn community_service(&self) -> Arc<CommunityService> {
        Arc::clone(&self.community_service)
    }

    #[must_use]
    pub fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    #[must_use]
    pub fn card_service(&self) -> Arc<CardService> {
        Arc::clone(&self.card_service)
    }

    #[must_use]
    pub fn session(&self) -> Arc<dyn SessionContext> {
        Arc::clone(&self.session)
    }
}
