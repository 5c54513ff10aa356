use std::sync::Arc;

use services::{CardService, CommunityService, DeckService, SessionContext};

/// Services and settings the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    /// Header text shown while no community has been chosen in this session.
    fn default_group_label(&self) -> String;

    fn community_service(&self) -> Arc<CommunityService>;
    fn deck_service(&self) -> Arc<DeckService>;
    fn card_service(&self) -> Arc<CardService>;
    fn session(&self) -> Arc<dyn SessionContext>;
}

#[derive(Clone)]
pub struct AppContext {
    default_group_label: String,

    community_service: Arc<CommunityService>,
    deck_service: Arc<DeckService>,
    card_service: Arc<CardService>,
    session: Arc<dyn SessionContext>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            default_group_label: app.default_group_label(),
            community_service: app.community_service(),
            deck_service: app.deck_service(),
            card_service: app.card_service(),
            session: app.session(),
        }
    }

    #[must_use]
    pub fn default_group_label(&self) -> &str {
        &self.default_group_label
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
