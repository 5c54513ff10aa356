use std::sync::Mutex;

use study_core::model::CommunityId;

/// Holder of the user's active community.
///
/// The selection lives outside the UI components; they only call the setter.
pub trait SessionContext: Send + Sync {
    fn active_community(&self) -> Option<CommunityId>;
    fn set_active_community(&self, id: CommunityId);
}

/// Process-local session context.
#[derive(Debug, Default)]
pub struct InMemorySessionContext {
    active: Mutex<Option<CommunityId>>,
}

impl SessionContext for InMemorySessionContext {
    fn active_community(&self) -> Option<CommunityId> {
        self.active.lock().map(|guard| *guard).unwrap_or(None)
    }

    fn set_active_community(&self, id: CommunityId) {
        match self.active.lock() {
            Ok(mut guard) => *guard = Some(id),
            Err(poisoned) => *poisoned.into_inner() = Some(id),
        }
        tracing::debug!(community_id = %id, "active community changed");
    }
}
