use services::FetchOutcome;
use study_core::model::{Community, CommunityId};

use super::nav_vm::NavTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorPhase {
    Collapsed,
    Choosing,
}

/// Indicator shown next to each community row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowMarker {
    /// The user's private community.
    Personal,
    Shared,
}

impl RowMarker {
    #[must_use]
    pub fn for_community(community: &Community) -> Self {
        if community.is_personal() {
            RowMarker::Personal
        } else {
            RowMarker::Shared
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            RowMarker::Personal => "group-marker group-marker--personal",
            RowMarker::Shared => "group-marker group-marker--shared",
        }
    }
}

/// UI-ready row for the community chooser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommunityRowVm {
    pub id: CommunityId,
    pub name: String,
    pub marker: RowMarker,
    pub target: NavTarget,
}

impl CommunityRowVm {
    #[must_use]
    pub fn from_community(community: &Community) -> Self {
        Self {
            id: community.id(),
            name: community.name().to_owned(),
            marker: RowMarker::for_community(community),
            target: NavTarget::DeckListing {
                community_name: community.name().to_owned(),
            },
        }
    }
}

/// State of the "current group" selector.
///
/// The community list is loaded on mount whatever the phase, so opening the
/// chooser shows whatever was last fetched.
#[derive(Clone, Debug, PartialEq)]
pub struct CommunitySelectorVm {
    phase: SelectorPhase,
    communities: Vec<Community>,
}

impl Default for CommunitySelectorVm {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunitySelectorVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: SelectorPhase::Collapsed,
            communities: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SelectorPhase {
        self.phase
    }

    #[must_use]
    pub fn is_choosing(&self) -> bool {
        self.phase == SelectorPhase::Choosing
    }

    /// "Choose Other" was pressed.
    pub fn open(&mut self) {
        self.phase = SelectorPhase::Choosing;
    }

    /// "Close" was pressed.
    pub fn close(&mut self) {
        self.phase = SelectorPhase::Collapsed;
    }

    pub fn apply_communities(&mut self, outcome: FetchOutcome<Community>) {
        outcome.apply_to(&mut self.communities);
    }

    #[must_use]
    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    #[must_use]
    pub fn rows(&self) -> Vec<CommunityRowVm> {
        self.communities
            .iter()
            .map(CommunityRowVm::from_community)
            .collect()
    }

    /// A row was activated. Collapses the chooser and returns the chosen
    /// community with the navigation target for it.
    ///
    /// Returns `None` when `id` is not in the current list.
    pub fn choose(&mut self, id: CommunityId) -> Option<(Community, NavTarget)> {
        let community = self.communities.iter().find(|c| c.id() == id)?.clone();
        self.phase = SelectorPhase::Collapsed;
        let target = NavTarget::DeckListing {
            community_name: community.name().to_owned(),
        };
        Some((community, target))
    }

    /// Name of `id` in the last fetched list, if present.
    #[must_use]
    pub fn name_of(&self, id: CommunityId) -> Option<&str> {
        self.communities
            .iter()
            .find(|c| c.id() == id)
            .map(Community::name)
    }
}
