/// Where a view model wants the router to go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Application root.
    Root,
    /// Deck listing scoped to a community, keyed by its exact name.
    DeckListing { community_name: String },
}

impl NavTarget {
    /// Path form of the target. The community name is not escaped.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            NavTarget::Root => "/".to_string(),
            NavTarget::DeckListing { community_name } => {
                format!("/cards?deck_name={community_name}")
            }
        }
    }
}
