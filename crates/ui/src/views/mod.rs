mod add_card;
mod cards;
mod community_selector;
mod deck_popup;
mod home;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use add_card::{AddCardView, CardForm};
pub use cards::CardsView;
pub use community_selector::CommunitySelector;
pub use deck_popup::DeckCreationPopup;
pub use home::HomeView;
pub use state::{ViewState, view_state_from_resource};
