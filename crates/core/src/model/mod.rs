mod card;
mod community;
mod deck;
mod ids;

pub use ids::{CommunityId, DeckId, ParseIdError};

pub use card::{CardDraft, CardDraftError, NewCard};
pub use community::{Community, RESERVED_PERSONAL_COMMUNITY_NAME};
pub use deck::{Deck, DeckError, NewDeck};
