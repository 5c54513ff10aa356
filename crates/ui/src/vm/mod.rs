mod card_form_vm;
mod community_vm;
mod deck_popup_vm;
mod deck_vm;
mod nav_vm;

pub use card_form_vm::{CardFormVm, SubmitState, SubmitStep, write_card};
pub use community_vm::{CommunityRowVm, CommunitySelectorVm, RowMarker, SelectorPhase};
pub use deck_popup_vm::{CreateGate, DeckRefresh, PopupWatch};
pub use deck_vm::{DECK_PLACEHOLDER, DeckOptionVm, DeckRowVm, map_deck_options, map_deck_rows};
pub use nav_vm::NavTarget;
