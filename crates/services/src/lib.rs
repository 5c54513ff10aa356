#![forbid(unsafe_code)]

pub mod app_services;
pub mod card_service;
pub mod community_service;
pub mod deck_service;
pub mod error;
pub mod fetch;
pub mod session_context;

pub use app_services::AppServices;
pub use card_service::CardService;
pub use community_service::CommunityService;
pub use deck_service::DeckService;
pub use error::{CardServiceError, DeckServiceError};
pub use fetch::{FetchOutcome, fetch_collection};
pub use session_context::{InMemorySessionContext, SessionContext};
