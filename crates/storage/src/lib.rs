#![forbid(unsafe_code)]

pub mod http;
pub mod repository;

pub use http::{DEFAULT_API_URL, Endpoint, HttpRepository, StorageConfig};
pub use repository::{
    CardRepository, CommunityRepository, DeckRepository, InMemoryRepository, Storage,
    StorageError,
};
