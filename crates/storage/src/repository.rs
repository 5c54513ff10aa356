use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use study_core::model::{Community, Deck, DeckId, NewCard, NewDeck};
use thiserror::Error;

use crate::http::{HttpRepository, StorageConfig};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Read access to the community collection.
#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// List every community, in server order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the request fails or the payload cannot be parsed.
    async fn list_communities(&self) -> Result<Vec<Community>, StorageError>;
}

#[async_trait]
pub trait DeckRepository: Send + Sync {
    /// List the decks currently eligible for new cards, in server order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the request fails or the payload cannot be parsed.
    async fn list_decks(&self) -> Result<Vec<Deck>, StorageError>;

    /// Create a deck.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the request fails.
    async fn create_deck(&self, deck: &NewDeck) -> Result<(), StorageError>;
}

#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Write a new card. The response body is not consumed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the request fails.
    async fn create_card(&self, card: &NewCard) -> Result<(), StorageError>;
}

#[derive(Default)]
struct InMemoryState {
    communities: Vec<Community>,
    decks: Vec<Deck>,
    cards: Vec<NewCard>,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data(communities: Vec<Community>, decks: Vec<Deck>) -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryState {
                communities,
                decks,
                cards: Vec::new(),
            })),
        }
    }

    /// Cards written so far, in write order.
    #[must_use]
    pub fn created_cards(&self) -> Vec<NewCard> {
        self.state
            .lock()
            .map(|guard| guard.cards.clone())
            .unwrap_or_default()
    }

    /// Replace the deck collection, as if another client changed it.
    pub fn set_decks(&self, decks: Vec<Deck>) {
        if let Ok(mut guard) = self.state.lock() {
            guard.decks = decks;
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, InMemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl CommunityRepository for InMemoryRepository {
    async fn list_communities(&self) -> Result<Vec<Community>, StorageError> {
        Ok(self.lock()?.communities.clone())
    }
}

#[async_trait]
impl DeckRepository for InMemoryRepository {
    async fn list_decks(&self) -> Result<Vec<Deck>, StorageError> {
        Ok(self.lock()?.decks.clone())
    }

    async fn create_deck(&self, deck: &NewDeck) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        let next_id = guard
            .decks
            .iter()
            .map(|d| d.id().value())
            .max()
            .unwrap_or(0)
            + 1;
        guard.decks.push(Deck::new(
            DeckId::new(next_id),
            deck.name(),
            0.0,
            deck.category(),
            deck.description(),
        ));
        Ok(())
    }
}

#[async_trait]
impl CardRepository for InMemoryRepository {
    async fn create_card(&self, card: &NewCard) -> Result<(), StorageError> {
        self.lock()?.cards.push(card.clone());
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub communities: Arc<dyn CommunityRepository>,
    pub decks: Arc<dyn DeckRepository>,
    pub cards: Arc<dyn CardRepository>,
}

impl Storage {
    #[must_use]
    pub fn from_in_memory(repo: InMemoryRepository) -> Self {
        let communities: Arc<dyn CommunityRepository> = Arc::new(repo.clone());
        let decks: Arc<dyn DeckRepository> = Arc::new(repo.clone());
        let cards: Arc<dyn CardRepository> = Arc::new(repo);
        Self {
            communities,
            decks,
            cards,
        }
    }

    /// Build a `Storage` that talks to the study API over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the HTTP client cannot be built.
    pub fn http(config: StorageConfig) -> Result<Self, StorageError> {
        let repo = HttpRepository::new(config)?;
        let communities: Arc<dyn CommunityRepository> = Arc::new(repo.clone());
        let decks: Arc<dyn DeckRepository> = Arc::new(repo.clone());
        let cards: Arc<dyn CardRepository> = Arc::new(repo);
        Ok(Self {
            communities,
            decks,
            cards,
        })
    }
}
