use std::sync::Arc;

use services::{
    AppServices, CardServiceError, FetchOutcome, InMemorySessionContext, SessionContext,
};
use storage::{InMemoryRepository, Storage};
use study_core::model::{CardDraft, Community, CommunityId, Deck, DeckId};
use study_core::time::fixed_now;

fn seeded_repo() -> InMemoryRepository {
    InMemoryRepository::with_data(
        vec![
            Community::new(CommunityId::new(1), "Personal", "", fixed_now(), 1, 12),
            Community::new(CommunityId::new(2), "Anatomy Club", "", fixed_now(), 40, 800),
        ],
        vec![
            Deck::new(DeckId::new(1), "Math", 4.0, "Exact", ""),
            Deck::new(DeckId::new(2), "History", 3.5, "Humanities", ""),
        ],
    )
}

#[tokio::test]
async fn author_card_into_freshly_created_deck() {
    let repo = seeded_repo();
    let services = AppServices::new(
        &Storage::from_in_memory(repo.clone()),
        Arc::new(InMemorySessionContext::default()),
    );
    let decks = services.deck_service();
    let cards = services.card_service();

    let mut available = Vec::new();
    assert!(decks.load_decks().await.apply_to(&mut available));
    assert_eq!(available.len(), 2);

    decks
        .create_deck("Chemistry", "Science".into(), String::new())
        .await
        .expect("create deck");
    assert!(decks.load_decks().await.apply_to(&mut available));
    let chemistry = available.last().expect("new deck listed");
    assert_eq!(chemistry.name(), "Chemistry");

    let card = cards
        .validate(&CardDraft {
            front: "H2O?".into(),
            back: "Water".into(),
            deck: chemistry.id().to_string(),
        })
        .expect("valid draft");
    cards.create_card(&card).await.expect("create card");

    let written = repo.created_cards();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].deck(), "3");
}

#[tokio::test]
async fn repeated_loads_are_stable() {
    let services = AppServices::new(
        &Storage::from_in_memory(seeded_repo()),
        Arc::new(InMemorySessionContext::default()),
    );
    let decks = services.deck_service();

    let first = decks.load_decks().await;
    let second = decks.load_decks().await;
    assert_eq!(first, second);
    assert!(matches!(first, FetchOutcome::Fetched(ref items) if items.len() == 2));
}

#[tokio::test]
async fn invalid_draft_never_reaches_storage() {
    let repo = seeded_repo();
    let services = AppServices::new(
        &Storage::from_in_memory(repo.clone()),
        Arc::new(InMemorySessionContext::default()),
    );

    let err = services
        .card_service()
        .validate(&CardDraft {
            front: "2+2?".into(),
            back: "4".into(),
            deck: String::new(),
        })
        .unwrap_err();

    assert!(matches!(err, CardServiceError::Draft(_)));
    assert_eq!(err.to_string(), "Please fill in all fields");
    assert!(repo.created_cards().is_empty());
}

#[tokio::test]
async fn selecting_community_updates_session() {
    let services = AppServices::new(
        &Storage::from_in_memory(seeded_repo()),
        Arc::new(InMemorySessionContext::default()),
    );
    let communities = services.community_service();

    let loaded = communities
        .load_communities()
        .await
        .into_option()
        .expect("communities");
    communities.select_community(&loaded[1]);

    assert_eq!(
        services.session().active_community(),
        Some(CommunityId::new(2))
    );
}
