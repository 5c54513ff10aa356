use storage::InMemoryRepository;
use study_core::model::{Community, CommunityId, Deck, DeckId};
use study_core::time::fixed_now;

use super::test_harness::{TEST_GROUP_LABEL, ViewKind, setup_view_harness};
use services::SessionContext;

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

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_collapsed_group_bar() {
    let mut harness = setup_view_harness(ViewKind::Home, seeded_repo());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("CURRENT GROUP"), "missing label in {html}");
    assert!(html.contains("Choose Other"), "missing button in {html}");
    assert!(html.contains(TEST_GROUP_LABEL), "missing fallback in {html}");
    assert!(!html.contains("Choose Other Group"), "chooser open in {html}");
    assert!(html.contains("Add Card"), "missing add card link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_names_active_community() {
    let mut harness = setup_view_harness(ViewKind::Home, seeded_repo());
    harness.session.set_active_community(CommunityId::new(2));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Anatomy Club"), "missing active name in {html}");
    assert!(!html.contains(TEST_GROUP_LABEL), "fallback still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn add_card_view_smoke_renders_form_labels() {
    let mut harness = setup_view_harness(ViewKind::AddCard, seeded_repo());
    harness.rebuild();
    let html = harness.render();

    for label in ["Add Card", "Question:", "Answer:", "Deck:", "Select a deck", "Save"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(
        !html.contains("Please fill in all fields"),
        "error shown before submit in {html}"
    );
    assert!(html.contains("New Deck"), "missing popup trigger in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn add_card_view_smoke_lists_fetched_decks() {
    let mut harness = setup_view_harness(ViewKind::AddCard, seeded_repo());
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    let math = html.find("Math").expect("Math option");
    let history = html.find("History").expect("History option");
    assert!(math < history, "options out of order in {html}");
    assert!(harness.repo.created_cards().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn cards_view_smoke_renders_community_decks() {
    let mut harness = setup_view_harness(ViewKind::Cards("Personal".into()), seeded_repo());
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Personal"), "missing heading in {html}");
    assert!(html.contains("Math"), "missing deck in {html}");
    assert!(html.contains("Humanities"), "missing category in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn card_form_reloads_decks_when_popup_closes() {
    let mut harness = setup_view_harness(ViewKind::CardForm, seeded_repo());
    harness.rebuild();
    harness.settle().await;
    assert_eq!(harness.deck_reads(), 1);

    harness.repo.set_decks(vec![
        Deck::new(DeckId::new(1), "Math", 4.0, "Exact", ""),
        Deck::new(DeckId::new(2), "History", 3.5, "Humanities", ""),
        Deck::new(DeckId::new(3), "Chemistry", 0.0, "Science", ""),
    ]);

    harness.set_popup_open(true);
    harness.settle().await;
    let html = harness.render();
    assert_eq!(harness.deck_reads(), 1, "opening must not reload");
    assert!(html.contains("deck-popup-overlay"), "popup not shown in {html}");
    assert!(!html.contains("Chemistry"), "reloaded early in {html}");

    harness.set_popup_open(false);
    harness.settle().await;
    let html = harness.render();
    assert_eq!(harness.deck_reads(), 2);
    assert!(!html.contains("deck-popup-overlay"), "popup still shown in {html}");
    assert!(html.contains("Chemistry"), "new deck missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn open_selector_renders_one_marked_row_per_community() {
    let mut harness = setup_view_harness(ViewKind::OpenSelector, seeded_repo());
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Choose Other Group"), "chooser closed in {html}");
    assert_eq!(html.matches(r#"class="group-row""#).count(), 2, "{html}");
    assert_eq!(html.matches("group-marker--personal").count(), 1, "{html}");
    assert_eq!(html.matches("group-marker--shared").count(), 1, "{html}");

    let personal = html.find("Personal").expect("Personal row");
    let club = html.find("Anatomy Club").expect("Anatomy Club row");
    assert!(personal < club, "rows out of order in {html}");
    assert_eq!(harness.session.active_community(), None);
}
