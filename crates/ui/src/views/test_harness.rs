use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, CardService, CommunityService, DeckService, InMemorySessionContext,
    SessionContext,
};
use storage::{DeckRepository, InMemoryRepository, Storage, StorageError};
use study_core::model::{Deck, NewDeck};

use crate::context::{UiApp, build_app_context};
use crate::routes::DeckNameQuery;
use crate::views::{AddCardView, CardForm, CardsView, CommunitySelector, HomeView};

pub const TEST_GROUP_LABEL: &str = "Federal University of São Paulo";

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn default_group_label(&self) -> String {
        TEST_GROUP_LABEL.to_string()
    }

    fn community_service(&self) -> Arc<CommunityService> {
        self.services.community_service()
    }

    fn deck_service(&self) -> Arc<DeckService> {
        self.services.deck_service()
    }

    fn card_service(&self) -> Arc<CardService> {
        self.services.card_service()
    }

    fn session(&self) -> Arc<dyn SessionContext> {
        self.services.session()
    }
}

/// Deck reads pass through here so tests can count `list_decks` calls.
struct CountingDecks {
    inner: InMemoryRepository,
    reads: Arc<AtomicUsize>,
}

#[async_trait]
impl DeckRepository for CountingDecks {
    async fn list_decks(&self) -> Result<Vec<Deck>, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.list_decks().await
    }

    async fn create_deck(&self, deck: &NewDeck) -> Result<(), StorageError> {
        self.inner.create_deck(deck).await
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    AddCard,
    /// Card form whose popup flag the test drives through `set_popup_open`.
    CardForm,
    /// Community selector mounted with its chooser already open.
    OpenSelector,
    Cards(String),
}

#[derive(Clone, Default)]
struct HarnessHandles {
    popup_open: Rc<RefCell<Option<Signal<bool>>>>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let view = props.view.clone();
    use_context_provider(move || view);
    let handles = props.handles.clone();
    use_context_provider(move || handles);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::AddCard => rsx! { AddCardView {} },
        ViewKind::CardForm => rsx! { PopupHost {} },
        ViewKind::OpenSelector => rsx! {
            CommunitySelector { fallback_label: TEST_GROUP_LABEL.to_string(), start_open: true }
        },
        ViewKind::Cards(deck_name) => rsx! {
            CardsView { deck_name: DeckNameQuery::new(deck_name) }
        },
    }
}

#[component]
fn PopupHost() -> Element {
    let handles = use_context::<HarnessHandles>();
    let popup_open = use_signal(|| false);
    use_hook(move || *handles.popup_open.borrow_mut() = Some(popup_open));
    rsx! { CardForm { popup_open } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
    pub session: Arc<InMemorySessionContext>,
    handles: HarnessHandles,
    deck_reads: Arc<AtomicUsize>,
}

impl ViewHarness {
    /// `list_decks` calls made so far.
    pub fn deck_reads(&self) -> usize {
        self.deck_reads.load(Ordering::SeqCst)
    }

    /// Flip the popup flag of a `ViewKind::CardForm` harness.
    pub fn set_popup_open(&mut self, open: bool) {
        let registered = *self.handles.popup_open.borrow();
        let mut popup_open = registered.expect("popup host mounted");
        self.dom.in_runtime(|| popup_open.set(open));
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned loads and effects settle.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, repo: InMemoryRepository) -> ViewHarness {
    let session = Arc::new(InMemorySessionContext::default());
    let deck_reads = Arc::new(AtomicUsize::new(0));
    let mut storage = Storage::from_in_memory(repo.clone());
    storage.decks = Arc::new(CountingDecks {
        inner: repo.clone(),
        reads: Arc::clone(&deck_reads),
    });
    let services = AppServices::new(&storage, Arc::clone(&session) as Arc<dyn SessionContext>);
    let app = Arc::new(TestApp { services });
    let handles = HarnessHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        repo,
        session,
        handles,
        deck_reads,
    }
}
