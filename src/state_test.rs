use std::collections::VecDeque;

use time::macros::datetime;
use tokio::sync::oneshot;

use super::*;
use crate::quotes::is_fallback_quote;
use crate::services::storage::{KeyValueStore, LAST_QUOTE_DATE_KEY, MemoryStore, THEME_KEY};

// =============================================================================
// MockApi
// =============================================================================

type Scripted = Result<Vec<Quote>, QuoteError>;

/// Per-endpoint queues of scripted responses. An exhausted queue answers
/// with `Status { 503 }`.
#[derive(Default)]
struct MockApi {
    today: RefCell<VecDeque<Scripted>>,
    random: RefCell<VecDeque<Scripted>>,
    /// When non-empty, `random()` waits on these instead of `random`.
    delayed_random: RefCell<VecDeque<oneshot::Receiver<Scripted>>>,
    calls: RefCell<Vec<&'static str>>,
}

impl MockApi {
    fn with(today: Vec<Scripted>, random: Vec<Scripted>) -> Self {
        Self { today: RefCell::new(today.into()), random: RefCell::new(random.into()), ..Self::default() }
    }
}

fn unavailable() -> Scripted {
    Err(QuoteError::Status { status: 503 })
}

#[async_trait::async_trait(?Send)]
impl QuoteApi for MockApi {
    async fn today(&self) -> Result<Vec<Quote>, QuoteError> {
        self.calls.borrow_mut().push("today");
        let next = self.today.borrow_mut().pop_front();
        next.unwrap_or_else(unavailable)
    }

    async fn random(&self) -> Result<Vec<Quote>, QuoteError> {
        self.calls.borrow_mut().push("random");
        let delayed = self.delayed_random.borrow_mut().pop_front();
        if let Some(rx) = delayed {
            return rx.await.unwrap_or_else(|_| unavailable());
        }
        let next = self.random.borrow_mut().pop_front();
        next.unwrap_or_else(unavailable)
    }

    async fn random_batch(&self, _count: u32) -> Result<Vec<Quote>, QuoteError> {
        unavailable()
    }
}

fn fixed_clock() -> OffsetDateTime {
    datetime!(2026-10-18 09:00 UTC)
}

fn controller(api: MockApi) -> (Rc<MockApi>, Rc<MemoryStore>, QuoteController) {
    let api = Rc::new(api);
    let store = Rc::new(MemoryStore::new());
    let ctrl = QuoteController::with_clock(api.clone(), QuoteStorage::new(store.clone()), fixed_clock);
    (api, store, ctrl)
}

fn today_calls(api: &MockApi) -> usize {
    api.calls.borrow().iter().filter(|c| **c == "today").count()
}

fn ok(text: &str, author: &str) -> Scripted {
    Ok(vec![Quote::new(text, author)])
}

// =============================================================================
// WidgetState
// =============================================================================

#[test]
fn widget_state_default_is_idle_light_and_empty() {
    let state = WidgetState::default();
    assert_eq!(state.phase, LoadPhase::Idle);
    assert!(!state.is_loading());
    assert!(state.quote.is_none());
    assert!(state.error.is_none());
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.favorites_count(), 0);
    assert!(!state.is_current_favorite());
}

// =============================================================================
// refresh / mount
// =============================================================================

#[tokio::test]
async fn refresh_shows_first_quote_without_warning() {
    let (api, _, ctrl) = controller(MockApi::with(
        vec![Ok(vec![Quote::new("first", "X"), Quote::new("second", "Y")])],
        vec![],
    ));
    ctrl.refresh().await;

    let state = ctrl.snapshot();
    assert_eq!(state.quote, Some(Quote::new("first", "X")));
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert!(state.error.is_none());
    assert_eq!(*api.calls.borrow(), vec!["today"]);
}

#[tokio::test]
async fn today_500_falls_back_to_random() {
    let (api, _, ctrl) = controller(MockApi::with(vec![Err(QuoteError::Status { status: 500 })], vec![ok("A", "B")]));
    ctrl.refresh().await;

    let state = ctrl.snapshot();
    assert_eq!(state.quote, Some(Quote::new("A", "B")));
    assert!(state.error.is_none());
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert_eq!(*api.calls.borrow(), vec!["today", "random"]);
}

#[tokio::test]
async fn both_endpoints_failing_shows_fallback_with_advisory() {
    let (_, _, ctrl) = controller(MockApi::with(vec![unavailable()], vec![Err(QuoteError::Empty)]));
    ctrl.refresh().await;

    let state = ctrl.snapshot();
    assert!(is_fallback_quote(state.quote.as_ref().unwrap()));
    assert_eq!(state.error.as_deref(), Some(OFFLINE_ADVISORY));
    assert!(state.error.as_deref().unwrap().starts_with("Using offline quote"));
    assert_eq!(state.phase, LoadPhase::LoadedWithWarning);
}

#[tokio::test]
async fn successful_refresh_records_fetch_date() {
    let (_, store, ctrl) = controller(MockApi::with(vec![ok("A", "B")], vec![]));
    assert!(ctrl.is_new_day());
    ctrl.refresh().await;
    assert_eq!(store.raw(LAST_QUOTE_DATE_KEY).as_deref(), Some("2026-10-18"));
    assert!(!ctrl.is_new_day());
}

#[tokio::test]
async fn fallback_does_not_record_fetch_date() {
    let (_, store, ctrl) = controller(MockApi::default());
    ctrl.refresh().await;
    assert_eq!(store.raw(LAST_QUOTE_DATE_KEY), None);
}

#[tokio::test]
async fn success_after_fallback_clears_advisory() {
    let (_, _, ctrl) = controller(MockApi::with(vec![unavailable(), ok("A", "B")], vec![unavailable()]));
    ctrl.refresh().await;
    assert!(ctrl.snapshot().error.is_some());

    ctrl.refresh().await;
    let state = ctrl.snapshot();
    assert!(state.error.is_none());
    assert_eq!(state.phase, LoadPhase::Loaded);
}

#[tokio::test]
async fn mount_loads_persisted_state_then_quote() {
    let (_, store, ctrl) = controller(MockApi::with(vec![ok("A", "B")], vec![]));
    store.set_item(THEME_KEY, "dark").unwrap();
    QuoteStorage::new(store.clone()).add_favorite("Saved", "S", fixed_clock());

    ctrl.mount().await;

    let state = ctrl.snapshot();
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.favorites.len(), 1);
    assert_eq!(state.quote, Some(Quote::new("A", "B")));
}

#[tokio::test]
async fn mount_applies_persisted_state_before_fetching() {
    let (api, store, ctrl) = controller(MockApi::with(vec![ok("A", "B")], vec![]));
    store.set_item(THEME_KEY, "dark").unwrap();

    let fetch = ctrl.mount();
    let state = ctrl.snapshot();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.quote, None);
    assert_eq!(today_calls(&api), 0);

    fetch.await;
    assert_eq!(today_calls(&api), 1);
    assert_eq!(ctrl.snapshot().quote, Some(Quote::new("A", "B")));
}

#[tokio::test]
async fn mount_fetches_even_when_already_fetched_today() {
    let (api, _, ctrl) = controller(MockApi::with(vec![ok("A", "B"), ok("C", "D")], vec![]));
    ctrl.mount().await;
    assert!(!ctrl.is_new_day());

    ctrl.mount().await;
    assert_eq!(today_calls(&api), 2);
    assert_eq!(ctrl.snapshot().quote, Some(Quote::new("C", "D")));
}

#[tokio::test]
async fn listeners_see_loading_then_loaded() {
    let (_, _, ctrl) = controller(MockApi::with(vec![ok("A", "B")], vec![]));
    let phases = Rc::new(RefCell::new(Vec::new()));
    let seen = phases.clone();
    ctrl.subscribe(move |s| seen.borrow_mut().push(s.phase));

    ctrl.refresh().await;
    assert_eq!(*phases.borrow(), vec![LoadPhase::Loading, LoadPhase::Loaded]);
}

// =============================================================================
// randomize
// =============================================================================

#[tokio::test]
async fn randomize_skips_today_endpoint() {
    let (api, _, ctrl) = controller(MockApi::with(vec![ok("today", "T")], vec![ok("random", "R")]));
    ctrl.randomize().await;
    assert_eq!(ctrl.snapshot().quote, Some(Quote::new("random", "R")));
    assert_eq!(*api.calls.borrow(), vec!["random"]);
}

#[tokio::test]
async fn randomize_failure_uses_fallback() {
    let (_, store, ctrl) = controller(MockApi::default());
    ctrl.randomize().await;
    let state = ctrl.snapshot();
    assert!(is_fallback_quote(state.quote.as_ref().unwrap()));
    assert_eq!(state.error.as_deref(), Some(OFFLINE_ADVISORY));
    assert_eq!(store.raw(LAST_QUOTE_DATE_KEY), None);
}

#[tokio::test]
async fn superseded_response_is_dropped() {
    let (tx_first, rx_first) = oneshot::channel();
    let (tx_second, rx_second) = oneshot::channel();
    let api = MockApi::default();
    api.delayed_random.borrow_mut().extend([rx_first, rx_second]);
    let (_, _, ctrl) = controller(api);

    let first = ctrl.randomize();
    let second = ctrl.randomize();
    let resolve = async {
        let _ = tx_second.send(ok("newer", "N"));
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        let _ = tx_first.send(ok("stale", "S"));
    };
    tokio::join!(first, second, resolve);

    let state = ctrl.snapshot();
    assert_eq!(state.quote, Some(Quote::new("newer", "N")));
    assert_eq!(state.phase, LoadPhase::Loaded);
}

// =============================================================================
// favorites
// =============================================================================

#[tokio::test]
async fn toggle_favorite_adds_then_removes() {
    let (_, _, ctrl) = controller(MockApi::with(vec![ok("A", "B")], vec![]));
    ctrl.refresh().await;

    ctrl.toggle_favorite();
    let state = ctrl.snapshot();
    assert_eq!(state.favorites.len(), 1);
    assert!(state.is_current_favorite());

    ctrl.toggle_favorite();
    let state = ctrl.snapshot();
    assert!(state.favorites.is_empty());
    assert!(!state.is_current_favorite());
}

#[test]
fn toggle_favorite_without_quote_is_noop() {
    let (_, store, ctrl) = controller(MockApi::default());
    ctrl.toggle_favorite();
    assert!(ctrl.snapshot().favorites.is_empty());
    assert_eq!(store.raw(crate::services::storage::FAVORITES_KEY), None);
}

#[tokio::test]
async fn favoriting_same_quote_twice_adds_one_entry() {
    let (_, store, ctrl) = controller(MockApi::with(vec![ok("A", "B")], vec![ok("A", "B")]));
    let storage = QuoteStorage::new(store.clone());

    ctrl.refresh().await;
    ctrl.toggle_favorite();
    // A second add of the same pair straight through storage is a no-op.
    storage.add_favorite("A", "B", fixed_clock());
    ctrl.randomize().await;

    assert_eq!(storage.get_favorites().len(), 1);
    assert!(ctrl.snapshot().is_current_favorite());
}

#[tokio::test]
async fn remove_favorite_by_id_updates_state() {
    let (_, store, ctrl) = controller(MockApi::with(vec![ok("A", "B")], vec![]));
    let storage = QuoteStorage::new(store.clone());
    let keep = storage.add_favorite("Keep", "K", fixed_clock());
    let removed = storage.add_favorite("Drop", "D", fixed_clock());
    ctrl.load_persisted();

    ctrl.remove_favorite(&removed.id);
    assert_eq!(ctrl.snapshot().favorites, vec![keep.clone()]);

    ctrl.remove_favorite("missing");
    assert_eq!(ctrl.snapshot().favorites, vec![keep]);
}

// =============================================================================
// theme
// =============================================================================

#[test]
fn toggle_theme_flips_and_persists() {
    let (_, store, ctrl) = controller(MockApi::default());
    let storage = QuoteStorage::new(store.clone());

    assert_eq!(ctrl.toggle_theme(), Theme::Dark);
    assert_eq!(storage.get_theme(), Theme::Dark);
    assert_eq!(ctrl.snapshot().theme, Theme::Dark);

    assert_eq!(ctrl.toggle_theme(), Theme::Light);
    assert_eq!(storage.get_theme(), Theme::Light);
}

// =============================================================================
// subscriptions
// =============================================================================

#[test]
fn unsubscribe_stops_notifications() {
    let (_, _, ctrl) = controller(MockApi::default());
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let id = ctrl.subscribe(move |_| c.set(c.get() + 1));

    ctrl.set_theme(Theme::Dark);
    assert_eq!(count.get(), 1);

    assert!(ctrl.unsubscribe(id));
    assert!(!ctrl.unsubscribe(id));
    ctrl.set_theme(Theme::Light);
    assert_eq!(count.get(), 1);
}

#[test]
fn listener_may_read_controller_during_notify() {
    let (_, _, ctrl) = controller(MockApi::default());
    let observed = Rc::new(RefCell::new(None));
    let inner = ctrl.clone();
    let slot = observed.clone();
    ctrl.subscribe(move |_| *slot.borrow_mut() = Some(inner.snapshot().theme));

    ctrl.set_theme(Theme::Dark);
    assert_eq!(*observed.borrow(), Some(Theme::Dark));
}
