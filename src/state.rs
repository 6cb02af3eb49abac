//! Widget state and the controller that drives it.
//!
//! DESIGN
//! ======
//! `QuoteController` is built once at start-up with an injected
//! [`QuoteApi`] and [`QuoteStorage`]. It owns the single `WidgetState` and
//! pushes a snapshot to every subscriber after each change; the view layer
//! subscribes instead of reaching into shared globals.
//!
//! Everything runs on one event loop. State sits behind `RefCell` and is
//! never borrowed across an `.await`.
//!
//! STALE RESPONSES
//! ===============
//! Each network action takes a sequence number when it starts. A response
//! that resolves after a newer action has started is dropped, so a slow
//! request can no longer overwrite a newer quote.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::quotes::{QuoteApi, QuoteError, daily_quote, fallback_quote};
use crate::services::storage::QuoteStorage;
use crate::types::{FavoriteQuote, Quote, Theme};

/// Advisory shown when the embedded fallback quote is displayed.
pub const OFFLINE_ADVISORY: &str = "Using offline quote. Please check your internet connection.";

// =============================================================================
// WIDGET STATE
// =============================================================================

/// Quote-loading lifecycle of the most recent network action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// A fallback quote is shown and `error` holds the advisory.
    LoadedWithWarning,
}

/// Everything the view renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    /// Quote on display; `None` until the first action completes.
    pub quote: Option<Quote>,
    pub phase: LoadPhase,
    /// Advisory message for the user, if any.
    pub error: Option<String>,
    pub favorites: Vec<FavoriteQuote>,
    pub theme: Theme,
}

impl WidgetState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Whether the displayed quote is in the favorites list.
    #[must_use]
    pub fn is_current_favorite(&self) -> bool {
        self.quote
            .as_ref()
            .is_some_and(|q| self.favorites.iter().any(|f| f.matches(&q.text, &q.author)))
    }

    #[must_use]
    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Handle returned by [`QuoteController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&WidgetState)>;

/// Which endpoint sequence a network action runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuoteSource {
    /// today → random
    Daily,
    /// random only
    Random,
}

struct Inner {
    api: Rc<dyn QuoteApi>,
    storage: QuoteStorage,
    state: RefCell<WidgetState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
    request_seq: Cell<u64>,
    clock: fn() -> OffsetDateTime,
}

/// Orchestrates quote fetching, favorites and theme. Cheap to clone.
#[derive(Clone)]
pub struct QuoteController {
    inner: Rc<Inner>,
}

impl QuoteController {
    #[must_use]
    pub fn new(api: Rc<dyn QuoteApi>, storage: QuoteStorage) -> Self {
        Self::with_clock(api, storage, OffsetDateTime::now_utc)
    }

    /// Build with a custom clock, used for favorite timestamps and the
    /// last-fetch date.
    #[must_use]
    pub fn with_clock(api: Rc<dyn QuoteApi>, storage: QuoteStorage, clock: fn() -> OffsetDateTime) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                storage,
                state: RefCell::new(WidgetState::default()),
                listeners: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
                request_seq: Cell::new(0),
                clock,
            }),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> WidgetState {
        self.inner.state.borrow().clone()
    }

    // ---- subscriptions ------------------------------------------------------

    /// Register `listener`; it is called with a snapshot after every change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&WidgetState) + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    fn update(&self, f: impl FnOnce(&mut WidgetState)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        // Listeners may subscribe or call back in; iterate over a copy.
        let listeners: Vec<Listener> = self.inner.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    // ---- lifecycle ----------------------------------------------------------

    /// Load theme and favorites from storage.
    pub fn load_persisted(&self) {
        let theme = self.inner.storage.get_theme();
        let favorites = self.inner.storage.get_favorites();
        debug!(%theme, favorites = favorites.len(), "persisted state loaded");
        self.update(|s| {
            s.theme = theme;
            s.favorites = favorites;
        });
    }

    /// Initial mount. Persisted theme and favorites are applied before this
    /// returns; the returned future fetches today's quote.
    ///
    /// The quote is fetched even when one was already fetched today.
    pub fn mount(&self) -> impl Future<Output = ()> + 'static {
        self.load_persisted();
        debug!(new_day = self.is_new_day(), "widget mounted; fetching today's quote");
        let this = self.clone();
        async move { this.refresh().await }
    }

    /// Whether no quote has been fetched yet on the current calendar day.
    #[must_use]
    pub fn is_new_day(&self) -> bool {
        self.inner.storage.should_fetch_new_quote((self.inner.clock)().date())
    }

    // ---- quote actions ------------------------------------------------------

    /// Today's quote → random quote → embedded fallback.
    pub async fn refresh(&self) {
        self.load(QuoteSource::Daily).await;
    }

    /// Random quote → embedded fallback.
    pub async fn randomize(&self) {
        self.load(QuoteSource::Random).await;
    }

    async fn load(&self, source: QuoteSource) {
        let seq = self.inner.request_seq.get() + 1;
        self.inner.request_seq.set(seq);
        self.update(|s| {
            s.phase = LoadPhase::Loading;
            s.error = None;
        });

        let result = match source {
            QuoteSource::Daily => daily_quote(self.inner.api.as_ref()).await,
            QuoteSource::Random => self.inner.api.random().await,
        };

        if self.inner.request_seq.get() != seq {
            debug!(seq, ?source, "dropping superseded quote response");
            return;
        }

        match first_quote(result) {
            Ok(quote) => {
                info!(author = %quote.author, ?source, "quote loaded");
                if source == QuoteSource::Daily {
                    self.inner.storage.save_last_quote_date((self.inner.clock)().date());
                }
                self.update(|s| {
                    s.quote = Some(quote);
                    s.phase = LoadPhase::Loaded;
                    s.error = None;
                });
            }
            Err(e) => {
                warn!(error = %e, ?source, "quote fetch failed; showing offline quote");
                let quote = fallback_quote();
                self.update(|s| {
                    s.quote = Some(quote);
                    s.phase = LoadPhase::LoadedWithWarning;
                    s.error = Some(OFFLINE_ADVISORY.to_owned());
                });
            }
        }
    }

    // ---- favorites ----------------------------------------------------------

    /// Add the displayed quote to favorites, or remove it if already there.
    /// No-op when no quote is displayed.
    pub fn toggle_favorite(&self) {
        let Some(quote) = self.inner.state.borrow().quote.clone() else {
            return;
        };
        let storage = &self.inner.storage;
        match storage.find_favorite(&quote.text, &quote.author) {
            Some(existing) => {
                storage.remove_favorite(&existing.id);
            }
            None => {
                storage.add_favorite(&quote.text, &quote.author, (self.inner.clock)());
            }
        }
        self.reload_favorites();
    }

    /// Remove the favorite with `id`; unknown ids are ignored.
    pub fn remove_favorite(&self, id: &str) {
        if self.inner.storage.remove_favorite(id) {
            self.reload_favorites();
        }
    }

    fn reload_favorites(&self) {
        let favorites = self.inner.storage.get_favorites();
        self.update(|s| s.favorites = favorites);
    }

    // ---- theme --------------------------------------------------------------

    /// Flip light ↔ dark and persist. Returns the new theme.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.inner.state.borrow().theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn set_theme(&self, theme: Theme) {
        self.inner.storage.save_theme(theme);
        self.update(|s| s.theme = theme);
    }
}

fn first_quote(result: Result<Vec<Quote>, QuoteError>) -> Result<Quote, QuoteError> {
    result?.into_iter().next().ok_or(QuoteError::Empty)
}
