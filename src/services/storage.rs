//! Storage service: favorites, theme and last-fetch date in a key-value store.
//!
//! DESIGN
//! ======
//! Three independent keys, each a whole-value read-modify-write. There is no
//! schema version and no cross-key transaction; each key is updated on its
//! own and idempotently.
//!
//! ERROR HANDLING
//! ==============
//! Persistence is best-effort. Reads that fail to access or parse fall back to
//! the empty list, the light theme or no date, and are logged. Writes log
//! failures and return normally.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::{debug, warn};

use crate::types::{FavoriteQuote, Theme};

pub const FAVORITES_KEY: &str = "quote-app-favorites";
pub const THEME_KEY: &str = "quote-app-theme";
pub const LAST_QUOTE_DATE_KEY: &str = "quote-app-last-date";

/// Calendar-day format used for the last-fetch date.
pub const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is available (private browsing, SSR, sandboxed frame).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected the read or write (quota, security policy).
    #[error("storage access failed: {0}")]
    Access(String),

    /// A value could not be encoded or decoded.
    #[error("storage value invalid: {0}")]
    Serialize(String),
}

// =============================================================================
// KEY-VALUE STORE
// =============================================================================

/// Flat string key-value store, modeled on browser `localStorage`.
///
/// Methods take `&self`; implementations use interior mutability.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for `key`, bypassing the trait.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// QUOTE STORAGE
// =============================================================================

/// Typed wrapper over a [`KeyValueStore`] for the widget's three keys.
///
/// Clones share the backend and the last-issued favorite id.
#[derive(Clone)]
pub struct QuoteStorage {
    store: Rc<dyn KeyValueStore>,
    /// Highest favorite id handed out by this storage, including removed ones.
    last_issued_id: Rc<Cell<i64>>,
}

impl QuoteStorage {
    #[must_use]
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store, last_issued_id: Rc::new(Cell::new(0)) }
    }

    // ---- favorites ----------------------------------------------------------

    /// Saved favorites, or an empty list if absent or unreadable.
    #[must_use]
    pub fn get_favorites(&self) -> Vec<FavoriteQuote> {
        let raw = match self.store.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "loading favorites failed");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "stored favorites are not valid JSON; ignoring");
            Vec::new()
        })
    }

    pub fn save_favorites(&self, favorites: &[FavoriteQuote]) {
        let raw = match serde_json::to_string(favorites) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "encoding favorites failed");
                return;
            }
        };
        if let Err(e) = self.store.set_item(FAVORITES_KEY, &raw) {
            warn!(error = %e, "saving favorites failed");
        }
    }

    /// Add `(text, author)` to favorites unless an equal entry exists.
    ///
    /// Returns the stored entry: the new one, or the one already present.
    pub fn add_favorite(&self, text: &str, author: &str, now: OffsetDateTime) -> FavoriteQuote {
        let mut favorites = self.get_favorites();
        if let Some(existing) = favorites.iter().find(|f| f.matches(text, author)) {
            debug!(id = %existing.id, "quote already in favorites");
            return existing.clone();
        }

        let id = next_favorite_id(&favorites, self.last_issued_id.get(), now);
        self.last_issued_id.set(id);
        let favorite = FavoriteQuote {
            id: id.to_string(),
            text: text.to_owned(),
            author: author.to_owned(),
            date_added: now.format(&Rfc3339).unwrap_or_default(),
        };
        favorites.push(favorite.clone());
        self.save_favorites(&favorites);
        debug!(id = %favorite.id, total = favorites.len(), "favorite added");
        favorite
    }

    /// Remove the favorite with `id`. Returns whether an entry was removed.
    pub fn remove_favorite(&self, id: &str) -> bool {
        let mut favorites = self.get_favorites();
        let before = favorites.len();
        favorites.retain(|f| f.id != id);
        if favorites.len() == before {
            return false;
        }
        self.save_favorites(&favorites);
        true
    }

    #[must_use]
    pub fn find_favorite(&self, text: &str, author: &str) -> Option<FavoriteQuote> {
        self.get_favorites().into_iter().find(|f| f.matches(text, author))
    }

    #[must_use]
    pub fn is_favorite(&self, text: &str, author: &str) -> bool {
        self.find_favorite(text, author).is_some()
    }

    // ---- theme --------------------------------------------------------------

    /// Saved theme; light when absent, unknown or unreadable.
    #[must_use]
    pub fn get_theme(&self) -> Theme {
        match self.store.get_item(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "stored theme unrecognized; using light");
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(e) => {
                warn!(error = %e, "loading theme failed");
                Theme::Light
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) {
        if let Err(e) = self.store.set_item(THEME_KEY, theme.as_str()) {
            warn!(error = %e, "saving theme failed");
        }
    }

    // ---- last quote date ----------------------------------------------------

    /// Day of the last successful quote fetch, if recorded.
    #[must_use]
    pub fn get_last_quote_date(&self) -> Option<String> {
        match self.store.get_item(LAST_QUOTE_DATE_KEY) {
            Ok(date) => date,
            Err(e) => {
                warn!(error = %e, "loading last quote date failed");
                None
            }
        }
    }

    pub fn save_last_quote_date(&self, day: Date) {
        let Ok(raw) = day.format(DAY_FORMAT) else {
            return;
        };
        if let Err(e) = self.store.set_item(LAST_QUOTE_DATE_KEY, &raw) {
            warn!(error = %e, "saving last quote date failed");
        }
    }

    /// True unless the last fetch was recorded on `today`.
    #[must_use]
    pub fn should_fetch_new_quote(&self, today: Date) -> bool {
        let Ok(today) = today.format(DAY_FORMAT) else {
            return true;
        };
        self.get_last_quote_date().as_deref() != Some(today.as_str())
    }
}

/// Millisecond timestamp id, bumped past every stored id and past
/// `last_issued`.
///
/// Ids stay unique and increasing even when two favorites are added in the
/// same millisecond, the clock steps backwards, or the newest favorite was
/// removed in between.
fn next_favorite_id(existing: &[FavoriteQuote], last_issued: i64, now: OffsetDateTime) -> i64 {
    let now_ms = i64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX);
    let highest_stored = existing.iter().filter_map(|f| f.id.parse::<i64>().ok()).max().unwrap_or(i64::MIN);
    now_ms
        .max(highest_stored.saturating_add(1))
        .max(last_issued.saturating_add(1))
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
