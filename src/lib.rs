//! # quoteday
//!
//! Domain layer for the quote-of-the-day widget: the ZenQuotes client with
//! its embedded fallback list, the key-value storage wrapper for favorites
//! and theme, share/copy helpers, and the controller that composes them
//! into observable widget state.
//!
//! The crate has no browser dependency. The `client` crate supplies the
//! browser-side `KeyValueStore` and `ShareTarget` implementations and renders
//! [`state::WidgetState`] with Leptos.

pub mod quotes;
pub mod services;
pub mod state;
pub mod types;

pub use quotes::{QuoteApi, QuoteError, ZenQuotesClient};
pub use services::share::{ShareError, ShareOutcome, ShareTarget};
pub use services::storage::{KeyValueStore, MemoryStore, QuoteStorage, StorageError};
pub use state::{LoadPhase, QuoteController, WidgetState};
pub use types::{FavoriteQuote, Quote, Theme};
