//! Bridge between the `quoteday` controller and Leptos signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is built once by `App` and kept in a local
//! `StoredValue`. Its snapshots are mirrored into `RwSignal<WidgetState>`
//! through a subscription, so components read the signal and call the
//! action helpers here instead of touching the controller directly.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::rc::Rc;

use leptos::prelude::*;
use quoteday::quotes::QuoteApiConfig;
use quoteday::services::share::{FAVORITE_SHARE_TITLE, QUOTE_SHARE_TITLE, ShareOutcome, copy_text, share_or_copy};
use quoteday::state::SubscriptionId;
use quoteday::{QuoteApi, QuoteController, QuoteError, QuoteStorage, WidgetState, ZenQuotesClient};
use quoteday::{FavoriteQuote, Quote};
use tracing::warn;

use crate::state::ui::UiState;
use crate::util::local_storage::BrowserStorage;
use crate::util::share::BrowserShare;

pub type ControllerHandle = StoredValue<QuoteController, LocalStorage>;

/// Stand-in API used when the HTTP client cannot be constructed. Every
/// call fails, so the controller shows offline quotes.
struct OfflineQuotes;

#[async_trait::async_trait(?Send)]
impl QuoteApi for OfflineQuotes {
    async fn today(&self) -> Result<Vec<Quote>, QuoteError> {
        Err(QuoteError::HttpClientBuild("no HTTP client".to_owned()))
    }

    async fn random(&self) -> Result<Vec<Quote>, QuoteError> {
        Err(QuoteError::HttpClientBuild("no HTTP client".to_owned()))
    }

    async fn random_batch(&self, _count: u32) -> Result<Vec<Quote>, QuoteError> {
        Err(QuoteError::HttpClientBuild("no HTTP client".to_owned()))
    }
}

/// Quote API from configuration, falling back to defaults on bad values.
pub fn build_api() -> Rc<dyn QuoteApi> {
    let config = QuoteApiConfig::from_env().unwrap_or_else(|e| {
        warn!(error = %e, "invalid quote API configuration; using defaults");
        QuoteApiConfig::default()
    });
    match ZenQuotesClient::new(config) {
        Ok(client) => Rc::new(client),
        Err(e) => {
            warn!(error = %e, "quote client unavailable; serving offline quotes");
            Rc::new(OfflineQuotes)
        }
    }
}

/// Controller wired to the live API and `localStorage`.
pub fn build_controller() -> QuoteController {
    QuoteController::new(build_api(), QuoteStorage::new(Rc::new(BrowserStorage)))
}

/// Mirror every controller snapshot into `widget`, starting with the
/// current one.
pub fn bridge(controller: &QuoteController, widget: RwSignal<WidgetState>) -> SubscriptionId {
    let id = controller.subscribe(move |state| widget.set(state.clone()));
    widget.set(controller.snapshot());
    id
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Apply persisted theme and favorites now, then fetch today's quote in
/// the background.
pub fn mount(controller: ControllerHandle) {
    let fetch = controller.get_value().mount();
    leptos::task::spawn_local(fetch);
}

pub fn refresh(controller: ControllerHandle) {
    let controller = controller.get_value();
    leptos::task::spawn_local(async move { controller.refresh().await });
}

pub fn randomize(controller: ControllerHandle) {
    let controller = controller.get_value();
    leptos::task::spawn_local(async move { controller.randomize().await });
}

pub fn toggle_favorite(controller: ControllerHandle) {
    controller.with_value(QuoteController::toggle_favorite);
}

pub fn remove_favorite(controller: ControllerHandle, id: &str) {
    controller.with_value(|c| c.remove_favorite(id));
}

pub fn toggle_theme(controller: ControllerHandle) {
    controller.with_value(|c| {
        c.toggle_theme();
    });
}

/// Copy the displayed quote and flash "Copied!" on success.
pub fn copy_quote(ui: RwSignal<UiState>, quote: &Quote) {
    let text = quote.share_text();
    leptos::task::spawn_local(async move {
        if copy_text(&BrowserShare, &text).await {
            flash_copied(ui).await;
        }
    });
}

/// Share the displayed quote; a copy fallback flashes "Copied!" too.
pub fn share_quote(ui: RwSignal<UiState>, quote: &Quote) {
    let text = quote.share_text();
    leptos::task::spawn_local(async move {
        if share_or_copy(&BrowserShare, QUOTE_SHARE_TITLE, &text).await == ShareOutcome::Copied {
            flash_copied(ui).await;
        }
    });
}

pub fn copy_favorite(favorite: &FavoriteQuote) {
    let text = favorite.share_text();
    leptos::task::spawn_local(async move {
        copy_text(&BrowserShare, &text).await;
    });
}

pub fn share_favorite(favorite: &FavoriteQuote) {
    let text = favorite.share_text();
    leptos::task::spawn_local(async move {
        share_or_copy(&BrowserShare, FAVORITE_SHARE_TITLE, &text).await;
    });
}

async fn flash_copied(ui: RwSignal<UiState>) {
    let Some(seq) = ui.try_update(UiState::mark_copied) else {
        return;
    };
    #[cfg(feature = "csr")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::ui::COPY_FEEDBACK_MS)).await;
    ui.update(|u| u.clear_copied(seq));
}
