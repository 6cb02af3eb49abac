//! Main card: loading spinner, advisory banner, quote, and actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `WidgetState` for what to show and `UiState` for copy feedback.
//! Favoriting goes through the controller; copy and share run against the
//! browser adapters via `state::widget`.

#[cfg(test)]
#[path = "quote_card_test.rs"]
mod quote_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use quoteday::{Quote, WidgetState};

use crate::state::ui::UiState;
use crate::state::widget::{self, ControllerHandle};

pub const LOADING_TEXT: &str = "Loading your daily inspiration...";

/// What the card renders for a given state.
#[derive(Clone, Debug, PartialEq)]
pub enum CardView {
    Loading,
    /// An advisory with nothing to show underneath it.
    Failed(String),
    /// Nothing loaded and no advisory; only reachable before mount.
    Empty,
    Ready { quote: Quote, warning: Option<String>, favorited: bool },
}

pub fn card_view(state: &WidgetState) -> CardView {
    if state.is_loading() {
        return CardView::Loading;
    }
    match (&state.quote, &state.error) {
        (None, Some(message)) => CardView::Failed(message.clone()),
        (None, None) => CardView::Empty,
        (Some(quote), warning) => CardView::Ready {
            quote: quote.clone(),
            warning: warning.clone(),
            favorited: state.is_current_favorite(),
        },
    }
}

/// Button label and tooltip for the favorite toggle.
pub fn favorite_labels(favorited: bool) -> (&'static str, &'static str) {
    if favorited { ("Favorited", "Remove from favorites") } else { ("Favorite", "Add to favorites") }
}

pub fn copy_label(copied: bool) -> &'static str {
    if copied { "Copied!" } else { "Copy" }
}

#[component]
pub fn QuoteCard() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let controller = expect_context::<ControllerHandle>();

    move || match state.with(card_view) {
        CardView::Loading => view! {
            <div class="quote-card quote-card--loading">
                <div class="quote-card__spinner"></div>
                <p>{LOADING_TEXT}</p>
            </div>
        }
        .into_any(),
        CardView::Failed(message) => view! {
            <div class="quote-card quote-card--error">
                <h3>"Oops! Something went wrong"</h3>
                <p>{message}</p>
            </div>
        }
        .into_any(),
        CardView::Empty => view! {
            <div class="quote-card quote-card--error">
                <h3>"No quote available"</h3>
                <p>"Please try refreshing the page."</p>
            </div>
        }
        .into_any(),
        CardView::Ready { quote, warning, favorited } => {
            let (fav_label, fav_title) = favorite_labels(favorited);
            let copy_source = quote.clone();
            let share_source = quote.clone();
            view! {
                <div class="quote-card">
                    {warning.map(|w| view! { <div class="quote-card__banner"><p>{w}</p></div> })}

                    <div class="quote-card__content">
                        <blockquote class="quote-card__text">"\u{201c}" {quote.text} "\u{201d}"</blockquote>
                        <div class="quote-card__author">"— " {quote.author}</div>
                    </div>

                    <div class="quote-card__actions">
                        <button
                            class="quote-card__action"
                            class:quote-card__action--favorited=favorited
                            on:click=move |_| widget::toggle_favorite(controller)
                            title=fav_title
                        >
                            {if favorited { "♥ " } else { "♡ " }}
                            {fav_label}
                        </button>

                        <button
                            class="quote-card__action"
                            on:click=move |_| widget::copy_quote(ui, &copy_source)
                            title="Copy quote"
                        >
                            {move || copy_label(ui.with(|u| u.copied))}
                        </button>

                        <button
                            class="quote-card__action"
                            on:click=move |_| widget::share_quote(ui, &share_source)
                            title="Share quote"
                        >
                            "Share"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
