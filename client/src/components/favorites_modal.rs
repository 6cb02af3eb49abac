//! Modal listing saved favorites with copy, share, and remove actions.

#[cfg(test)]
#[path = "favorites_modal_test.rs"]
mod favorites_modal_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use quoteday::{FavoriteQuote, WidgetState};

use crate::state::widget::{self, ControllerHandle};

pub const EMPTY_TITLE: &str = "No favorite quotes yet.";
pub const EMPTY_HINT: &str = "Start building your collection by clicking the heart icon on quotes you love!";

pub fn added_label(favorite: &FavoriteQuote) -> String {
    format!("Added {}", favorite.added_day())
}

/// Whether a key press should dismiss the modal.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[component]
fn FavoriteRow(favorite: FavoriteQuote) -> impl IntoView {
    let controller = expect_context::<ControllerHandle>();
    let added = added_label(&favorite);
    let FavoriteQuote { id, text, author, .. } = favorite.clone();
    let copy_source = favorite.clone();
    let share_source = favorite;

    view! {
        <div class="favorites-modal__item">
            <div class="favorites-modal__quote">
                <blockquote class="favorites-modal__text">"\u{201c}" {text} "\u{201d}"</blockquote>
                <div class="favorites-modal__author">"— " {author}</div>
                <div class="favorites-modal__date">{added}</div>
            </div>

            <div class="favorites-modal__actions">
                <button class="favorites-modal__action" on:click=move |_| widget::copy_favorite(&copy_source) title="Copy quote">
                    "⧉"
                </button>
                <button class="favorites-modal__action" on:click=move |_| widget::share_favorite(&share_source) title="Share quote">
                    "⤴"
                </button>
                <button
                    class="favorites-modal__action favorites-modal__action--remove"
                    on:click=move |_| widget::remove_favorite(controller, &id)
                    title="Remove from favorites"
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}

/// Fullscreen modal over the page; closes on backdrop click or Escape.
#[component]
pub fn FavoritesModal(on_close: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let body = move || {
        let favorites = state.with(|s| s.favorites.clone());
        if favorites.is_empty() {
            view! {
                <div class="favorites-modal__empty">
                    <p>{EMPTY_TITLE}</p>
                    <p>{EMPTY_HINT}</p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="favorites-modal__list">
                    {favorites
                        .into_iter()
                        .map(|favorite| view! { <FavoriteRow favorite=favorite/> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="favorites-modal__backdrop" on:click=on_backdrop>
            <div
                class="favorites-modal"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="favorites-modal__header">
                    <h2>"Your Favorite Quotes"</h2>
                    <button class="favorites-modal__close" on:click=on_close_click title="Close favorites">
                        "✕"
                    </button>
                </div>
                <div class="favorites-modal__body">{body}</div>
            </div>
        </div>
    }
}
