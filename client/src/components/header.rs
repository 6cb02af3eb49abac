//! Top bar with the title, favorites badge, and quote/theme controls.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use quoteday::WidgetState;

use crate::state::ui::UiState;
use crate::state::widget::{self, ControllerHandle};
use crate::util::dark_mode;

/// Badge text for the favorites button; hidden when there are none.
pub fn favorites_badge(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let controller = expect_context::<ControllerHandle>();

    let theme = move || state.with(|s| s.theme);
    let badge = move || state.with(|s| favorites_badge(s.favorites_count()));
    let busy = move || state.with(WidgetState::is_loading);

    view! {
        <header class="header">
            <div class="header__content">
                <h1 class="header__title">"✨ Quote of the Day"</h1>

                <div class="header__actions">
                    <button
                        class="header__button header__button--favorites"
                        on:click=move |_| ui.update(|u| u.show_favorites = true)
                        title="View favorites"
                    >
                        "♥"
                        {move || badge().map(|n| view! { <span class="header__badge">{n}</span> })}
                    </button>

                    <button
                        class="header__button"
                        on:click=move |_| widget::refresh(controller)
                        disabled=busy
                        title="Refresh today's quote"
                    >
                        "↻"
                    </button>

                    <button
                        class="header__button"
                        on:click=move |_| widget::randomize(controller)
                        disabled=busy
                        title="Get random quote"
                    >
                        "⤨"
                    </button>

                    <button
                        class="header__button header__button--theme"
                        on:click=move |_| widget::toggle_theme(controller)
                        title=move || dark_mode::toggle_title(theme())
                    >
                        {move || dark_mode::toggle_icon(theme())}
                    </button>
                </div>
            </div>
        </header>
    }
}
