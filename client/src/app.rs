//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use quoteday::WidgetState;

use crate::components::{favorites_modal::FavoritesModal, footer::Footer, header::Header, quote_card::QuoteCard};
use crate::state::ui::UiState;
use crate::state::widget::{self, ControllerHandle};
use crate::util::dark_mode;

/// Root application component.
///
/// Builds the controller, mirrors its state into a signal, and mounts it:
/// persisted state is applied before the first render, the quote follows.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(WidgetState::default());
    let ui = RwSignal::new(UiState::default());

    let controller = widget::build_controller();
    widget::bridge(&controller, state);
    let controller: ControllerHandle = StoredValue::new_local(controller);

    provide_context(state);
    provide_context(ui);
    provide_context(controller);

    Effect::new(move |_| dark_mode::apply(state.with(|s| s.theme)));

    widget::mount(controller);

    let close_favorites = Callback::new(move |()| ui.update(|u| u.show_favorites = false));

    view! {
        <Title text="Quote of the Day"/>

        <div class="app">
            <Header/>
            <main class="app__main">
                <div class="app__container">
                    <QuoteCard/>
                </div>
            </main>
            <Footer/>

            <Show when=move || ui.with(|u| u.show_favorites)>
                <FavoritesModal on_close=close_favorites/>
            </Show>
        </div>
    }
}
