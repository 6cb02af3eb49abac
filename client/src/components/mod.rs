//! Widget component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `WidgetState` and `UiState` from Leptos context and
//! forward user intents through `state::widget`.

pub mod favorites_modal;
pub mod footer;
pub mod header;
pub mod quote_card;
