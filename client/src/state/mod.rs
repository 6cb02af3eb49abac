//! Client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `WidgetState` is owned by the `quoteday` controller and mirrored into a
//! signal; `UiState` holds presentation-only flags that never persist.

pub mod ui;
pub mod widget;
