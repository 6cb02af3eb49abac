//! # client
//!
//! Leptos + WASM front end for the quote-of-the-day widget.
//!
//! The `quoteday` crate owns the behavior; this crate renders
//! `WidgetState`, forwards user intents to the `QuoteController`, and
//! provides the browser adapters (localStorage, clipboard/share, the
//! `data-theme` attribute). Browser code is compiled only with the `csr`
//! feature; without it the adapters are inert stubs so the crate still
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Install browser logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
