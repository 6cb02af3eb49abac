//! Applies the theme as a `data-theme` attribute on `<html>`.
//!
//! The stylesheet keys its color variables off that attribute. Persistence
//! of the choice belongs to `QuoteStorage`; this module only touches the DOM.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use quoteday::Theme;

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Set `data-theme` on the document element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(e) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                tracing::warn!(error = ?e, "applying theme attribute failed");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Icon for the header toggle: the theme you would switch to.
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    }
}

/// Tooltip for the header toggle.
pub fn toggle_title(theme: Theme) -> String {
    format!("Switch to {} mode", theme.toggled())
}
