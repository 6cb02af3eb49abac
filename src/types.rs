//! Core value types shared by the client, storage and view layers.
//!
//! DESIGN
//! ======
//! `Quote` deserializes straight from the ZenQuotes wire shape (`q`, `a`,
//! optional `h`). `FavoriteQuote` keeps the camelCase `dateAdded` key so the
//! persisted JSON stays readable by earlier builds of the widget.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::services::share::share_text;

// =============================================================================
// QUOTE
// =============================================================================

/// A quote as returned by the quotes API.
///
/// Has no identity beyond its `(text, author)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "q")]
    pub text: String,
    #[serde(rename = "a")]
    pub author: String,
    /// Pre-rendered HTML for the quote, when the API provides one.
    #[serde(rename = "h", default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl Quote {
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self { text: text.into(), author: author.into(), html: None }
    }

    /// True when `other` names the same `(text, author)` pair.
    #[must_use]
    pub fn same_as(&self, text: &str, author: &str) -> bool {
        self.text == text && self.author == author
    }

    /// Text placed on the clipboard or handed to the share sheet.
    #[must_use]
    pub fn share_text(&self) -> String {
        share_text(&self.text, &self.author)
    }
}

// =============================================================================
// FAVORITE
// =============================================================================

/// A quote the user saved, as persisted in the favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteQuote {
    /// Decimal millisecond timestamp assigned when the favorite was created.
    pub id: String,
    pub text: String,
    pub author: String,
    /// RFC 3339 timestamp of when the favorite was added.
    #[serde(rename = "dateAdded")]
    pub date_added: String,
}

impl FavoriteQuote {
    #[must_use]
    pub fn matches(&self, text: &str, author: &str) -> bool {
        self.text == text && self.author == author
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        share_text(&self.text, &self.author)
    }

    /// Calendar-day part of `date_added` (`YYYY-MM-DD`), for display.
    ///
    /// Falls back to the raw string when it is not a valid timestamp.
    #[must_use]
    pub fn added_day(&self) -> String {
        time::OffsetDateTime::parse(&self.date_added, &time::format_description::well_known::Rfc3339)
            .ok()
            .and_then(|ts| ts.date().format(crate::services::storage::DAY_FORMAT).ok())
            .unwrap_or_else(|| self.date_added.clone())
    }
}

// =============================================================================
// THEME
// =============================================================================

/// Display theme. Persisted as its lowercase name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored theme string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}
