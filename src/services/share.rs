//! Copy and share helpers.
//!
//! The platform share sheet is tried first when available. A missing share
//! sheet or a failed share falls back to copying; a share the user cancelled
//! does not. Failures are logged and never surfaced as errors.

use tracing::{debug, warn};

pub const QUOTE_SHARE_TITLE: &str = "Quote of the Day";
pub const FAVORITE_SHARE_TITLE: &str = "Favorite Quote";

/// `"<text>" - <author>`
#[must_use]
pub fn share_text(text: &str, author: &str) -> String {
    format!("\"{text}\" - {author}")
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// The platform has no share sheet or clipboard.
    #[error("not supported on this platform")]
    Unsupported,

    /// The user dismissed the share sheet.
    #[error("cancelled by user")]
    Cancelled,

    /// Permission denied or another platform failure.
    #[error("{0}")]
    Failed(String),
}

/// Platform clipboard and share sheet.
#[async_trait::async_trait(?Send)]
pub trait ShareTarget {
    /// Whether a native share sheet exists.
    fn can_share(&self) -> bool;

    /// # Errors
    ///
    /// Returns a [`ShareError`] if the share sheet fails or is dismissed.
    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;

    /// # Errors
    ///
    /// Returns a [`ShareError`] if the clipboard write is refused.
    async fn copy(&self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    Cancelled,
    Failed,
}

/// Copy `text`, logging on failure. Returns whether the copy succeeded.
pub async fn copy_text(target: &dyn ShareTarget, text: &str) -> bool {
    match target.copy(text).await {
        Ok(()) => {
            debug!("quote copied to clipboard");
            true
        }
        Err(e) => {
            warn!(error = %e, "copy to clipboard failed");
            false
        }
    }
}

/// Share through the platform sheet, falling back to a copy.
pub async fn share_or_copy(target: &dyn ShareTarget, title: &str, text: &str) -> ShareOutcome {
    if target.can_share() {
        match target.share(title, text).await {
            Ok(()) => return ShareOutcome::Shared,
            Err(ShareError::Cancelled) => {
                debug!("share dismissed");
                return ShareOutcome::Cancelled;
            }
            Err(e) => warn!(error = %e, "share failed; copying instead"),
        }
    }

    if copy_text(target, text).await { ShareOutcome::Copied } else { ShareOutcome::Failed }
}

#[cfg(test)]
#[path = "share_test.rs"]
mod tests;
