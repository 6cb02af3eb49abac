//! Local UI chrome state (modal visibility, copy feedback).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `WidgetState` so the
//! controller stays free of view details.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long the card shows "Copied!" after a successful copy.
pub const COPY_FEEDBACK_MS: u64 = 2000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub show_favorites: bool,
    /// Whether the card's copy button currently reads "Copied!".
    pub copied: bool,
    /// Bumped on every successful copy so only the newest timer clears
    /// `copied`.
    pub copy_feedback_seq: u64,
}

impl UiState {
    /// Flag a successful copy. Returns the sequence the matching
    /// [`UiState::clear_copied`] call must present.
    pub fn mark_copied(&mut self) -> u64 {
        self.copy_feedback_seq += 1;
        self.copied = true;
        self.copy_feedback_seq
    }

    /// Clear the copy feedback if no newer copy happened since `seq`.
    pub fn clear_copied(&mut self, seq: u64) {
        if self.copy_feedback_seq == seq {
            self.copied = false;
        }
    }
}
