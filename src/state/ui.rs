//! Cosmetic UI chrome state, independent of the lookup lifecycle.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the display toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the dark theme is active.
    pub dark_mode: bool,
}
