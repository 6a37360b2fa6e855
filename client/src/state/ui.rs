//! Local UI chrome state (sidebar, dark mode).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so the layout
//! shell can evolve independently of fetched data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the layout shell.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}
