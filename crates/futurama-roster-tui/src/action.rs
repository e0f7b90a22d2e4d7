//! Actions for the futurama-roster TUI
//!
//! Actions represent events that can modify application state.

/// Actions that can be dispatched in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Quit,
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    First,
    Last,

    // Data loading
    Refresh,

    // UI state
    Tick,
    Resize(u16, u16),
}
