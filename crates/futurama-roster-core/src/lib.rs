//! futurama-roster-core: Core logic for futurama-roster
//!
//! This crate holds the fetch lifecycle and presentation state for the
//! characters screen. It is intentionally kept independent of any TUI
//! framework so the state machine and display derivations can be unit
//! tested on their own.
//!
//! # Modules
//!
//! - [`fetch`] - Fetch controller driving one request per activation
//! - [`screen_state`] - Loading/error/data state consumed by the renderer
//! - [`presenter`] - Per-character image resolution and display rows
//! - [`indicators`] - Status to visual category mapping
//! - [`messages`] - Localized user-facing text
//! - [`errors`] - Error classification for diagnostics
//! - [`selection`] - Cursor logic for list views
//! - [`formatting`] - Timestamps, durations, truncation

pub mod errors;
pub mod fetch;
pub mod formatting;
pub mod indicators;
pub mod messages;
pub mod presenter;
pub mod screen_state;
pub mod selection;

// Re-export commonly used items at crate root
pub use errors::*;
pub use fetch::*;
pub use formatting::*;
pub use indicators::*;
pub use messages::{Locale, Messages};
pub use presenter::*;
pub use screen_state::*;
pub use selection::*;

pub use futurama_rs::{Character, CharacterStatus};
