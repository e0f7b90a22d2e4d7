//! futurama-roster-tui: Terminal UI for futurama-roster
//!
//! Renders the characters screen from the state held by
//! `futurama-roster-core`. The UI reads that state and never mutates it.

pub mod action;
pub mod app;
pub mod components;
pub mod tui;
pub mod ui_ext;

pub use app::App;
