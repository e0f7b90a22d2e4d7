//! Component system for the futurama-roster TUI
//!
//! Based on the ratatui Component template pattern.

pub mod characters;

pub use characters::CharactersComponent;

use crate::action::Action;
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

/// Trait for UI components
///
/// Components are modular UI elements that can handle events, update
/// their state, and render themselves.
pub trait Component {
    /// Called once when the component becomes the active screen
    fn mount(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle key events and optionally produce actions
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Update the component state based on an action
    fn update(&mut self, action: Action) -> Result<Option<Action>>;

    /// Render the component to the frame
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
