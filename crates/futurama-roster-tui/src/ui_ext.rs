//! Terminal colors for core display categories
//!
//! The core crate knows nothing about ratatui; these traits attach colors
//! to its category and phase enums.

use futurama_roster_core::{ScreenPhase, StatusCategory};
use ratatui::style::Color;

/// Extension trait for StatusCategory to provide ratatui colors
pub trait StatusCategoryExt {
    /// Get the ratatui Color for this category
    fn color(&self) -> Color;

    /// Badge symbol with its color
    fn symbol_and_color(&self) -> (&'static str, Color);
}

impl StatusCategoryExt for StatusCategory {
    fn color(&self) -> Color {
        match self {
            StatusCategory::Positive => Color::Green,
            StatusCategory::Negative => Color::Red,
            StatusCategory::Neutral => Color::DarkGray,
        }
    }

    fn symbol_and_color(&self) -> (&'static str, Color) {
        (self.symbol(), self.color())
    }
}

/// Extension trait for ScreenPhase to color the status bar
pub trait ScreenPhaseExt {
    fn color(&self) -> Color;
}

impl ScreenPhaseExt for ScreenPhase {
    fn color(&self) -> Color {
        match self {
            ScreenPhase::Loading => Color::Cyan,
            ScreenPhase::Failed => Color::Red,
            ScreenPhase::Empty => Color::Yellow,
            ScreenPhase::Ready => Color::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_category_colors() {
        assert_eq!(StatusCategory::Positive.color(), Color::Green);
        assert_eq!(StatusCategory::Negative.color(), Color::Red);
        assert_eq!(StatusCategory::Neutral.color(), Color::DarkGray);
    }

    #[test]
    fn test_symbol_and_color() {
        let (symbol, color) = StatusCategory::Positive.symbol_and_color();
        assert_eq!(symbol, "●");
        assert_eq!(color, Color::Green);
    }

    #[test]
    fn test_phase_colors() {
        assert_eq!(ScreenPhase::Failed.color(), Color::Red);
        assert_eq!(ScreenPhase::Ready.color(), Color::Green);
    }
}
