//! Screen state for the characters list
//!
//! The loading/error/data triple the renderer draws from. All transitions
//! go through a handful of methods that update every field together, so a
//! renderer holding `&ScreenState` never sees a half-applied change.

use futurama_rs::Character;
use std::time::{Duration, Instant};

/// What the screen should show right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    /// An attempt is in flight
    Loading,
    /// The last attempt failed; show the error instead of the list
    Failed,
    /// The last attempt succeeded with no characters
    Empty,
    /// The last attempt succeeded with at least one character
    Ready,
}

/// Loading/error/data state for one screen
///
/// # Examples
///
/// ```
/// use futurama_roster_core::screen_state::{ScreenPhase, ScreenState};
///
/// let mut state = ScreenState::new();
/// assert_eq!(state.phase(), ScreenPhase::Loading);
///
/// state.settle_success(Vec::new());
/// assert_eq!(state.phase(), ScreenPhase::Empty);
/// assert!(state.show_empty_message());
/// ```
#[derive(Debug, Clone)]
pub struct ScreenState {
    loading: bool,
    error_message: Option<String>,
    characters: Vec<Character>,
    /// When the last attempt settled
    last_settled: Option<Instant>,
    /// Number of settled attempts
    attempts: u32,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenState {
    /// Initial state: loading, no error, no characters
    pub fn new() -> Self {
        Self {
            loading: true,
            error_message: None,
            characters: Vec::new(),
            last_settled: None,
            attempts: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Characters in server order
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn last_settled(&self) -> Option<Instant> {
        self.last_settled
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Time since the last attempt settled
    pub fn elapsed_since_settled(&self) -> Option<Duration> {
        self.last_settled.map(|t| t.elapsed())
    }

    /// Begin a new attempt
    ///
    /// Clears the error. The current list stays visible until the attempt settles.
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error_message = None;
    }

    /// Apply a successful attempt, replacing the list verbatim
    pub fn settle_success(&mut self, characters: Vec<Character>) {
        self.characters = characters;
        self.error_message = None;
        self.loading = false;
        self.mark_settled();
    }

    /// Apply a failed attempt
    ///
    /// The list is cleared: an error is never shown next to stale data.
    pub fn settle_failure(&mut self, message: impl Into<String>) {
        self.characters.clear();
        self.error_message = Some(message.into());
        self.loading = false;
        self.mark_settled();
    }

    fn mark_settled(&mut self) {
        self.last_settled = Some(Instant::now());
        self.attempts += 1;
    }

    pub fn phase(&self) -> ScreenPhase {
        if self.loading {
            ScreenPhase::Loading
        } else if self.error_message.is_some() {
            ScreenPhase::Failed
        } else if self.characters.is_empty() {
            ScreenPhase::Empty
        } else {
            ScreenPhase::Ready
        }
    }

    /// Whether the "no characters" message should be shown
    pub fn show_empty_message(&self) -> bool {
        !self.loading && self.characters.is_empty() && self.error_message.is_none()
    }
}

/// Extension trait for status-bar text
pub trait ScreenStateExt {
    /// Short status word for the status bar
    fn status_text(&self) -> &'static str;

    /// Whether the list (possibly stale, during a refresh) should be drawn
    fn show_list(&self) -> bool;
}

impl ScreenStateExt for ScreenState {
    fn status_text(&self) -> &'static str {
        match self.phase() {
            ScreenPhase::Loading if self.attempts == 0 => "Loading...",
            ScreenPhase::Loading => "Refreshing...",
            ScreenPhase::Failed => "Error",
            ScreenPhase::Empty | ScreenPhase::Ready => "Ready",
        }
    }

    fn show_list(&self) -> bool {
        !self.characters.is_empty() && self.error_message.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futurama_rs::CharacterStatus;

    fn fry() -> Character {
        Character {
            id: 1,
            name: "Philip J. Fry".to_string(),
            gender: "MALE".to_string(),
            status: CharacterStatus::Alive,
            species: "HUMAN".to_string(),
            created_at: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_new_state() {
        let state = ScreenState::new();
        assert!(state.is_loading());
        assert!(!state.has_error());
        assert!(state.characters().is_empty());
        assert!(!state.show_empty_message());
        assert_eq!(state.attempts(), 0);
    }

    #[test]
    fn test_settle_success() {
        let mut state = ScreenState::new();
        state.settle_success(vec![fry()]);

        assert!(!state.is_loading());
        assert!(state.error_message().is_none());
        assert_eq!(state.characters().len(), 1);
        assert_eq!(state.phase(), ScreenPhase::Ready);
        assert!(state.last_settled().is_some());
        assert_eq!(state.attempts(), 1);
    }

    #[test]
    fn test_settle_failure() {
        let mut state = ScreenState::new();
        state.settle_failure("characters could not be loaded");

        assert!(!state.is_loading());
        assert_eq!(state.error_message(), Some("characters could not be loaded"));
        assert!(state.characters().is_empty());
        assert_eq!(state.phase(), ScreenPhase::Failed);
        assert!(!state.show_empty_message());
    }

    #[test]
    fn test_failed_refresh_clears_list() {
        let mut state = ScreenState::new();
        state.settle_success(vec![fry()]);

        state.start_loading();
        // Still visible while refreshing
        assert_eq!(state.characters().len(), 1);

        state.settle_failure("boom");
        assert!(state.characters().is_empty());
        assert_eq!(state.attempts(), 2);
    }

    #[test]
    fn test_refresh_clears_error() {
        let mut state = ScreenState::new();
        state.settle_failure("boom");
        state.start_loading();
        assert!(!state.has_error());
        assert_eq!(state.phase(), ScreenPhase::Loading);
    }

    #[test]
    fn test_exactly_one_outcome_after_settling() {
        let outcomes: [fn(&mut ScreenState); 3] = [
            |s| s.settle_success(vec![fry()]),
            |s| s.settle_success(Vec::new()),
            |s| s.settle_failure("boom"),
        ];
        for apply in outcomes {
            let mut state = ScreenState::new();
            apply(&mut state);
            assert!(!state.is_loading());
            let non_empty = !state.characters().is_empty();
            let errored = state.has_error();
            let empty = state.show_empty_message();
            assert_eq!(
                [non_empty, errored, empty].iter().filter(|b| **b).count(),
                1
            );
        }
    }

    #[test]
    fn test_status_text() {
        let mut state = ScreenState::new();
        assert_eq!(state.status_text(), "Loading...");

        state.settle_success(vec![fry()]);
        assert_eq!(state.status_text(), "Ready");
        assert!(state.show_list());

        state.start_loading();
        assert_eq!(state.status_text(), "Refreshing...");
        assert!(state.show_list());

        state.settle_failure("Failed");
        assert_eq!(state.status_text(), "Error");
        assert!(!state.show_list());
    }
}
