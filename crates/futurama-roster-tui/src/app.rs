//! Application state and main loop

use crate::action::Action;
use crate::components::{CharactersComponent, Component};
use crate::tui::{self, Tui};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use futurama_rs::FuturamaClient;
use futurama_roster_core::Locale;
use std::sync::Arc;
use std::time::Duration;

/// Main application state
pub struct App {
    /// Whether the application should quit
    should_quit: bool,
    /// Shared API client
    client: Arc<FuturamaClient>,
    /// Locale for user-facing text
    locale: Locale,
    /// Characters screen (present while the screen is mounted)
    characters: Option<CharactersComponent>,
    /// Poll interval for terminal events; settled fetches are picked up on each tick
    tick_rate: Duration,
}

impl App {
    pub fn new(client: FuturamaClient, locale: Locale) -> Self {
        Self {
            should_quit: false,
            client: Arc::new(client),
            locale,
            characters: None,
            tick_rate: Duration::from_millis(100),
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        tui::install_panic_hook();

        let mut terminal = tui::init()?;
        let result = self.main_loop(&mut terminal).await;
        tui::restore()?;

        result
    }

    /// Main event loop
    async fn main_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut characters = CharactersComponent::new(self.client.clone(), self.locale);
        characters.mount()?;
        self.characters = Some(characters);
        tracing::info!(
            "Characters screen mounted (base url {}, locale {})",
            self.client.base_url(),
            self.locale.code()
        );

        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                if let Some(characters) = &mut self.characters {
                    let _ = characters.draw(frame, area);
                }
            })?;

            // Handle events with timeout
            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let action = match &mut self.characters {
                            Some(characters) => characters.handle_key_event(key)?,
                            None => None,
                        };
                        if let Some(action) = action {
                            self.handle_action(action)?;
                        }
                    }
                    Event::Resize(w, h) => {
                        self.handle_action(Action::Resize(w, h))?;
                    }
                    _ => {}
                }
            } else {
                self.handle_action(Action::Tick)?;
            }

            if self.should_quit {
                break;
            }
        }

        // Unmount: dropping the component cancels any in-flight fetch
        self.characters = None;
        tracing::info!("Characters screen unmounted");

        Ok(())
    }

    /// Apply an action, following up on any action a component returns
    fn handle_action(&mut self, action: Action) -> Result<()> {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            match action {
                Action::Quit => {
                    tracing::info!("Quit requested");
                    self.should_quit = true;
                }
                Action::Refresh => {
                    tracing::info!("Refresh requested");
                    next = self.dispatch(action)?;
                }
                Action::Resize(w, h) => {
                    tracing::debug!("Terminal resized to {}x{}", w, h);
                }
                _ => {
                    next = self.dispatch(action)?;
                }
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> Result<Option<Action>> {
        match &mut self.characters {
            Some(characters) => characters.update(action),
            None => Ok(None),
        }
    }
}
