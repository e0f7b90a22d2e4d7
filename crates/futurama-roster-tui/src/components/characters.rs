//! Characters component - the roster screen
//!
//! Shows the first page of characters with a status badge per row and a
//! detail pane for the selected one. All data comes from the owned
//! [`FetchController`]; this component only reads its state.

use crate::action::Action;
use crate::components::Component;
use crate::ui_ext::{ScreenPhaseExt, StatusCategoryExt};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use futurama_rs::FuturamaClient;
use futurama_roster_core::{
    CharacterRow, FetchController, Locale, Messages, ScreenPhase, ScreenState, ScreenStateExt,
    SelectableList, format_created_at, format_duration_human, pluralize, present_all,
    truncate_string,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// Longest name shown in the list column
const MAX_NAME_WIDTH: usize = 32;

/// Result of an image reachability check: (generation, character id, reachable)
type ProbeResult = (u64, i64, bool);

/// Roster screen component
pub struct CharactersComponent {
    /// Fetch lifecycle and screen state (dropped with the component)
    controller: FetchController,

    /// Client used for fetches and image checks
    client: Arc<FuturamaClient>,

    /// Display rows derived from the last settled list
    rows: SelectableList<CharacterRow>,

    /// List widget state (synced with rows selection)
    list_state: ListState,

    /// Image checks already started for the current rows
    probed: HashSet<i64>,
    probe_tx: mpsc::UnboundedSender<ProbeResult>,
    probe_rx: mpsc::UnboundedReceiver<ProbeResult>,
}

impl CharactersComponent {
    pub fn new(client: Arc<FuturamaClient>, locale: Locale) -> Self {
        let (probe_tx, probe_rx) = mpsc::unbounded_channel();
        Self {
            controller: FetchController::new(locale),
            client,
            rows: SelectableList::default(),
            list_state: ListState::default(),
            probed: HashSet::new(),
            probe_tx,
            probe_rx,
        }
    }

    /// Read-only screen state
    pub fn state(&self) -> &ScreenState {
        self.controller.state()
    }

    pub fn rows(&self) -> &[CharacterRow] {
        self.rows.items()
    }

    pub fn selected_row(&self) -> Option<&CharacterRow> {
        self.rows.selected()
    }

    fn messages(&self) -> &'static Messages {
        self.controller.messages()
    }

    /// Start a fresh fetch attempt
    pub fn refresh(&mut self) {
        self.controller.activate(self.client.clone());
    }

    /// Apply settled fetches and finished image checks
    fn sync(&mut self) {
        if self.controller.poll() {
            self.rows.set_items(present_all(self.controller.state().characters()));
            self.probed.clear();
        }

        let generation = self.controller.generation();
        while let Ok((probe_generation, id, reachable)) = self.probe_rx.try_recv() {
            if probe_generation != generation || reachable {
                continue;
            }
            if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
                row.image.on_load_error();
            }
        }

        self.probe_selected_image();
        self.sync_list_state();
    }

    /// Check the selected row's image once; a failure switches it to the fallback
    fn probe_selected_image(&mut self) {
        let Some(row) = self.rows.selected() else {
            return;
        };
        let source = row.image.source();
        if !(source.starts_with("http://") || source.starts_with("https://")) {
            return;
        }
        if !self.probed.insert(row.id) {
            return;
        }

        let id = row.id;
        let url = source.to_string();
        let generation = self.controller.generation();
        let client = self.client.clone();
        let tx = self.probe_tx.clone();
        tokio::spawn(async move {
            let reachable = match client.probe_image(&url).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Image for character {} unavailable: {}", id, e);
                    false
                }
            };
            let _ = tx.send((generation, id, reachable));
        });
    }

    fn sync_list_state(&mut self) {
        if self.rows.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.rows.selected_index()));
        }
    }

    /// Draw the header with title and status
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let state = self.state();
        let phase = state.phase();

        let mut spans = vec![
            Span::raw(format!(" {} ", self.messages().title))
                .bold()
                .fg(Color::Cyan),
            Span::raw("  "),
            Span::styled(state.status_text(), Style::default().fg(phase.color())),
        ];
        if state.show_list() {
            spans.push(Span::raw(format!(
                "  {}",
                pluralize(state.characters().len(), "character", "characters")
            )));
        }
        if let Some(elapsed) = state.elapsed_since_settled() {
            spans.push(Span::raw(format!("  updated {} ago", format_duration_human(elapsed))).dim());
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }

    /// Draw a single centered message (loading, error, empty)
    fn draw_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
        let para = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(text.to_string(), style))])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(para, area);
    }

    /// Draw the character list
    fn draw_list(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .rows
            .items()
            .iter()
            .map(|row| {
                let (symbol, color) = row.category.symbol_and_color();
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", symbol), Style::default().fg(color)),
                    Span::raw(format!(
                        "{:<width$}",
                        truncate_string(&row.name, MAX_NAME_WIDTH),
                        width = MAX_NAME_WIDTH
                    )),
                    Span::raw(" "),
                    Span::styled(
                        format!(" {} ", row.status),
                        Style::default().fg(Color::Black).bg(color),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::RIGHT))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Draw the detail pane for the selected character
    fn draw_detail(&self, frame: &mut Frame, area: Rect) {
        let Some(row) = self.rows.selected() else {
            return;
        };
        let m = self.messages();
        let label = |text: &str| Span::styled(format!("  {}: ", text), Style::default().add_modifier(Modifier::DIM));

        let mut image = vec![label(m.image), Span::raw(row.image.source().to_string())];
        if row.image.is_fallback() {
            image.push(Span::raw(format!(" ({})", m.fallback_note)).dim());
        }

        let lines = vec![
            Line::from(""),
            Line::from(vec![label(m.gender), Span::raw(row.gender.clone())]),
            Line::from(vec![
                label(m.status),
                Span::styled(row.status.clone(), Style::default().fg(row.category.color())),
            ]),
            Line::from(vec![label(m.species), Span::raw(row.species.clone())]),
            Line::from(vec![label(m.created), Span::raw(format_created_at(&row.created_at))]),
            Line::from(image),
        ];

        let block = Block::default()
            .title(format!(" #{} {} ", row.id, row.name))
            .borders(Borders::NONE);
        let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(para, area);
    }

    /// Draw the footer with keybindings
    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("[j/k]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" select  "),
            Span::styled("[g/G]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" first/last  "),
            Span::styled("[r]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" refresh  "),
            Span::styled("[q]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" quit"),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Component for CharactersComponent {
    fn mount(&mut self) -> Result<()> {
        self.refresh();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('j') | KeyCode::Down => Action::NavigateDown,
            KeyCode::Char('k') | KeyCode::Up => Action::NavigateUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::Char('g') | KeyCode::Home => Action::First,
            KeyCode::Char('G') | KeyCode::End => Action::Last,
            _ => return Ok(None),
        };
        Ok(Some(action))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {}
            Action::Refresh => self.refresh(),
            Action::NavigateDown => self.rows.select_next(),
            Action::NavigateUp => self.rows.select_prev(),
            Action::PageDown => self.rows.page_down(PAGE_SIZE),
            Action::PageUp => self.rows.page_up(PAGE_SIZE),
            Action::First => self.rows.select_first(),
            Action::Last => self.rows.select_last(),
            Action::Quit | Action::Resize(_, _) => return Ok(None),
        }
        self.sync();
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = Layout::vertical([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

        self.draw_header(frame, layout[0]);

        let m = self.messages();
        let state = self.state();
        match state.phase() {
            ScreenPhase::Failed => {
                let text = state.error_message().unwrap_or(m.load_failed).to_string();
                Self::draw_message(
                    frame,
                    layout[1],
                    &text,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                );
            }
            ScreenPhase::Empty => {
                Self::draw_message(frame, layout[1], m.empty, Style::default());
            }
            ScreenPhase::Loading if self.rows.is_empty() => {
                Self::draw_message(frame, layout[1], m.loading, Style::default().fg(Color::DarkGray));
            }
            // Ready, or refreshing with the previous list still on screen
            ScreenPhase::Loading | ScreenPhase::Ready => {
                let body = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(layout[1]);
                self.draw_list(frame, body[0]);
                self.draw_detail(frame, body[1]);
            }
        }

        self.draw_footer(frame, layout[2]);
        Ok(())
    }
}
