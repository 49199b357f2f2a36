//! Application state and key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tipboard::TipBoard;
use tipboard::config::ExportConfig;

use crate::views::{TableView, TipDetailView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the search query
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Board,
    Detail,
}

const BOARD_HELP: &str = "/: search | Tab: category | r: risk | 1-9: sort | ←→ c: chips | \
                          x: clear | e: export | Enter: details | q: quit";
const SEARCH_HELP: &str = "Type to filter | Enter/Esc: done | Ctrl-U: clear";

/// Work that needs the async runtime, returned from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Export,
}

/// Next option after `current`, wrapping through "All" (`None`).
/// Matches the way filters compare: lower-cased equality.
pub fn cycle(options: &[String], current: Option<&str>) -> Option<String> {
    let current = current.map(str::to_lowercase);
    let position = current
        .as_deref()
        .and_then(|c| options.iter().position(|o| o.to_lowercase() == c));
    let next = match position {
        Some(i) => i + 1,
        None => 0,
    };
    options.get(next).cloned()
}

/// Main application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    pub board: TipBoard<TableView>,
    pub mode: InputMode,
    pub screen: Screen,
    pub detail: TipDetailView,
    /// Chip under the cursor in the chip row
    pub chip_cursor: usize,
    /// One-line message shown in the footer until the next key
    pub status: Option<String>,
    /// Where the tips were loaded from
    pub source: String,
    export: ExportConfig,
}

impl App {
    pub fn new(board: TipBoard<TableView>, source: String, export: ExportConfig) -> Self {
        Self {
            should_quit: false,
            board,
            mode: InputMode::Normal,
            screen: Screen::Board,
            detail: TipDetailView::new(),
            chip_cursor: 0,
            status: None,
            source,
            export,
        }
    }

    /// Mark the app as ready to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return None;
        }
        self.status = None;

        let action = match (self.screen, self.mode) {
            (Screen::Detail, _) => {
                self.handle_detail_key(key);
                None
            }
            (Screen::Board, InputMode::Search) => {
                self.handle_search_key(key);
                None
            }
            (Screen::Board, InputMode::Normal) => self.handle_board_key(key),
        };

        if self.board.view_mut().take_search_request() {
            self.mode = InputMode::Search;
        }
        action
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.detail.clear();
                self.screen = Screen::Board;
            }
            KeyCode::Char('j') | KeyCode::Down => self.detail.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.detail.scroll_up(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = InputMode::Normal,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.board.set_query(String::new());
            }
            KeyCode::Char(c) => {
                let mut query = self.board.filter().query.clone();
                query.push(c);
                self.board.set_query(query);
            }
            KeyCode::Backspace => {
                let mut query = self.board.filter().query.clone();
                if query.pop().is_some() {
                    self.board.set_query(query);
                }
            }
            _ => {}
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('/') | KeyCode::Char('i') => self.mode = InputMode::Search,
            KeyCode::Char('j') | KeyCode::Down => self.board.view_mut().next(),
            KeyCode::Char('k') | KeyCode::Up => self.board.view_mut().previous(),
            KeyCode::Tab => {
                let next = cycle(&self.board.categories(), self.board.filter().category_value());
                self.board.set_category(next);
            }
            KeyCode::Char('r') => {
                if self.board.layout().has_risk() {
                    let next = cycle(&self.board.risk_levels(), self.board.filter().risk_value());
                    self.board.set_risk(next);
                } else {
                    self.status = Some("Risk column is disabled".to_string());
                }
            }
            KeyCode::Left => self.chip_cursor = self.chip_cursor.saturating_sub(1),
            KeyCode::Right => {
                if self.chip_cursor + 1 < self.board.chips().len() {
                    self.chip_cursor += 1;
                }
            }
            KeyCode::Char('c') | KeyCode::Char(' ') => self.board.toggle_chip(self.chip_cursor),
            KeyCode::Char('x') => {
                self.board.clear();
                self.chip_cursor = 0;
            }
            KeyCode::Char('e') => return Some(Action::Export),
            KeyCode::Char(c @ '1'..='9') => {
                let column = (c as usize) - ('1' as usize);
                if !self.board.sort_by_column(column) {
                    self.status = Some(format!("No column {c}"));
                }
            }
            KeyCode::Enter => {
                if let Some(tip) = self.board.view().selected_tip().cloned() {
                    self.detail.set_tip(tip);
                    self.screen = Screen::Detail;
                }
            }
            _ => {}
        }
        None
    }

    pub async fn perform(&mut self, action: Action) {
        match action {
            Action::Export => {
                let result = self.board.export_to_dir(&self.export.dir).await;
                self.status = Some(match result {
                    Ok(path) => format!(
                        "Exported {} tips to {}",
                        self.board.tips().len(),
                        path.display()
                    ),
                    Err(e) => {
                        tracing::error!(error = %e, "export failed");
                        format!("Export failed: {e}")
                    }
                });
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Length(1), // Filters
                Constraint::Length(1), // Chips
                Constraint::Min(3),    // Table / detail
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        self.render_search(frame, chunks[0]);
        self.board.view().render_filters(frame, chunks[1]);
        self.board
            .view()
            .render_chips(frame, chunks[2], Some(self.chip_cursor));
        match self.screen {
            Screen::Board => self.board.view_mut().render_table(frame, chunks[3]),
            Screen::Detail => self.detail.render(frame, chunks[3]),
        }
        self.render_footer(frame, chunks[4]);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let focused = self.mode == InputMode::Search;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let mut spans = vec![Span::raw(self.board.view().query().to_string())];
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!("Search ({})", self.source));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let text = match (&self.status, self.mode) {
            (Some(status), _) => status.as_str(),
            (None, InputMode::Search) => SEARCH_HELP,
            (None, InputMode::Normal) => BOARD_HELP,
        };
        let footer = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipboard::layout::TableLayout;
    use tipboard::testing::sample_tips;

    fn app() -> App {
        let mut board = TipBoard::new(TableLayout::with_risk(), Vec::new(), TableView::new());
        board.load(sample_tips());
        App::new(board, "test".to_string(), ExportConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_cycle_wraps_through_all() {
        let options = vec!["Accounts".to_string(), "Network".to_string()];
        assert_eq!(cycle(&options, None).as_deref(), Some("Accounts"));
        assert_eq!(cycle(&options, Some("accounts")).as_deref(), Some("Network"));
        assert_eq!(cycle(&options, Some("Network")), None);
        assert_eq!(cycle(&[], None), None);
    }

    #[test]
    fn test_cycle_advances_past_non_ascii_values() {
        let options = vec!["Éducation".to_string(), "Öffentlich".to_string()];
        assert_eq!(cycle(&options, Some("éducation")).as_deref(), Some("Öffentlich"));
        assert_eq!(cycle(&options, Some("ÖFFENTLICH")), None);
    }

    #[test]
    fn test_search_filters_per_keystroke() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, InputMode::Search);

        type_text(&mut app, "pat");
        assert_eq!(app.board.filter().query, "pat");
        assert_eq!(app.board.visibility().visible_count(), 1);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.board.filter().query, "pa");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, InputMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_search_mode_keeps_letters_out_of_commands() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.board.filter().query, "q");
    }

    #[test]
    fn test_tab_cycles_category() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.board.filter().category_value(), Some("Accounts"));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.board.filter().category_value(), Some("Network"));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.board.filter().category_value(), None);
    }

    #[test]
    fn test_risk_cycles_distinct_levels() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        let first = app.board.risk_levels()[0].clone();
        assert_eq!(app.board.filter().risk_value(), Some(first.as_str()));
    }

    #[test]
    fn test_risk_key_without_risk_column() {
        let mut board = TipBoard::new(TableLayout::standard(), Vec::new(), TableView::new());
        board.load(sample_tips());
        let mut app = App::new(board, "test".to_string(), ExportConfig::default());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.board.filter().risk_value(), None);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_chip_toggle_and_clear() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.board.filter().category_value(), Some("Network"));

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.board.filter().category_value(), None);
        assert_eq!(app.chip_cursor, 0);
        assert_eq!(app.mode, InputMode::Search);
    }

    #[test]
    fn test_chip_cursor_stays_in_range() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.chip_cursor, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.chip_cursor, app.board.chips().len() - 1);
    }

    #[test]
    fn test_number_keys_sort() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.board.tips()[0].topic, "Enable host firewall");
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.board.tips()[0].topic, "Use a password manager");

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.status.as_deref(), Some("No column 9"));
    }

    #[test]
    fn test_enter_opens_detail() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(
            app.detail.tip.as_ref().map(|t| t.topic.as_str()),
            Some("Use a password manager")
        );

        // q closes the detail view instead of quitting
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.screen, Screen::Board);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_export_key_returns_action() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('e')), Some(Action::Export));
    }

    #[tokio::test]
    async fn test_perform_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = TipBoard::new(TableLayout::standard(), Vec::new(), TableView::new());
        board.load(sample_tips());
        let export = ExportConfig {
            dir: dir.path().to_path_buf(),
        };
        let mut app = App::new(board, "test".to_string(), export);

        app.perform(Action::Export).await;
        assert!(dir.path().join("tips-export.json").exists());
        assert!(app.status.unwrap().starts_with("Exported 5 tips"));
    }

    #[test]
    fn test_ctrl_c_quits_from_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
