//! Tip table view

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use tipboard::chips::ChipBar;
use tipboard::filter::{FilterState, Visibility};
use tipboard::layout::TableLayout;
use tipboard::render::{RiskClass, classify_risk};
use tipboard::sort::SortState;
use tipboard::{BoardView, Tip, TipField};

/// Chip as drawn in the chip row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipItem {
    pub label: String,
    pub selected: bool,
}

/// Terminal rendition of the board.
///
/// Keeps its own snapshot of the rows in display order; the board pushes
/// updates through [`BoardView`].
pub struct TableView {
    pub state: TableState,
    header: Vec<String>,
    fields: Vec<TipField>,
    rows: Vec<Tip>,
    visible: Vec<usize>,
    query: String,
    category: Option<String>,
    risk: Option<String>,
    chips: Vec<ChipItem>,
    search_requested: bool,
}

impl TableView {
    pub fn new() -> Self {
        Self {
            state: TableState::default(),
            header: Vec::new(),
            fields: Vec::new(),
            rows: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            category: None,
            risk: None,
            chips: Vec::new(),
            search_requested: false,
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn chip_items(&self) -> &[ChipItem] {
        &self.chips
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Row indices currently shown, in display order
    pub fn visible_rows(&self) -> &[usize] {
        &self.visible
    }

    /// Take a pending request to move focus to the search box
    pub fn take_search_request(&mut self) -> bool {
        std::mem::take(&mut self.search_requested)
    }

    pub fn next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.visible.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn selected_tip(&self) -> Option<&Tip> {
        self.state
            .selected()
            .and_then(|i| self.visible.get(i))
            .and_then(|&row| self.rows.get(row))
    }

    fn clamp_selection(&mut self) {
        match self.state.selected() {
            _ if self.visible.is_empty() => self.state.select(None),
            Some(i) if i >= self.visible.len() => self.state.select(Some(self.visible.len() - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }

    pub fn render_filters(&self, frame: &mut Frame, area: Rect) {
        let label = Style::default().fg(Color::DarkGray);
        let mut spans = vec![
            Span::styled("Category: ", label),
            Span::raw(self.category.as_deref().unwrap_or("All")),
        ];
        if self.fields.contains(&TipField::Risk) {
            spans.push(Span::styled("  Risk: ", label));
            spans.push(Span::raw(self.risk.as_deref().unwrap_or("All")));
        }
        spans.push(Span::styled("  Showing: ", label));
        spans.push(Span::raw(format!(
            "{} of {}",
            self.visible.len(),
            self.rows.len()
        )));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub fn render_chips(&self, frame: &mut Frame, area: Rect, cursor: Option<usize>) {
        let mut spans = Vec::with_capacity(self.chips.len() * 2);
        for (i, chip) in self.chips.iter().enumerate() {
            let mut style = if chip.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Cyan)
            };
            if cursor == Some(i) {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {} ", chip.label), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let header = Row::new(
            self.header
                .iter()
                .map(|label| Cell::from(label.clone()).style(bold))
                .collect::<Vec<_>>(),
        )
        .height(1);

        let rows: Vec<Row> = self
            .visible
            .iter()
            .filter_map(|&row| self.rows.get(row))
            .map(|tip| {
                Row::new(
                    self.fields
                        .iter()
                        .map(|&field| cell_for(tip, field))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let widths: Vec<Constraint> = self
            .fields
            .iter()
            .map(|field| match field {
                TipField::Topic => Constraint::Percentage(22),
                TipField::Category => Constraint::Length(12),
                TipField::Risk => Constraint::Length(10),
                TipField::Description => Constraint::Percentage(35),
                TipField::Actions => Constraint::Percentage(25),
                TipField::Resources => Constraint::Length(6),
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Tips"))
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(table, area, &mut self.state);
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

fn risk_color(class: RiskClass) -> Color {
    match class {
        RiskClass::Low => Color::Green,
        RiskClass::Moderate => Color::Yellow,
        RiskClass::High => Color::Red,
    }
}

fn cell_for(tip: &Tip, field: TipField) -> Cell<'static> {
    match field {
        TipField::Risk => {
            let risk = tip.risk.as_deref();
            Cell::from(tip.field(field).to_string())
                .style(Style::default().fg(risk_color(classify_risk(risk))))
        }
        // Links open from the detail view
        TipField::Resources if !tip.field(field).is_empty() => {
            Cell::from("Link").style(Style::default().fg(Color::Blue))
        }
        _ => Cell::from(tip.field(field).to_string()),
    }
}

impl BoardView for TableView {
    fn render_rows(&mut self, tips: &[Tip], layout: &TableLayout, sort: &SortState) {
        self.rows = tips.to_vec();
        self.fields = layout.columns().iter().map(|c| c.field).collect();
        self.header = layout
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| match sort.direction_for(i) {
                Some(direction) => format!("{} {}", column.label, direction.arrow()),
                None => column.label.to_string(),
            })
            .collect();
    }

    fn apply_visibility(&mut self, visibility: &Visibility) {
        self.visible = visibility.indices().collect();
        self.clamp_selection();
    }

    fn sync_controls(&mut self, filter: &FilterState, chips: &ChipBar) {
        self.query = filter.query.clone();
        self.category = filter.category_value().map(str::to_string);
        self.risk = filter.risk_value().map(str::to_string);
        self.chips = chips
            .chips()
            .iter()
            .map(|chip| ChipItem {
                label: chip.label.clone(),
                selected: chip.selected,
            })
            .collect();
    }

    fn scroll_to(&mut self, row: usize) {
        if let Some(pos) = self.visible.iter().position(|&r| r == row) {
            self.state.select(Some(pos));
        }
    }

    fn focus_search(&mut self) {
        self.search_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipboard::TipBoard;
    use tipboard::testing::sample_tips;

    fn board() -> TipBoard<TableView> {
        let mut board = TipBoard::new(TableLayout::with_risk(), Vec::new(), TableView::new());
        board.load(sample_tips());
        board
    }

    #[test]
    fn test_load_selects_first_row() {
        let board = board();
        let view = board.view();
        assert_eq!(view.visible_rows().len(), 5);
        assert_eq!(view.state.selected(), Some(0));
        assert_eq!(view.header()[0], "Topic");
    }

    #[test]
    fn test_filter_scrolls_to_first_match() {
        let mut board = board();
        board.view_mut().state.select(Some(4));
        board.set_category(Some("System".into()));

        let view = board.view();
        assert_eq!(view.visible_rows().len(), 1);
        assert_eq!(view.state.selected(), Some(0));
        assert_eq!(view.selected_tip().unwrap().topic, "Patch regularly");
        assert_eq!(view.category(), Some("System"));
    }

    #[test]
    fn test_no_match_clears_selection() {
        let mut board = board();
        board.set_query("zzz-nothing");
        assert!(board.view().visible_rows().is_empty());
        assert_eq!(board.view().state.selected(), None);
        assert!(board.view().selected_tip().is_none());
    }

    #[test]
    fn test_sort_marks_header() {
        let mut board = board();
        board.sort_by_column(0);
        assert_eq!(board.view().header()[0], "Topic ▲");
        board.sort_by_column(0);
        assert_eq!(board.view().header()[0], "Topic ▼");
        assert_eq!(board.view().header()[1], "Category");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut board = board();
        let view = board.view_mut();
        view.previous();
        assert_eq!(view.state.selected(), Some(4));
        view.next();
        assert_eq!(view.state.selected(), Some(0));
    }

    #[test]
    fn test_clear_requests_search_focus() {
        let mut board = board();
        board.toggle_chip(0);
        assert!(board.view().chip_items()[0].selected);

        board.clear();
        assert!(board.view_mut().take_search_request());
        assert!(!board.view_mut().take_search_request());
        assert!(board.view().chip_items().iter().all(|c| !c.selected));
    }
}
