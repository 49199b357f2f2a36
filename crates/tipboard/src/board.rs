//! The tip board: collection, view state, and the operations users drive
//!
//! [`TipBoard`] owns the in-memory collection together with the active
//! query, filters, sort and chip selection. Front ends never touch that state
//! directly; they implement [`BoardView`] and receive callbacks whenever the
//! board wants something redrawn.
//!
//! Every mutation runs the same cycle: render rows (after a sort or load),
//! recompute visibility, then resync the filter controls and chips.

use std::path::{Path, PathBuf};

use crate::chips::{ChipBar, ChipToggle};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::export;
use crate::filter::{FilterState, Visibility, compute_visibility};
use crate::layout::TableLayout;
use crate::sort::{SortState, sort_tips};
use crate::tip::{Tip, TipField, distinct_values};

/// Callbacks from the board into a rendering surface
pub trait BoardView {
    /// Rebuild every row from `tips` in their current order
    fn render_rows(&mut self, tips: &[Tip], layout: &TableLayout, sort: &SortState);

    /// Show or hide rows
    fn apply_visibility(&mut self, visibility: &Visibility);

    /// Bring search/filter controls and chips in line with the filter state
    fn sync_controls(&mut self, filter: &FilterState, chips: &ChipBar);

    /// Bring a row into view
    fn scroll_to(&mut self, _row: usize) {}

    /// Return input focus to the search field
    fn focus_search(&mut self) {}
}

/// Application state for one board
pub struct TipBoard<V: BoardView> {
    tips: Vec<Tip>,
    layout: TableLayout,
    filter: FilterState,
    sort: SortState,
    visibility: Visibility,
    chips: ChipBar,
    /// Configured category options; empty means derive from data
    category_options: Vec<String>,
    view: V,
}

impl<V: BoardView> TipBoard<V> {
    /// Empty board. Nothing is rendered until [`TipBoard::load`].
    pub fn new(layout: TableLayout, category_options: Vec<String>, view: V) -> Self {
        let chips = ChipBar::new(category_options.iter().cloned());
        Self {
            tips: Vec::new(),
            layout,
            filter: FilterState::default(),
            sort: SortState::default(),
            visibility: Visibility::default(),
            chips,
            category_options,
            view,
        }
    }

    pub fn from_config(config: &BoardConfig, view: V) -> Self {
        Self::new(
            TableLayout::from_config(config),
            config.categories.clone(),
            view,
        )
    }

    /// Replace the collection wholesale and render it
    pub fn load(&mut self, tips: Vec<Tip>) {
        self.tips = tips;
        if self.category_options.is_empty() {
            self.chips = ChipBar::new(ChipBar::categories_of(&self.tips));
        }
        tracing::debug!(tips = self.tips.len(), chips = self.chips.len(), "board loaded");
        self.refresh();
    }

    /// Full re-render followed by a filter pass
    pub fn refresh(&mut self) {
        self.view.render_rows(&self.tips, &self.layout, &self.sort);
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.visibility = compute_visibility(&self.tips, &self.filter);
        self.view.apply_visibility(&self.visibility);

        self.chips.sync(self.filter.category_value());
        self.view.sync_controls(&self.filter, &self.chips);

        if self.filter.is_active() {
            if let Some(row) = self.visibility.first_visible() {
                self.view.scroll_to(row);
            }
        }
    }

    /// Update the free-text query (one call per keystroke)
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.apply_filter();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.apply_filter();
    }

    /// Set the risk filter. Ignored for layouts without a risk column.
    pub fn set_risk(&mut self, risk: Option<String>) {
        if !self.layout.has_risk() {
            return;
        }
        self.filter.risk = risk;
        self.apply_filter();
    }

    /// Toggle a quick-filter chip, driving the category filter
    pub fn toggle_chip(&mut self, index: usize) {
        match self.chips.toggle(index) {
            Some(ChipToggle::Select(value)) => self.set_category(Some(value)),
            Some(ChipToggle::Clear) => self.set_category(None),
            None => {}
        }
    }

    /// Reset query, filters and chips, and focus the search field
    pub fn clear(&mut self) {
        self.filter.clear();
        self.chips.reset();
        self.apply_filter();
        self.view.focus_search();
    }

    /// Header click on `column`. Returns `false` if no such column.
    pub fn sort_by_column(&mut self, column: usize) -> bool {
        if self.layout.column(column).is_none() {
            return false;
        }
        let direction = self.sort.click(column);
        sort_tips(&mut self.tips, &self.layout, column, direction);
        self.refresh();
        true
    }

    /// Sort by the column showing `field`
    pub fn sort_by_field(&mut self, field: TipField) -> bool {
        match self.layout.position(field) {
            Some(column) => self.sort_by_column(column),
            None => false,
        }
    }

    /// Whole collection in current order as indented JSON
    pub fn export_json(&self) -> Result<String> {
        export::to_json(&self.tips)
    }

    /// Write `tips-export.json` into `dir`
    pub async fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        export::export_to(&self.tips, dir).await
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    /// Records currently visible, in collection order
    pub fn visible_tips(&self) -> impl Iterator<Item = (usize, &Tip)> {
        self.visibility.indices().map(|i| (i, &self.tips[i]))
    }

    pub fn first_visible(&self) -> Option<usize> {
        self.visibility.first_visible()
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn chips(&self) -> &ChipBar {
        &self.chips
    }

    /// Options for the category selector
    pub fn categories(&self) -> Vec<String> {
        self.chips.chips().iter().map(|c| c.value.clone()).collect()
    }

    /// Options for the risk selector (empty without a risk column)
    pub fn risk_levels(&self) -> Vec<String> {
        if self.layout.has_risk() {
            distinct_values(&self.tips, TipField::Risk)
        } else {
            Vec::new()
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingView, sample_tips};

    fn board() -> TipBoard<RecordingView> {
        let mut board =
            TipBoard::new(TableLayout::standard(), Vec::new(), RecordingView::default());
        board.load(sample_tips());
        board
    }

    #[test]
    fn test_load_renders_then_filters() {
        let board = board();
        assert_eq!(board.view().renders, 1);
        assert_eq!(board.view().visibility.visible_count(), board.tips().len());
        assert!(board.view().scrolled_to.is_none());
    }

    #[test]
    fn test_chips_derived_from_data() {
        let board = board();
        assert_eq!(board.categories(), vec!["Accounts", "Network", "System"]);
    }

    #[test]
    fn test_configured_categories_win() {
        let mut board = TipBoard::new(
            TableLayout::standard(),
            vec!["Network".into()],
            RecordingView::default(),
        );
        board.load(sample_tips());
        assert_eq!(board.categories(), vec!["Network"]);
    }

    #[test]
    fn test_query_scrolls_to_first_match() {
        let mut board = board();
        board.set_query("firewall");
        let first = board.first_visible().unwrap();
        assert_eq!(board.view().scrolled_to, Some(first));
        assert_eq!(board.tips()[first].category, "Network");
    }

    #[test]
    fn test_set_category_syncs_chips() {
        let mut board = board();
        board.set_category(Some("system".into()));
        let selected = board.view().selected_chip.clone();
        assert_eq!(selected.as_deref(), Some("System"));
    }

    #[test]
    fn test_toggle_chip_sets_and_clears_category() {
        let mut board = board();
        let idx = board.categories().iter().position(|c| c == "Network").unwrap();
        board.toggle_chip(idx);
        assert_eq!(board.filter().category_value(), Some("Network"));
        board.toggle_chip(idx);
        assert_eq!(board.filter().category_value(), None);
        assert_eq!(board.visibility().visible_count(), board.tips().len());
    }

    #[test]
    fn test_clear_resets_and_focuses_search() {
        let mut board = board();
        board.set_query("zzz");
        board.toggle_chip(0);
        board.clear();
        assert!(!board.filter().is_active());
        assert!(board.chips().selected().is_none());
        assert_eq!(board.view().focus_requests, 1);
        assert_eq!(board.visibility().visible_count(), board.tips().len());
    }

    #[test]
    fn test_sort_rerenders_and_keeps_filter() {
        let mut board = board();
        board.set_category(Some("Network".into()));
        let before = board.visibility().visible_count();
        assert!(board.sort_by_column(0));
        assert_eq!(board.view().renders, 2);
        assert_eq!(board.visibility().visible_count(), before);
        for (_, tip) in board.visible_tips() {
            assert_eq!(tip.category, "Network");
        }
    }

    #[test]
    fn test_sort_unknown_column_is_noop() {
        let mut board = board();
        assert!(!board.sort_by_column(42));
        assert!(!board.sort_by_field(TipField::Risk));
        assert_eq!(board.view().renders, 1);
    }

    #[test]
    fn test_risk_filter_needs_risk_layout() {
        let mut board = board();
        board.set_risk(Some("High".into()));
        assert!(board.filter().risk.is_none());
        assert!(board.risk_levels().is_empty());

        let mut risky =
            TipBoard::new(TableLayout::with_risk(), Vec::new(), RecordingView::default());
        risky.load(sample_tips());
        risky.set_risk(Some("high".into()));
        assert!(risky.visibility().visible_count() > 0);
        for (_, tip) in risky.visible_tips() {
            assert_eq!(tip.risk.as_deref().map(str::to_lowercase).as_deref(), Some("high"));
        }
    }
}
