use tipboard::chips::ChipBar;
use tipboard::filter::{FilterState, Visibility};
use tipboard::layout::TableLayout;
use tipboard::sort::SortState;
use tipboard::{BoardView, Tip};

#[derive(Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Board view for non-interactive commands: the CLI reads board state after
/// each operation instead of reacting to callbacks
#[derive(Debug, Default)]
pub struct HeadlessView;

impl BoardView for HeadlessView {
    fn render_rows(&mut self, _tips: &[Tip], _layout: &TableLayout, _sort: &SortState) {}

    fn apply_visibility(&mut self, _visibility: &Visibility) {}

    fn sync_controls(&mut self, _filter: &FilterState, _chips: &ChipBar) {}
}
