//! Column sorting
//!
//! Header clicks toggle a binary direction keyed on "same column as last
//! time". The collection itself is reordered; there is no display-only sort.

use crate::layout::TableLayout;
use crate::tip::Tip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Last sorted column and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<usize>,
    pub direction: SortDirection,
}

impl SortState {
    /// Register a header click and return the direction to sort with.
    /// Same column flips, a different column starts ascending.
    pub fn click(&mut self, column: usize) -> SortDirection {
        let direction = if self.column == Some(column) {
            self.direction.flip()
        } else {
            SortDirection::Ascending
        };
        self.column = Some(column);
        self.direction = direction;
        direction
    }

    /// Direction for `column` if it is the active sort column
    pub fn direction_for(&self, column: usize) -> Option<SortDirection> {
        (self.column == Some(column)).then_some(self.direction)
    }
}

/// Stable in-place sort of `tips` by the given layout column.
/// Returns `false` (leaving `tips` untouched) if the column doesn't exist.
pub fn sort_tips(
    tips: &mut [Tip],
    layout: &TableLayout,
    column: usize,
    direction: SortDirection,
) -> bool {
    let Some(col) = layout.column(column) else {
        return false;
    };

    tips.sort_by(|a, b| {
        let ord = col.compare_tips(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    tracing::debug!(
        column = col.label,
        direction = direction.as_str(),
        rows = tips.len(),
        "sorted tips"
    );
    true
}
