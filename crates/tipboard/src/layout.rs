//! Table layout shared by the renderer and the sort engine
//!
//! The layout is an explicit ordered list of columns. Column `i` in the
//! rendered table is always `layout.column(i)`, so a header click maps to a
//! field without any positional guessing.

use std::cmp::Ordering;

use icu_collator::CollatorBorrowed;
use icu_collator::options::{CollatorOptions, Strength};

use crate::config::BoardConfig;
use crate::tip::{Tip, TipField};

/// Compares two field values for sorting
pub type Comparator = fn(&str, &str) -> Ordering;

thread_local! {
    // Root locale at secondary strength: accents count, case does not
    static COLLATOR: Option<CollatorBorrowed<'static>> = {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Secondary);
        match CollatorBorrowed::try_new(Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(error = %e, "collation data unavailable, sorting by code point");
                None
            }
        }
    };
}

/// Locale-aware, case-insensitive comparison (Unicode collation)
pub fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}

/// One table column: header label, the field it shows, and how it sorts
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub field: TipField,
    pub compare: Comparator,
}

impl Column {
    pub const fn new(label: &'static str, field: TipField) -> Self {
        Self {
            label,
            field,
            compare: compare_text,
        }
    }

    /// Field accessor for this column
    pub fn value<'a>(&self, tip: &'a Tip) -> &'a str {
        tip.field(self.field)
    }

    pub fn compare_tips(&self, a: &Tip, b: &Tip) -> Ordering {
        (self.compare)(self.value(a), self.value(b))
    }
}

const STANDARD_COLUMNS: [Column; 5] = [
    Column::new("Topic", TipField::Topic),
    Column::new("Category", TipField::Category),
    Column::new("Description", TipField::Description),
    Column::new("Actions", TipField::Actions),
    Column::new("Resources", TipField::Resources),
];

const RISK_COLUMNS: [Column; 6] = [
    Column::new("Topic", TipField::Topic),
    Column::new("Category", TipField::Category),
    Column::new("Risk", TipField::Risk),
    Column::new("Description", TipField::Description),
    Column::new("Actions", TipField::Actions),
    Column::new("Resources", TipField::Resources),
];

/// Ordered column list for a board variant
#[derive(Debug, Clone)]
pub struct TableLayout {
    columns: Vec<Column>,
}

impl TableLayout {
    /// topic, category, description, actions, resources
    pub fn standard() -> Self {
        Self {
            columns: STANDARD_COLUMNS.to_vec(),
        }
    }

    /// topic, category, risk, description, actions, resources
    pub fn with_risk() -> Self {
        Self {
            columns: RISK_COLUMNS.to_vec(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        if config.show_risk {
            Self::with_risk()
        } else {
            Self::standard()
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of the column showing `field`, if any
    pub fn position(&self, field: TipField) -> Option<usize> {
        self.columns.iter().position(|c| c.field == field)
    }

    pub fn has_risk(&self) -> bool {
        self.position(TipField::Risk).is_some()
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::standard()
    }
}
