//! Filter engine for the tip table
//!
//! Visibility is a pure function of (collection, filter state). Filtering
//! never removes records; it only decides which rows the view shows.

use crate::tip::Tip;

/// Active search query and discrete filters.
///
/// Discrete filters are optional - when `None` (or empty), that filter is not
/// applied. All set conditions are combined with AND logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query, matched as a case-insensitive substring
    pub query: String,
    /// Exact (case-insensitive) category match
    pub category: Option<String>,
    /// Exact (case-insensitive) risk match
    pub risk: Option<String>,
}

impl FilterState {
    /// Create a new empty filter (everything visible)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_risk(mut self, risk: impl Into<String>) -> Self {
        self.risk = Some(risk.into());
        self
    }

    /// The query as it is matched: trimmed
    pub fn effective_query(&self) -> &str {
        self.query.trim()
    }

    pub fn category_value(&self) -> Option<&str> {
        set_value(&self.category)
    }

    pub fn risk_value(&self) -> Option<&str> {
        set_value(&self.risk)
    }

    /// True if any condition would hide a row
    pub fn is_active(&self) -> bool {
        !self.effective_query().is_empty()
            || self.category_value().is_some()
            || self.risk_value().is_some()
    }

    /// Reset query and all discrete filters
    pub fn clear(&mut self) {
        self.query.clear();
        self.category = None;
        self.risk = None;
    }

    /// Whether a single record passes every set condition
    pub fn matches(&self, tip: &Tip) -> bool {
        self.matcher().matches(tip)
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            needle: self.effective_query().to_lowercase(),
            category: self.category_value(),
            risk: self.risk_value(),
        }
    }
}

fn set_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Query lower-cased once per pass
struct Matcher<'a> {
    needle: String,
    category: Option<&'a str>,
    risk: Option<&'a str>,
}

impl Matcher<'_> {
    fn matches(&self, tip: &Tip) -> bool {
        if !self.needle.is_empty() && !tip.haystack().contains(&self.needle) {
            return false;
        }
        if let Some(category) = self.category {
            if tip.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(risk) = self.risk {
            let value = tip.risk.as_deref().unwrap_or("");
            if value.to_lowercase() != risk.to_lowercase() {
                return false;
            }
        }
        true
    }
}

/// Per-row visibility, index-aligned with the collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility(Vec<bool>);

impl Visibility {
    /// Everything visible
    pub fn all(len: usize) -> Self {
        Self(vec![true; len])
    }

    pub fn is_visible(&self, row: usize) -> bool {
        self.0.get(row).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.0.iter().filter(|v| **v).count()
    }

    pub fn first_visible(&self) -> Option<usize> {
        self.0.iter().position(|v| *v)
    }

    /// Row indices that are visible, in collection order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// Decide visibility for every record
pub fn compute_visibility(tips: &[Tip], filter: &FilterState) -> Visibility {
    let matcher = filter.matcher();
    let visibility = Visibility(tips.iter().map(|t| matcher.matches(t)).collect());
    tracing::debug!(
        query = filter.effective_query(),
        category = filter.category_value(),
        risk = filter.risk_value(),
        visible = visibility.visible_count(),
        total = tips.len(),
        "filter pass"
    );
    visibility
}
