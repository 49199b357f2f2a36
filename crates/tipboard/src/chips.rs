//! Quick-filter chips for the category filter
//!
//! Single-selection toggles. The chip bar never owns the filter value; it is
//! synchronized from it after every change.

use crate::tip::{Tip, TipField, distinct_values};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// Text shown on the chip
    pub label: String,
    /// Filter value the chip sets
    pub value: String,
    pub selected: bool,
}

/// Outcome of toggling a chip: the category filter value to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipToggle {
    /// Chip became active, set the category filter to this value
    Select(String),
    /// Active chip was deactivated, clear the category filter
    Clear,
}

#[derive(Debug, Clone, Default)]
pub struct ChipBar {
    chips: Vec<Chip>,
}

impl ChipBar {
    /// One chip per option. Empty options (the "All" entry) are skipped.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let chips = options
            .into_iter()
            .map(Into::into)
            .filter(|value: &String| !value.is_empty())
            .map(|value| Chip {
                label: value.clone(),
                value,
                selected: false,
            })
            .collect();
        Self { chips }
    }

    /// Distinct categories present in `tips`
    pub fn categories_of(tips: &[Tip]) -> Vec<String> {
        distinct_values(tips, TipField::Category)
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn selected(&self) -> Option<&Chip> {
        self.chips.iter().find(|c| c.selected)
    }

    /// Toggle chip `index`. Returns `None` for an out-of-range index.
    pub fn toggle(&mut self, index: usize) -> Option<ChipToggle> {
        let now_selected = !self.chips.get(index)?.selected;
        for (i, chip) in self.chips.iter_mut().enumerate() {
            chip.selected = i == index && now_selected;
        }
        if now_selected {
            Some(ChipToggle::Select(self.chips[index].value.clone()))
        } else {
            Some(ChipToggle::Clear)
        }
    }

    /// Select the chip matching `value` (case-insensitively), or none
    pub fn sync(&mut self, value: Option<&str>) {
        let wanted = value.unwrap_or("").to_lowercase();
        for chip in &mut self.chips {
            chip.selected = !wanted.is_empty() && chip.value.to_lowercase() == wanted;
        }
    }

    /// Deselect every chip
    pub fn reset(&mut self) {
        for chip in &mut self.chips {
            chip.selected = false;
        }
    }
}
