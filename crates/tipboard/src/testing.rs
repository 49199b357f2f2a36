//! Test utilities for tipboard - fixtures and a recording view
//!
//! Shared by unit tests and the integration tests under `tests/`.

use crate::board::BoardView;
use crate::chips::ChipBar;
use crate::filter::{FilterState, Visibility};
use crate::layout::TableLayout;
use crate::sort::SortState;
use crate::tip::Tip;

/// Build a tip from its four text fields
pub fn tip(topic: &str, category: &str, description: &str, actions: &str) -> Tip {
    Tip::new(topic, category, description, actions)
}

/// A small, realistic collection spanning three categories and three risks
pub fn sample_tips() -> Vec<Tip> {
    vec![
        tip(
            "Enable host firewall",
            "Network",
            "Block unsolicited inbound connections",
            "Turn on the OS firewall and deny by default",
        )
        .with_risk("High")
        .with_resources("https://example.org/firewall"),
        tip(
            "Use a password manager",
            "Accounts",
            "Unique credentials for every service",
            "Install a manager and rotate reused passwords",
        )
        .with_risk("Medium"),
        tip(
            "Patch regularly",
            "System",
            "Most exploits target known vulnerabilities",
            "Enable automatic updates",
        )
        .with_risk("High")
        .with_resources("https://example.org/patching"),
        tip(
            "Segment guest Wi-Fi",
            "Network",
            "Keep visitors off the internal LAN",
            "Create a separate SSID with client isolation",
        )
        .with_risk("Low"),
        tip(
            "Turn on MFA",
            "Accounts",
            "A second factor stops most credential stuffing",
            "Prefer hardware keys or authenticator apps",
        )
        .with_risk("high"),
    ]
}

/// [`BoardView`] that records every callback, for asserting on board behavior
#[derive(Debug, Default)]
pub struct RecordingView {
    /// Number of full row renders
    pub renders: usize,
    /// Topics in the order last rendered
    pub rows: Vec<String>,
    pub visibility: Visibility,
    pub filter: FilterState,
    /// Value of the selected chip after the last sync
    pub selected_chip: Option<String>,
    pub scrolled_to: Option<usize>,
    pub focus_requests: usize,
}

impl BoardView for RecordingView {
    fn render_rows(&mut self, tips: &[Tip], _layout: &TableLayout, _sort: &SortState) {
        self.renders += 1;
        self.rows = tips.iter().map(|t| t.topic.clone()).collect();
    }

    fn apply_visibility(&mut self, visibility: &Visibility) {
        self.visibility = visibility.clone();
    }

    fn sync_controls(&mut self, filter: &FilterState, chips: &ChipBar) {
        self.filter = filter.clone();
        self.selected_chip = chips.selected().map(|c| c.value.clone());
    }

    fn scroll_to(&mut self, row: usize) {
        self.scrolled_to = Some(row);
    }

    fn focus_search(&mut self) {
        self.focus_requests += 1;
    }
}
