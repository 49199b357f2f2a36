//! Detail view for a single tip

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tipboard::Tip;

pub struct TipDetailView {
    pub tip: Option<Tip>,
    pub scroll: u16,
}

impl TipDetailView {
    pub fn new() -> Self {
        Self {
            tip: None,
            scroll: 0,
        }
    }

    pub fn set_tip(&mut self, tip: Tip) {
        self.tip = Some(tip);
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.tip = None;
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Body text for the selected tip
    pub fn content(&self) -> Option<String> {
        let tip = self.tip.as_ref()?;
        let mut content = format!(
            "Topic: {}\n\
             Category: {}\n\
             Risk: {}\n\n\
             ─── Description ───\n\n\
             {}\n\n\
             ─── Actions ───\n\n\
             {}",
            tip.topic,
            tip.category,
            tip.risk.as_deref().unwrap_or("-"),
            tip.description,
            tip.actions,
        );
        if let Some(resource) = tip.resources.as_deref().filter(|r| !r.is_empty()) {
            content.push_str("\n\n─── Resource ───\n\n");
            content.push_str(resource);
        }
        Some(content)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Tip Details (Esc to close, j/k to scroll)");

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = match self.content() {
            Some(content) => Paragraph::new(content)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            None => Paragraph::new("No tip selected"),
        };
        frame.render_widget(paragraph, inner);
    }
}

impl Default for TipDetailView {
    fn default() -> Self {
        Self::new()
    }
}
