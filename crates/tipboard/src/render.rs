//! HTML rendering of the tip table
//!
//! Every text field is escaped before it reaches markup, and resource URLs
//! only ever appear inside an `href`. The body is always regenerated from
//! scratch; there is no incremental patching.

use crate::board::BoardView;
use crate::chips::ChipBar;
use crate::filter::{FilterState, Visibility};
use crate::layout::TableLayout;
use crate::sort::SortState;
use crate::tip::{Tip, TipField};

/// Escape text for HTML element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Characters a URI may carry verbatim (JavaScript `encodeURI` semantics)
fn is_uri_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || ";,/?:@&=+$-_.!~*'()#".contains(c)
}

/// Percent-encode a URI, leaving its structural characters intact
pub fn encode_uri(uri: &str) -> String {
    let mut out = String::with_capacity(uri.len());
    let mut buf = [0u8; 4];
    for c in uri.chars() {
        if is_uri_safe(c) {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}

/// Value for an `href` attribute: percent-encoded, then attribute-escaped
pub fn escape_href(uri: &str) -> String {
    escape_html(&encode_uri(uri))
}

/// Risk badge bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskClass {
    Low,
    Moderate,
    High,
}

impl RiskClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskClass::Low => "low",
            RiskClass::Moderate => "moderate",
            RiskClass::High => "high",
        }
    }
}

/// Classify a risk label by case-insensitive substring. "low" wins over
/// "high" when both appear; anything else (or nothing) is moderate.
pub fn classify_risk(risk: Option<&str>) -> RiskClass {
    let Some(risk) = risk else {
        return RiskClass::Moderate;
    };
    let lower = risk.to_lowercase();
    if lower.contains("low") {
        RiskClass::Low
    } else if lower.contains("high") {
        RiskClass::High
    } else {
        RiskClass::Moderate
    }
}

/// Badge markup for a risk value, showing the original text
pub fn risk_badge(risk: Option<&str>) -> String {
    let class = classify_risk(risk);
    format!(
        r#"<span class="badge badge-{}">{}</span>"#,
        class.as_str(),
        escape_html(risk.unwrap_or(""))
    )
}

fn resource_link(resources: Option<&str>) -> String {
    match resources {
        Some(url) if !url.is_empty() => format!(
            r#"<a href="{}" target="_blank" rel="noopener">Link</a>"#,
            escape_href(url)
        ),
        _ => String::new(),
    }
}

fn render_cell(tip: &Tip, field: TipField) -> String {
    match field {
        TipField::Resources => resource_link(tip.resources.as_deref()),
        TipField::Risk => risk_badge(tip.risk.as_deref()),
        other => escape_html(tip.field(other)),
    }
}

/// Rebuild the table body: one row per record, columns in layout order.
/// Rows hidden by `visibility` are emitted with `display:none`.
pub fn render_rows(tips: &[Tip], layout: &TableLayout, visibility: &Visibility) -> String {
    let mut html = String::new();
    for (i, tip) in tips.iter().enumerate() {
        if visibility.is_visible(i) {
            html.push_str(&format!(r#"<tr data-row="{i}">"#));
        } else {
            html.push_str(&format!(r#"<tr data-row="{i}" style="display:none">"#));
        }
        for column in layout.columns() {
            html.push_str(&format!("<td>{}</td>", render_cell(tip, column.field)));
        }
        html.push_str("</tr>\n");
    }
    html
}

/// Header row with sort markers on the active column
pub fn render_header(layout: &TableLayout, sort: &SortState) -> String {
    let mut html = String::from("<tr>");
    for (i, column) in layout.columns().iter().enumerate() {
        match sort.direction_for(i) {
            Some(dir) => html.push_str(&format!(
                r#"<th data-column="{i}" aria-sort="{}">{} {}</th>"#,
                dir.as_str(),
                escape_html(column.label),
                dir.arrow()
            )),
            None => html.push_str(&format!(
                r#"<th data-column="{i}">{}</th>"#,
                escape_html(column.label)
            )),
        }
    }
    html.push_str("</tr>");
    html
}

/// Quick-filter chip buttons
pub fn render_chips(chips: &ChipBar) -> String {
    let mut html = String::new();
    for chip in chips.chips() {
        let class = if chip.selected { "chip selected" } else { "chip" };
        html.push_str(&format!(
            r#"<button type="button" class="{class}" data-value="{}">{}</button>"#,
            escape_html(&chip.value),
            escape_html(&chip.label)
        ));
    }
    html
}

/// [`BoardView`] that mirrors the board into HTML fragments
#[derive(Debug, Clone, Default)]
pub struct HtmlView {
    layout: TableLayout,
    tips: Vec<Tip>,
    header: String,
    body: String,
    chips: String,
    visibility: Visibility,
    scrolled_to: Option<usize>,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<thead>` contents
    pub fn header(&self) -> &str {
        &self.header
    }

    /// `<tbody>` contents
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Chip bar contents
    pub fn chips(&self) -> &str {
        &self.chips
    }

    /// Row the view was last asked to scroll to
    pub fn scrolled_to(&self) -> Option<usize> {
        self.scrolled_to
    }

    pub fn visible_rows(&self) -> usize {
        self.visibility.visible_count()
    }

    /// Complete `<table>` element
    pub fn document(&self) -> String {
        format!(
            "<table id=\"tips-table\">\n<thead>{}</thead>\n<tbody>\n{}</tbody>\n</table>\n",
            self.header, self.body
        )
    }
}

impl BoardView for HtmlView {
    fn render_rows(&mut self, tips: &[Tip], layout: &TableLayout, sort: &SortState) {
        self.layout = layout.clone();
        self.tips = tips.to_vec();
        self.header = render_header(layout, sort);
        self.visibility = Visibility::all(tips.len());
        self.body = render_rows(&self.tips, &self.layout, &self.visibility);
    }

    fn apply_visibility(&mut self, visibility: &Visibility) {
        self.visibility = visibility.clone();
        self.body = render_rows(&self.tips, &self.layout, &self.visibility);
    }

    fn sync_controls(&mut self, _filter: &FilterState, chips: &ChipBar) {
        self.chips = render_chips(chips);
    }

    fn scroll_to(&mut self, row: usize) {
        self.scrolled_to = Some(row);
    }
}
