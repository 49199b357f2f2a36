//! Integration tests for board behavior: filtering, sorting, rendering
//!
//! Covers the end-to-end scenarios a user drives through a front end.

use tipboard::filter::{FilterState, compute_visibility};
use tipboard::layout::TableLayout;
use tipboard::loader::{HttpSource, load_or_empty};
use tipboard::render::HtmlView;
use tipboard::sort::{SortDirection, sort_tips};
use tipboard::testing::{RecordingView, sample_tips, tip};
use tipboard::{Tip, TipBoard};

// =============================================================================
// Fixtures
// =============================================================================

fn alpha_beta() -> Vec<Tip> {
    vec![
        tip("Alpha", "Net", "d1", "a1"),
        tip("Beta", "Sys", "d2", "a2"),
    ]
}

fn html_board(tips: Vec<Tip>) -> TipBoard<HtmlView> {
    let mut board = TipBoard::new(TableLayout::standard(), Vec::new(), HtmlView::new());
    board.load(tips);
    board
}

fn topics(tips: &[Tip]) -> Vec<&str> {
    tips.iter().map(|t| t.topic.as_str()).collect()
}

// =============================================================================
// Filter properties
// =============================================================================

#[test]
fn test_empty_query_shows_all() {
    let tips = sample_tips();
    let vis = compute_visibility(&tips, &FilterState::new().with_query(""));
    assert_eq!(vis.visible_count(), tips.len());
}

#[test]
fn test_query_case_does_not_matter() {
    let tips = sample_tips();
    for query in ["mfa", "Firewall", "guest wi-fi", "EXAMPLE.ORG", "nothing-here"] {
        let lower = compute_visibility(&tips, &FilterState::new().with_query(query.to_lowercase()));
        let upper = compute_visibility(&tips, &FilterState::new().with_query(query.to_uppercase()));
        let as_is = compute_visibility(&tips, &FilterState::new().with_query(query));
        assert_eq!(lower, upper, "query {query}");
        assert_eq!(lower, as_is, "query {query}");
    }
}

#[test]
fn test_category_scenario_shows_only_beta() {
    let mut board = html_board(alpha_beta());
    board.set_query("");
    board.set_category(Some("Sys".into()));

    let visible: Vec<_> = board.visible_tips().map(|(_, t)| t.topic.as_str()).collect();
    assert_eq!(visible, vec!["Beta"]);
    assert!(board.view().body().contains(r#"<tr data-row="0" style="display:none">"#));
    assert!(board.view().body().contains(r#"<tr data-row="1"><td>Beta</td>"#));
}

#[test]
fn test_filtering_never_removes_records() {
    let mut board = html_board(sample_tips());
    board.set_query("no such tip anywhere");
    assert_eq!(board.visibility().visible_count(), 0);
    assert_eq!(board.tips().len(), sample_tips().len());
    assert_eq!(board.view().body().matches("<tr ").count(), sample_tips().len());
}

// =============================================================================
// Sort properties
// =============================================================================

#[test]
fn test_header_click_scenario() {
    let mut board = html_board(alpha_beta());
    let topic = 0;

    board.sort_by_column(topic);
    assert_eq!(topics(board.tips()), vec!["Alpha", "Beta"]);

    board.sort_by_column(topic);
    assert_eq!(topics(board.tips()), vec!["Beta", "Alpha"]);

    board.sort_by_column(topic);
    assert_eq!(topics(board.tips()), vec!["Alpha", "Beta"]);
}

#[test]
fn test_two_clicks_reverse_one_click() {
    let layout = TableLayout::with_risk();
    // Topics are unique, so every column keyed on topic has no duplicates
    let mut once = TipBoard::new(layout.clone(), Vec::new(), RecordingView::default());
    once.load(sample_tips());
    once.sort_by_column(0);

    let mut twice = TipBoard::new(layout, Vec::new(), RecordingView::default());
    twice.load(sample_tips());
    twice.sort_by_column(0);
    twice.sort_by_column(0);

    let mut reversed = once.tips().to_vec();
    reversed.reverse();
    assert_eq!(twice.tips(), reversed.as_slice());
}

#[test]
fn test_ascending_sort_is_idempotent() {
    let layout = TableLayout::standard();
    for column in 0..layout.len() {
        let mut tips = sample_tips();
        sort_tips(&mut tips, &layout, column, SortDirection::Ascending);
        let once = tips.clone();
        sort_tips(&mut tips, &layout, column, SortDirection::Ascending);
        assert_eq!(tips, once, "column {column}");
    }
}

#[test]
fn test_switching_column_starts_ascending() {
    let mut board = html_board(alpha_beta());
    board.sort_by_column(0);
    board.sort_by_column(0);
    board.sort_by_column(1);
    assert_eq!(board.sort().direction, SortDirection::Ascending);
    assert_eq!(topics(board.tips()), vec!["Alpha", "Beta"]);
    assert!(board.view().header().contains("aria-sort=\"ascending\">Category"));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_script_topic_renders_as_text() {
    let board = html_board(vec![tip("<script>alert(1)</script>", "Net", "d", "a")]);
    let body = board.view().body();
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!body.contains("<script>"));
}

#[test]
fn test_risk_layout_renders_badges() {
    let mut board = TipBoard::new(TableLayout::with_risk(), Vec::new(), HtmlView::new());
    board.load(vec![
        tip("A", "Net", "", "").with_risk("Low"),
        tip("B", "Net", "", "").with_risk("Critical"),
        tip("C", "Net", "", ""),
    ]);
    let body = board.view().body();
    assert!(body.contains(r#"<span class="badge badge-low">Low</span>"#));
    assert!(body.contains(r#"<span class="badge badge-moderate">Critical</span>"#));
    assert!(body.contains(r#"<span class="badge badge-moderate"></span>"#));
}

#[test]
fn test_chips_rendered_and_synced() {
    let mut board = html_board(alpha_beta());
    board.set_category(Some("net".into()));
    assert!(board.view().chips().contains(r#"class="chip selected" data-value="Net""#));
    board.clear();
    assert!(!board.view().chips().contains("selected"));
}

// =============================================================================
// Load failure
// =============================================================================

#[tokio::test]
async fn test_failed_retrieval_renders_zero_rows() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let source = HttpSource::new(&format!("http://127.0.0.1:{port}/data/tips.json")).unwrap();
    let tips = load_or_empty(&source).await;

    let board = html_board(tips);
    assert!(board.tips().is_empty());
    assert_eq!(board.view().body(), "");
    assert!(board.view().document().contains("<tbody>\n</tbody>"));
}
