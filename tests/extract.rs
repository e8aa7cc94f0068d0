// tests/extract.rs
//
// Schedule/roster extraction against saved pages (no network).
//
mod common;

use common::FIXTURE;
use scraper::Html;
use team_sheet::scrape::extract_from_html;
use team_sheet::specs::schedule::{read_table, to_games};
use team_sheet::ParseError;

#[test]
fn fixture_schedule_is_mapped() {
    let team = extract_from_html(FIXTURE).unwrap();
    assert_eq!(team.schedule.len(), 2);

    let first = &team.schedule[0];
    assert_eq!(first.date, "Sat Oct 5");
    assert_eq!(first.time, "6:30 PM");
    assert_eq!(first.field, "Magnuson #7");
    assert_eq!(first.opponent, "Hucksters");
    assert_eq!(first.jersey, "Dark");

    let second = &team.schedule[1];
    assert_eq!(second.date, "Sun Oct 13");
    assert_eq!(second.time, "7:00 PM");
    assert_eq!(second.field, "Lower Woodland");
    assert_eq!(second.opponent, "Bye Week");
    // merged Opponent cell pushes an empty filler into Jersey
    assert_eq!(second.jersey, "");
}

#[test]
fn colspan_keeps_columns_aligned() {
    let doc = Html::parse_document(FIXTURE);
    let raw = read_table(&doc).unwrap();
    assert_eq!(raw.headers, vec!["When", "Field", "Opponent", "Jersey", "Result"]);
    assert_eq!(raw.rows.len(), 2);
    for row in &raw.rows {
        assert_eq!(row.len(), raw.headers.len());
    }
    assert_eq!(raw.rows[1][2], "Bye Week (TBD)");
    assert_eq!(raw.rows[1][3], "");
    assert_eq!(raw.rows[1][4], "-");
}

#[test]
fn fixture_rosters_in_page_order() {
    let team = extract_from_html(FIXTURE).unwrap();
    assert_eq!(team.mmp, vec!["Alice", "Bob"]);
    assert_eq!(team.fmp, vec!["Cara"]);
    assert!(team.is_mixed());
}

#[test]
fn missing_panels_give_empty_rosters() {
    let html = FIXTURE
        .replace("cpMain_cpMain_pnlMen", "somethingElse")
        .replace("<ol>\n<li>Cara", "<ul>\n<li>Cara");
    let team = extract_from_html(&html).unwrap();
    assert!(team.mmp.is_empty());
    assert!(team.fmp.is_empty());
    assert_eq!(team.schedule.len(), 2);
}

#[test]
fn missing_table_is_a_parse_error() {
    let html = FIXTURE.replace("rgMasterTable", "rgOtherTable");
    match extract_from_html(&html) {
        Err(ParseError::MissingTable) => {}
        other => panic!("expected MissingTable, got {other:?}"),
    }
}

#[test]
fn missing_panels_and_table_still_fails() {
    let html = "<html><body><p>Nothing here</p></body></html>";
    assert!(matches!(extract_from_html(html), Err(ParseError::MissingTable)));
}

#[test]
fn missing_required_column_is_reported() {
    let html = FIXTURE.replace(">Jersey</th>", ">Shirt</th>");
    match extract_from_html(&html) {
        Err(ParseError::MissingColumn(name)) => assert_eq!(name, "Jersey"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn header_only_table_has_no_games() {
    let html = r#"<table class="rgMasterTable"><tr><th>When</th><th>Field</th><th>Opponent</th><th>Jersey</th></tr></table>
        <div id="cpMain_cpMain_pnlMen"><ol><li>Dan</li></ol></div>"#;
    let team = extract_from_html(html).unwrap();
    assert!(team.schedule.is_empty());
    assert_eq!(team.mmp, vec!["Dan"]);
    assert!(team.fmp.is_empty());
}

#[test]
fn table_without_headers_is_rejected() {
    let html = r#"<table class="rgMasterTable"><tr><td>x</td></tr></table>"#;
    assert!(matches!(extract_from_html(html), Err(ParseError::MissingHeaders)));
}

#[test]
fn short_rows_read_missing_cells_as_empty() {
    let html = r#"<table class="rgMasterTable">
        <tr><th>When</th><th>Field</th><th>Opponent</th><th>Jersey</th></tr>
        <tr><td>Mon 6/2
        8:00 PM</td></tr></table>"#;
    let doc = Html::parse_document(html);
    let games = to_games(&read_table(&doc).unwrap()).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].date, "Mon 6/2");
    assert_eq!(games[0].time, "8:00 PM");
    assert_eq!(games[0].opponent, "");
}
