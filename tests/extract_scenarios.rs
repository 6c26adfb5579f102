// tests/extract_scenarios.rs
//
// Pure extraction over in-memory documents. No network.
//
mod common;

use common::{page_with_table, SAMPLE_PAGE};
use jft_scrape::config::consts::{DEFAULT_REFLECTION, DEFAULT_TITLE};
use jft_scrape::extract::table_lines;
use jft_scrape::{extract, extract_with, ExtractError, MeditationRecord, PositionalClassifier};

#[test]
fn grateful_scenario() {
    let doc = page_with_table(
        "June 5\nDaily Reflections\nKeep coming back.\nLine A.\nLine B.\nJust for today: I will be grateful.",
    );
    let got = extract(&doc).unwrap();
    let want = MeditationRecord {
        date: "June 5".into(),
        title: "Daily Reflections".into(),
        quote: "Keep coming back.".into(),
        body: vec!["Line A.".into(), "Line B.".into()],
        reflection: "I will be grateful.".into(),
        success: true,
    };
    assert_eq!(got, want);
}

#[test]
fn realistic_page() {
    let got = extract(SAMPLE_PAGE).unwrap();
    assert_eq!(got.date, "June 5, Page 162");
    assert_eq!(got.title, "Daily Reflections");
    assert_eq!(got.quote, "\"Keep coming back.\"");
    assert_eq!(
        got.body,
        vec!["Basic Text, p. 86", "We came to NA & found hope.", "It's one day at a time."]
    );
    assert_eq!(got.reflection, "I will be grateful.");
    assert!(!got.body.iter().any(|l| l.contains("Copyright")));
}

#[test]
fn marker_is_case_insensitive() {
    let doc = page_with_table("d\nt\nq\np1\np2\np3\nJUST FOR TODAY:stay.\nafter");
    let got = extract(&doc).unwrap();
    assert_eq!(got.body, vec!["p1", "p2", "p3"]);
    assert_eq!(got.reflection, "stay.");
}

#[test]
fn no_table_is_parse_error() {
    let err = extract("<html><body><p>moved</p></body></html>").unwrap_err();
    assert!(matches!(err, ExtractError::Parse(_)));
}

#[test]
fn empty_and_blank_tables() {
    for doc in ["<table></table>", "<table>  <br> &nbsp; <tr><td> </td></tr>\n</table>"] {
        let got = extract_with(doc, &PositionalClassifier, "June 5").unwrap();
        assert_eq!(got.date, "June 5");
        assert_eq!(got.title, DEFAULT_TITLE);
        assert!(got.body.is_empty());
        assert_eq!(got.reflection, DEFAULT_REFLECTION);
        assert!(got.success);
    }
}

#[test]
fn entities_decode_once() {
    let lines = table_lines("<table>&amp;amp;<br>&lt;b&gt;bold&lt;/b&gt;</table>").unwrap();
    assert_eq!(lines, vec!["&amp;", "<b>bold</b>"]);
}

#[test]
fn byte_order_mark_line_does_not_shift_fields() {
    assert_eq!(table_lines("<table>a<br>\u{feff}<br>b</table>").unwrap(), vec!["a", "b"]);

    let doc = page_with_table("\u{feff}\nJune 5\nT\nQ\nA\nJust for today: rest.");
    let got = extract(&doc).unwrap();
    assert_eq!(got.date, "June 5");
    assert_eq!(got.title, "T");
    assert_eq!(got.body, vec!["A"]);
}

#[test]
fn no_marker_last_line_is_reflection() {
    let doc = page_with_table("d\nt\nq\nA\nB\nNot a reflection");
    let got = extract(&doc).unwrap();
    assert_eq!(got.body, vec!["A", "B"]);
    assert_eq!(got.reflection, "Not a reflection");
}
