use super::*;
use crate::passes::quotes::{self, count_unescaped_quotes};

#[test]
fn quote_counting_tracks_escapes() {
    assert_eq!(count_unescaped_quotes(r#""a""#), 2);
    assert_eq!(count_unescaped_quotes(r#"\"a\""#), 0);
    assert_eq!(count_unescaped_quotes(r#""a \" b""#), 2);
    // An escaped backslash does not escape the following quote.
    assert_eq!(count_unescaped_quotes(r#"\\""#), 1);
    assert_eq!(count_unescaped_quotes("no quotes"), 0);
}

#[test]
fn escapes_html_attribute_quotes() {
    let input = r#"  "Content": "<a href="/x" target="_blank">go</a>","#;
    let out = quotes::apply(input, &Options::default());
    assert_eq!(
        out.text,
        r#"  "Content": "<a href=\"/x\" target=\"_blank\">go</a>","#
    );
    // One aggregate fix for the attributes; the line is balanced afterwards.
    assert!(out.ledger.fixes[0].message.contains("2 HTML attribute"));
    assert!(out.ledger.errors.is_empty());
}

#[test]
fn attribute_escaping_is_idempotent() {
    let input = r#"<a href=\"/x\">go</a>"#;
    let out = quotes::apply(input, &Options::default());
    assert_eq!(out.text, input);
    assert!(out.ledger.is_empty());
}

#[test]
fn attribute_pattern_is_not_scoped_to_content_fields() {
    // Documented limitation: the pattern fires anywhere it matches.
    let input = r#"  "Note": "set width="10" here","#;
    let out = quotes::apply(input, &Options::default());
    assert!(out.text.contains(r#"width=\"10\""#));
}

#[test]
fn repairs_odd_quote_on_content_line() {
    let input = r#"  "Content": "<p>a "quote</p>""#;
    let out = quotes::apply(input, &Options::default());
    assert_eq!(out.text, r#"  "Content": "<p>a \"quote</p>""#);
    assert_eq!(out.ledger.fixes.len(), 1);
    assert!(out.ledger.errors.is_empty());
}

#[test]
fn properly_terminated_content_line_with_odd_count_is_an_error() {
    let input = r#"  "Content": "<p>a "quote</p>","#;
    let out = quotes::apply(input, &Options::default());
    assert_eq!(out.text, input);
    assert!(out.ledger.fixes.is_empty());
    assert_eq!(out.ledger.errors.len(), 1);
}

#[test]
fn odd_quotes_outside_content_are_never_repaired() {
    let input = "  \"Title\": \"broken\n  \"Slug\": \"fine\"";
    let out = quotes::apply(input, &Options::default());
    assert_eq!(out.text, input);
    assert_eq!(out.ledger.errors.len(), 1);
    assert!(out.ledger.errors[0].message.contains("line 1"));
}

#[test]
fn error_snippets_are_bounded() {
    let long = format!("  \"Title\": \"{}", "x".repeat(300));
    let out = quotes::apply(&long, &Options::default());
    let snippet = out.ledger.errors[0].snippet.as_deref().unwrap();
    assert!(snippet.chars().count() <= 103); // 100 chars + ellipsis
    assert!(snippet.ends_with("..."));
}

#[test]
fn content_lines_are_balanced_or_reported_end_to_end() {
    let input = "[\n  {\n  \"ID\": 1,\n  \"Content\": \"<p>a \"quote</p>\"\n  }\n]";
    let outcome = repair(input);
    for line in outcome.text.split('\n') {
        if line.contains("\"Content\":") {
            assert_eq!(count_unescaped_quotes(line) % 2, 0, "unbalanced: {line}");
        }
    }
    assert_eq!(errors(&outcome), 0);
}
