use super::*;
use crate::passes::brackets;

#[test]
fn removes_stray_bracket_before_new_object() {
    let input = "[\n  {\"ID\": 1},\n]\n  {\"ID\": 2}\n]";
    let out = brackets::apply(input, &Options::default());
    assert_eq!(out.text, "[\n  {\"ID\": 1},\n  {\"ID\": 2}\n]");
    assert_eq!(out.ledger.fixes.len(), 1);
    assert_eq!(out.ledger.fixes[0].line, Some(3));
}

#[test]
fn removes_stray_bracket_before_record_start_key() {
    let input = "]\n\"ID\": 7,";
    let out = brackets::apply(input, &Options::default());
    assert_eq!(out.text, "\"ID\": 7,");
}

#[test]
fn keeps_bracket_closing_a_real_array() {
    let input = "[\n  [1, 2]\n]\n}";
    let out = brackets::apply(input, &Options::default());
    assert_eq!(out.text, input);
    assert!(out.ledger.is_empty());
}

#[test]
fn skips_blank_lines_in_lookahead() {
    let input = "]\n\n\n{\"ID\": 1}";
    let out = brackets::apply(input, &Options::default());
    assert_eq!(out.text, "\n\n{\"ID\": 1}");
    assert_eq!(out.ledger.fixes.len(), 1);
}

#[test]
fn keeps_bracket_when_lookahead_window_is_exhausted() {
    // Five blank lines exceed the 4-line window; no verdict means keep.
    let input = "]\n\n\n\n\n{\"ID\": 1}";
    let out = brackets::apply(input, &Options::default());
    assert_eq!(out.text, input);
    assert!(out.ledger.is_empty());
}

#[test]
fn keeps_bracket_before_ambiguous_content() {
    let input = "]\n\"Title\": \"x\",";
    let out = brackets::apply(input, &Options::default());
    assert_eq!(out.text, input);
    assert!(out.ledger.is_empty());
}

#[test]
fn bracket_precision_end_to_end() {
    // `]` before `{` is removed; `]` before `]` survives.
    let removed = repair("[\n  {\"ID\": 1},\n]\n  {\"ID\": 2}\n]");
    assert!(removed.structurally_valid);
    assert!(removed.text.matches(']').count() == 1);

    let kept = repair("[\n  [1, 2]\n]");
    assert_eq!(kept.text, "[\n  [1, 2]\n]");
    assert_eq!(fixes(&kept), 0);
}
