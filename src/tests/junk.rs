use super::*;
use crate::passes::junk;

#[test]
fn removes_fence_and_label_lines() {
    let input = "```json\n[\n  {\"ID\": 1}\n]\n```";
    let out = junk::apply(input, &Options::default());
    assert_eq!(out.text, "[\n  {\"ID\": 1}\n]");
    assert_eq!(out.ledger.fixes.len(), 2);
    assert_eq!(out.ledger.fixes[0].line, Some(1));
    assert_eq!(out.ledger.fixes[1].line, Some(5));
}

#[test]
fn matches_whole_trimmed_line_only() {
    // "json" as a substring of real content must survive.
    let input = "  json  \n{\"format\": \"json\"}\nGenerated json";
    let out = junk::apply(input, &Options::default());
    assert_eq!(out.text, "{\"format\": \"json\"}");
    assert_eq!(out.ledger.fixes.len(), 2);
}

#[test]
fn junk_removal_leaves_rest_untouched_end_to_end() {
    let input = "```json\n[\n  {\"ID\": 1}\n]";
    let outcome = repair(input);
    assert_eq!(outcome.text, "[\n  {\"ID\": 1}\n]");
    assert!(outcome.structurally_valid);
    assert_eq!(errors(&outcome), 0);
}

#[test]
fn clean_input_is_untouched() {
    let input = "[\n  {\"ID\": 1}\n]";
    let out = junk::apply(input, &Options::default());
    assert_eq!(out.text, input);
    assert!(out.ledger.is_empty());
}
