use crate::{Ledger, RepairReport};

fn render(ledger: &Ledger) -> String {
    RepairReport::new(ledger, 10).to_string()
}

#[test]
fn clean_document_report() {
    let ledger = Ledger::new();
    let text = render(&ledger);
    assert!(text.contains("fixes applied: 0"));
    assert!(text.contains("errors found:  0"));
    assert!(text.contains("already well-formed"));
    assert!(!text.contains("Fixes:"));
    assert!(!text.contains("Errors"));
}

#[test]
fn partial_repair_report() {
    let mut ledger = Ledger::new();
    ledger.fix_at(3, "inserted missing comma after object");
    let text = render(&ledger);
    assert!(text.contains("fixes applied: 1"));
    assert!(text.contains("1. inserted missing comma after object (line 3)"));
    assert!(text.contains("partially repaired"));
    assert!(!text.contains("manual editing"));
}

#[test]
fn errors_trigger_manual_editing_hint() {
    let mut ledger = Ledger::new();
    ledger.error_with_snippet("unpaired quotes on line 7", "\"Content\": \"bad", 100);
    let text = render(&ledger);
    assert!(text.contains("errors found:  1"));
    assert!(text.contains("unpaired quotes on line 7"));
    assert!(text.contains("\"Content\": \"bad"));
    assert!(text.contains("manual editing"));
}

#[test]
fn long_ledgers_are_elided() {
    let mut ledger = Ledger::new();
    for i in 0..13 {
        ledger.fix_at(i + 1, format!("fix {}", i));
        ledger.error(format!("error {}", i));
    }
    let text = render(&ledger);
    assert!(text.contains("... and 3 more fixes"));
    assert!(text.contains("... and 3 more errors"));
    assert!(text.contains("fix 9"));
    assert!(!text.contains("fix 10"));
    assert!(text.contains("error 9"));
    assert!(!text.contains("error 10"));
}
