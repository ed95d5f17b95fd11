use crate::{Options, RepairOutcome, repair_document};

// Shared test helpers

fn repair(input: &str) -> RepairOutcome {
    repair_document(input, &Options::default())
}

fn fixes(outcome: &RepairOutcome) -> usize {
    outcome.ledger.fixes.len()
}

fn errors(outcome: &RepairOutcome) -> usize {
    outcome.ledger.errors.len()
}

// Submodules (one per pass, plus whole-pipeline properties)
mod brackets;
mod junk;
mod quotes;
mod report;
