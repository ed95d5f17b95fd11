//! jsonmend repairs JSON-like text damaged by an imperfect upstream
//! generator: markdown fences glued onto the document, string fields split
//! across lines without a closing quote, unescaped quotes inside HTML
//! bodies, missing commas between array records.
//!
//! The repair is a fixed sequence of text-level passes, each targeting one
//! corruption class, followed by a real parse as the final verdict. Passes
//! are heuristics: every change lands in a fix ledger and everything a pass
//! saw but could not safely rewrite lands in an error ledger, so callers
//! always know how far the repair got.

pub mod cli;
pub mod dedup;
pub mod error;
pub mod options;
pub mod report;

mod ledger;
mod passes;

pub use error::MendError;
pub use ledger::{Fix, Issue, Ledger};
pub use options::Options;
pub use report::RepairReport;

/// Everything one run of the pipeline produced.
#[derive(Debug)]
pub struct RepairOutcome {
    /// The repaired text. Equal to the input when nothing needed fixing.
    pub text: String,
    /// Every fix applied and every problem left unresolved, in pass order.
    pub ledger: Ledger,
    /// Whether the final text parses as JSON. Prior passes are best-effort;
    /// this is the ground truth.
    pub structurally_valid: bool,
}

impl RepairOutcome {
    /// True when the pipeline changed the text at all.
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Runs the full repair pipeline over `input` and returns the repaired text
/// together with the fix/error ledger and the final parse verdict.
///
/// The pipeline never fails: unrepairable damage is recorded in
/// `ledger.errors` and the text is still returned in its best-effort form.
pub fn repair_document(input: &str, opts: &Options) -> RepairOutcome {
    let (text, ledger, structurally_valid) = passes::run_pipeline(input, opts);
    RepairOutcome {
        text,
        ledger,
        structurally_valid,
    }
}

#[cfg(test)]
mod tests;
