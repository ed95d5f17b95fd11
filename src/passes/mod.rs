//! The repair passes, in the fixed order the pipeline applies them.
//!
//! Every pass is pure with respect to the text: it takes the document as a
//! string and returns a [`PassOutput`] holding the (possibly identical)
//! rewritten text plus its own ledger. The driver merges ledgers so that no
//! pass ever mutates shared state.

pub(crate) mod brackets;
pub(crate) mod commas;
pub(crate) mod escapes;
pub(crate) mod junk;
pub(crate) mod multiline;
pub(crate) mod quotes;
pub(crate) mod validate;

use crate::Ledger;
use crate::options::Options;

pub(crate) struct PassOutput {
    pub text: String,
    pub ledger: Ledger,
}

/// Runs all repair passes plus the final structural validation, merging
/// each pass's ledger in order. Returns the repaired text, the combined
/// ledger, and whether the result parses as JSON.
pub(crate) fn run_pipeline(input: &str, opts: &Options) -> (String, Ledger, bool) {
    let mut ledger = Ledger::new();
    let mut text = input.to_string();

    let stages: [fn(&str, &Options) -> PassOutput; 7] = [
        junk::apply,
        brackets::apply,
        escapes::normalize_content_escaping,
        multiline::apply,
        escapes::escape_known_phrases,
        quotes::apply,
        commas::apply,
    ];
    for stage in stages {
        let out = stage(&text, opts);
        text = out.text;
        ledger.merge(out.ledger);
    }

    let valid = match validate::check(&text) {
        Ok(()) => true,
        Err(diag) => {
            ledger.error(diag);
            false
        }
    };
    (text, ledger, valid)
}

/// True when the trimmed line is empty. Blank lines are skipped by every
/// lookahead in the pipeline but are never themselves removed.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
