//! StrayBracketFilter: removes a `]` alone on its line when the lines after
//! it show that no array actually ended there — the next non-blank line
//! opens a new object or starts a fresh record. Lookahead is bounded; when
//! it runs out without a verdict the bracket stays.

use super::{PassOutput, is_blank};
use crate::Ledger;
use crate::options::Options;

pub(crate) fn apply(input: &str, opts: &Options) -> PassOutput {
    let mut ledger = Ledger::new();
    let lines: Vec<&str> = input.split('\n').collect();
    let record_start = opts.record_start_marker();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());

    for (idx, &line) in lines.iter().enumerate() {
        if line.trim() == "]" && is_spurious(&lines[idx + 1..], opts.bracket_lookahead, &record_start) {
            ledger.fix_at(idx + 1, "removed stray ] closing no array");
            continue;
        }
        kept.push(line);
    }

    PassOutput {
        text: kept.join("\n"),
        ledger,
    }
}

fn is_spurious(rest: &[&str], window: usize, record_start: &str) -> bool {
    for &line in rest.iter().take(window) {
        if is_blank(line) {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.starts_with('{') || trimmed.starts_with(record_start) {
            return true;
        }
        if trimmed == "]" || trimmed == "}" {
            return false;
        }
        // Anything else is ambiguous; stop looking.
        return false;
    }
    false
}
