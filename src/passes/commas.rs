//! CommaInserter: a record that closes with `}` directly followed (blank
//! lines aside) by a line opening the next record is missing the array
//! separator. Anything else the forward scan meets — a closing bracket, a
//! field of the same object — means no comma belongs there, and the scan
//! stops rather than guesses.

use super::{PassOutput, is_blank};
use crate::Ledger;
use crate::options::Options;

pub(crate) fn apply(input: &str, opts: &Options) -> PassOutput {
    let mut ledger = Ledger::new();
    let lines: Vec<&str> = input.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for (idx, &line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.ends_with('}') && !trimmed.ends_with("},") && next_starts_object(&lines[idx + 1..]) {
            out.push(append_comma(line));
            ledger.fix_at(idx + 1, "inserted missing comma after object");
        } else {
            out.push(line.to_string());
        }
    }

    PassOutput {
        text: out.join("\n"),
        ledger,
    }
}

fn next_starts_object(rest: &[&str]) -> bool {
    for &line in rest {
        if is_blank(line) {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.starts_with('{') {
            return true;
        }
        if trimmed.starts_with(']') || trimmed.starts_with('}') {
            return false;
        }
        // A field line: still inside the current object.
        if trimmed.contains(':') {
            return false;
        }
        // Anything else is inconclusive; keep scanning.
    }
    false
}

/// Puts the comma right after the final `}`, keeping any trailing
/// whitespace where it was.
fn append_comma(line: &str) -> String {
    match line.rfind('}') {
        Some(pos) => {
            let mut fixed = String::with_capacity(line.len() + 1);
            fixed.push_str(&line[..=pos]);
            fixed.push(',');
            fixed.push_str(&line[pos + 1..]);
            fixed
        }
        None => line.to_string(),
    }
}
