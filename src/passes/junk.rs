//! LineJunkFilter: drops lines that are generator noise rather than JSON —
//! markdown fence markers, bare language tags, "Generated json" labels.
//! Matching is exact on the trimmed line; nothing is ever partially matched.

use super::PassOutput;
use crate::Ledger;
use crate::options::Options;

pub(crate) fn apply(input: &str, opts: &Options) -> PassOutput {
    let mut ledger = Ledger::new();
    let mut kept: Vec<&str> = Vec::new();

    for (idx, line) in input.split('\n').enumerate() {
        let trimmed = line.trim();
        if opts.junk_tokens.iter().any(|t| t == trimmed) {
            ledger.fix_at(idx + 1, format!("removed junk line: \"{}\"", trimmed));
            continue;
        }
        kept.push(line);
    }

    PassOutput {
        text: kept.join("\n"),
        ledger,
    }
}
