//! Two pure-substitution repairs for escaping damage inside content fields.
//!
//! `normalize_content_escaping` undoes a generator habit of escaping the
//! quote that *opens* the content value (`"Content": \"<h1>...`), which
//! breaks the string literal before it starts.
//!
//! `escape_known_phrases` escapes a closed allow-list of quoted phrases
//! observed verbatim inside content values. Deliberately an allow-list:
//! guessing which inner quotes were intentional is what the quote pass is
//! for, and it only guesses on content lines.

use super::PassOutput;
use crate::Ledger;
use crate::options::Options;

pub(crate) fn normalize_content_escaping(input: &str, opts: &Options) -> PassOutput {
    let marker = opts.content_marker();
    let mut out = String::with_capacity(input.len());
    let mut count = 0usize;
    let mut pos = 0usize;

    while let Some(found) = input[pos..].find(&marker) {
        let start = pos + found;
        let after = start + marker.len();
        out.push_str(&input[pos..after]);

        let rest = &input[after..];
        let ws = rest.len() - rest.trim_start().len();
        if rest[ws..].starts_with("\\\"") {
            out.push_str(" \"");
            pos = after + ws + 2;
            count += 1;
        } else {
            pos = after;
        }
    }
    out.push_str(&input[pos..]);

    let mut ledger = Ledger::new();
    if count > 0 {
        ledger.fix(format!(
            "fixed incorrect escaping at the start of {} {} field(s)",
            count, opts.content_key
        ));
    }
    PassOutput { text: out, ledger }
}

pub(crate) fn escape_known_phrases(input: &str, opts: &Options) -> PassOutput {
    let mut ledger = Ledger::new();
    let mut text = input.to_string();

    for phrase in &opts.known_phrases {
        let count = text.matches(phrase.as_str()).count();
        if count == 0 {
            continue;
        }
        let escaped = phrase.replace('"', "\\\"");
        text = text.replace(phrase.as_str(), &escaped);
        ledger.fix(format!(
            "escaped known phrase {}: {} occurrence(s)",
            phrase, count
        ));
    }

    PassOutput { text, ledger }
}
