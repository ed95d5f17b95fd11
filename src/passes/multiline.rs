//! MultilineFieldReassembler: a content value that the generator emitted
//! across several physical lines (never closing the string) is merged back
//! into one line and terminated with `",`.
//!
//! Explicit two-state machine. A line *enters* broken state when it carries
//! the content marker, does not end in `",` or a bare `"`, and contains an
//! HTML open-tag `<` (the signal that a markup value continues). While
//! broken, each incoming line is first checked as a terminator — a sibling
//! field key or a line opening/closing an object — and only appended into
//! the buffer when it is not one. A buffer still open at end of input is
//! emitted joined, unmodified, with an error recorded: dropping it would
//! lose content silently.

use super::PassOutput;
use crate::Ledger;
use crate::options::Options;

pub(crate) fn apply(input: &str, opts: &Options) -> PassOutput {
    let marker = opts.content_marker();
    let siblings = opts.sibling_markers();
    let mut ledger = Ledger::new();
    let mut out: Vec<String> = Vec::new();
    let mut pending: Option<String> = None;

    for (idx, line) in input.split('\n').enumerate() {
        let trimmed = line.trim();
        match pending.take() {
            None => {
                if trimmed.contains(&marker) && is_broken_start(trimmed) {
                    pending = Some(line.to_string());
                } else {
                    out.push(line.to_string());
                }
            }
            Some(mut buf) => {
                if is_terminator(trimmed, &siblings) {
                    out.push(close_value(&buf, &marker, idx + 1, opts, &mut ledger));
                    out.push(line.to_string());
                } else {
                    buf.push(' ');
                    buf.push_str(trimmed);
                    pending = Some(buf);
                }
            }
        }
    }

    if let Some(buf) = pending {
        ledger.error_with_snippet(
            format!(
                "multi-line {} value never terminated before end of input",
                opts.content_key
            ),
            &buf,
            opts.snippet_len,
        );
        out.push(buf);
    }

    PassOutput {
        text: out.join("\n"),
        ledger,
    }
}

fn is_broken_start(trimmed: &str) -> bool {
    !trimmed.ends_with("\",") && !trimmed.ends_with('"') && trimmed.contains('<')
}

fn is_terminator(trimmed: &str, siblings: &[String]) -> bool {
    siblings.iter().any(|s| trimmed.contains(s.as_str()))
        || trimmed.starts_with('}')
        || trimmed.starts_with('{')
}

/// Appends the closing `",` right after the accumulated value. The buffer is
/// known to contain the content marker; if its value somehow has no opening
/// quote the buffer is emitted untouched rather than guessed at.
fn close_value(
    buf: &str,
    marker: &str,
    line_no: usize,
    opts: &Options,
    ledger: &mut Ledger,
) -> String {
    let Some(found) = buf.find(marker) else {
        return buf.to_string();
    };
    let after = found + marker.len();
    let rest = &buf[after..];
    let ws = rest.len() - rest.trim_start().len();
    let quote = after + ws;
    if buf.as_bytes().get(quote) != Some(&b'"') {
        return buf.to_string();
    }

    let value = buf[quote + 1..].trim_end();
    let mut fixed = String::with_capacity(buf.len() + 2);
    fixed.push_str(&buf[..=quote]);
    fixed.push_str(value);
    fixed.push_str("\",");
    ledger.fix_at(
        line_no,
        format!("reassembled broken multi-line {} field", opts.content_key),
    );
    fixed
}
