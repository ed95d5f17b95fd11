//! QuoteNormalizer: the pass that deals with raw `"` characters inside
//! string values, in two steps.
//!
//! Step one escapes `word="value"` attribute fragments wherever they occur.
//! It is intentionally not scoped to content fields — the pattern is
//! specific enough in practice, and scoping it would require tracking which
//! string the scanner is inside. Documented limitation, not an oversight.
//!
//! Step two counts unescaped quotes per line. An odd count on a content
//! field line gets one targeted repair attempt (escape the last unescaped
//! quote that is not the line's own closing quote); everywhere else an odd
//! count is only reported, never guessed at.

use memchr::{memchr, memchr_iter};

use super::PassOutput;
use crate::Ledger;
use crate::options::Options;

pub(crate) fn apply(input: &str, opts: &Options) -> PassOutput {
    let mut ledger = Ledger::new();
    let (text, escaped) = escape_attribute_quotes(input);
    if escaped > 0 {
        ledger.fix(format!("escaped quotes in {} HTML attribute(s)", escaped));
    }
    let text = repair_unpaired_quotes(&text, opts, &mut ledger);
    PassOutput { text, ledger }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Rewrites `attr="value"` into `attr=\"value\"`. Already-escaped
/// attributes have a backslash after the `=` and never match again.
fn escape_attribute_quotes(input: &str) -> (String, usize) {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut copied = 0usize;
    let mut count = 0usize;

    for eq in memchr_iter(b'=', bytes) {
        if eq < copied || eq + 1 >= bytes.len() || bytes[eq + 1] != b'"' {
            continue;
        }
        // Attribute name: a run of word bytes directly before the `=`,
        // itself not preceded by a backslash.
        let mut name_start = eq;
        while name_start > 0 && is_word_byte(bytes[name_start - 1]) {
            name_start -= 1;
        }
        if name_start == eq {
            continue;
        }
        if name_start > 0 && bytes[name_start - 1] == b'\\' {
            continue;
        }
        let Some(close) = memchr(b'"', &bytes[eq + 2..]).map(|p| eq + 2 + p) else {
            continue;
        };

        out.push_str(&input[copied..=eq]);
        out.push_str("\\\"");
        out.push_str(&input[eq + 2..close]);
        out.push_str("\\\"");
        copied = close + 1;
        count += 1;
    }
    out.push_str(&input[copied..]);
    (out, count)
}

/// Running count of quotes not preceded by an active escape. A backslash
/// sets an escape-pending flag that the next character consumes, whatever
/// it is.
pub(crate) fn count_unescaped_quotes(line: &str) -> usize {
    let mut count = 0usize;
    let mut escaped = false;
    for &b in line.as_bytes() {
        if escaped {
            escaped = false;
            continue;
        }
        if b == b'\\' {
            escaped = true;
        } else if b == b'"' {
            count += 1;
        }
    }
    count
}

fn repair_unpaired_quotes(input: &str, opts: &Options, ledger: &mut Ledger) -> String {
    let marker = opts.content_marker();
    let mut out: Vec<String> = Vec::new();

    for (idx, line) in input.split('\n').enumerate() {
        if count_unescaped_quotes(line) % 2 == 0 {
            out.push(line.to_string());
            continue;
        }
        if line.contains(&marker) {
            match repair_content_line(line) {
                Some(fixed) => {
                    ledger.fix_at(idx + 1, "escaped an unpaired quote");
                    out.push(fixed);
                    continue;
                }
                None => ledger.error_with_snippet(
                    format!("unpaired quotes on line {}", idx + 1),
                    line,
                    opts.snippet_len,
                ),
            }
        } else {
            ledger.error_with_snippet(
                format!("unpaired quotes on line {}", idx + 1),
                line,
                opts.snippet_len,
            );
        }
        out.push(line.to_string());
    }
    out.join("\n")
}

/// Targeted repair for a content line with an odd quote count: escape the
/// last quote (not preceded by a backslash) that is not the line's final
/// character. Lines already ending in a proper field terminator are left
/// for the error ledger — an odd count there means damage this heuristic
/// cannot localize.
fn repair_content_line(line: &str) -> Option<String> {
    if line.trim_end().ends_with("\",") || line.ends_with("\"}") {
        return None;
    }
    let bytes = line.as_bytes();
    for i in (0..bytes.len()).rev() {
        if bytes[i] != b'"' || (i > 0 && bytes[i - 1] == b'\\') {
            continue;
        }
        if i + 1 < bytes.len() {
            let mut fixed = String::with_capacity(line.len() + 1);
            fixed.push_str(&line[..i]);
            fixed.push('\\');
            fixed.push_str(&line[i..]);
            return Some(fixed);
        }
    }
    None
}
