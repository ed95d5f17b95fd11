use serde::Serialize;

/// One applied correction. Line numbers are 1-based, refer to the input of
/// the pass that recorded the fix, and are for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub message: String,
    pub line: Option<usize>,
}

/// One condition the pipeline detected but could not safely correct. The
/// snippet is a bounded excerpt of the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub message: String,
    pub snippet: Option<String>,
}

/// Append-only record of everything a pass (or the whole pipeline) did and
/// failed to do. Passes each build their own ledger; the pipeline merges
/// them in order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    pub fixes: Vec<Fix>,
    pub errors: Vec<Issue>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fix(&mut self, message: impl Into<String>) {
        self.fixes.push(Fix {
            message: message.into(),
            line: None,
        });
    }

    pub fn fix_at(&mut self, line: usize, message: impl Into<String>) {
        self.fixes.push(Fix {
            message: message.into(),
            line: Some(line),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(Issue {
            message: message.into(),
            snippet: None,
        });
    }

    pub fn error_with_snippet(
        &mut self,
        message: impl Into<String>,
        line: &str,
        snippet_len: usize,
    ) {
        self.errors.push(Issue {
            message: message.into(),
            snippet: Some(bounded_snippet(line, snippet_len)),
        });
    }

    pub fn merge(&mut self, other: Ledger) {
        self.fixes.extend(other.fixes);
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty() && self.errors.is_empty()
    }
}

/// Char-safe truncation; appends an ellipsis when the line was cut.
pub(crate) fn bounded_snippet(line: &str, max_chars: usize) -> String {
    let mut out: String = line.chars().take(max_chars).collect();
    if line.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
