#[derive(Clone, Debug)]
pub struct Options {
    /// Key of the text field that carries HTML bodies and attracts most of
    /// the corruption this crate repairs.
    pub content_key: String,
    /// Keys whose appearance terminates a broken multi-line content value
    /// (siblings of the content field inside one record).
    pub sibling_keys: Vec<String>,
    /// Key that opens every record; a stray `]` directly followed by it is
    /// judged spurious by the bracket filter.
    pub record_start_key: String,
    /// Lines whose trimmed content exactly equals one of these tokens are
    /// dropped by the junk filter. Exact match only.
    pub junk_tokens: Vec<String>,
    /// Literal quoted phrases known to appear unescaped inside content
    /// values. Closed allow-list: new offenders require new entries here.
    pub known_phrases: Vec<String>,
    /// How many lines the bracket filter may look ahead before giving up
    /// and keeping a candidate `]` in place.
    pub bracket_lookahead: usize,
    /// How many fixes and how many errors the textual report lists before
    /// eliding the rest.
    pub report_limit: usize,
    /// Maximum number of characters of an offending line captured into an
    /// error record.
    pub snippet_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            content_key: "Content".to_string(),
            sibling_keys: vec!["IMG".to_string(), "ID".to_string()],
            record_start_key: "ID".to_string(),
            junk_tokens: vec![
                "```json".to_string(),
                "```".to_string(),
                "json".to_string(),
                "Generated json".to_string(),
            ],
            known_phrases: vec!["\"don't ask, don't tell\"".to_string()],
            bracket_lookahead: 4,
            report_limit: 10,
            snippet_len: 100,
        }
    }
}

impl Options {
    /// `"Content":` — the marker that identifies a content field line.
    pub(crate) fn content_marker(&self) -> String {
        format!("\"{}\":", self.content_key)
    }

    /// Markers for sibling fields, e.g. `"IMG":`, `"ID":`.
    pub(crate) fn sibling_markers(&self) -> Vec<String> {
        self.sibling_keys
            .iter()
            .map(|k| format!("\"{}\":", k))
            .collect()
    }

    /// `"ID"` — the quoted record-start key without the colon.
    pub(crate) fn record_start_marker(&self) -> String {
        format!("\"{}\"", self.record_start_key)
    }
}
