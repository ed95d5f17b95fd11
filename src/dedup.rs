//! Duplicate-record removal for the same content dumps the repair pipeline
//! targets: a single pass over the array keyed on the `Slug` field, first
//! occurrence wins. Records without a usable slug are kept and reported.

use std::collections::HashSet;

use serde_json::Value;

use crate::ledger::bounded_snippet;

/// What got removed: enough of the record to identify it in a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateInfo {
    /// Position in the original array, 0-based.
    pub index: usize,
    pub id: Option<i64>,
    pub slug: String,
    pub title: Option<String>,
}

#[derive(Debug, Default)]
pub struct DedupOutcome {
    pub unique: Vec<Value>,
    pub removed: Vec<DuplicateInfo>,
    /// Indices of records that had no string `Slug` and were kept as-is.
    pub slugless: Vec<usize>,
}

impl DedupOutcome {
    pub fn original_len(&self) -> usize {
        self.unique.len() + self.removed.len()
    }
}

pub fn dedup_by_slug(records: Vec<Value>) -> DedupOutcome {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = DedupOutcome::default();

    for (index, record) in records.into_iter().enumerate() {
        let slug = record.get("Slug").and_then(Value::as_str);
        let Some(slug) = slug else {
            out.slugless.push(index);
            out.unique.push(record);
            continue;
        };
        if seen.contains(slug) {
            out.removed.push(DuplicateInfo {
                index,
                id: record.get("ID").and_then(Value::as_i64),
                slug: slug.to_string(),
                title: record
                    .get("Title")
                    .and_then(Value::as_str)
                    .map(|t| bounded_snippet(t, 50)),
            });
        } else {
            seen.insert(slug.to_string());
            out.unique.push(record);
        }
    }
    out
}
