//! StructuralValidator: the ground truth at the end of the pipeline. All
//! previous passes are heuristics; this one asks serde_json whether the
//! result is actually JSON. It never changes the text.

use serde::de::IgnoredAny;

pub(crate) fn check(text: &str) -> Result<(), String> {
    match serde_json::from_str::<IgnoredAny>(text) {
        Ok(_) => Ok(()),
        Err(e) => Err(format!("JSON structure error: {}", e)),
    }
}
