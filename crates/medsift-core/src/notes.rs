//! Structured case-notes handling.
//!
//! The case-notes field is the one multi-structured source: the UI stores
//! wellness and procedure visit forms as a JSON document whose `wellness`
//! and `procedure` objects carry free-text string values. Everything else
//! is opaque text.

use serde_json::Value;
use thiserror::Error;

/// Structured-notes parse errors. Always recovered by the orchestrator,
/// which falls back to matching the raw field text.
#[derive(Error, Debug)]
pub enum CaseNotesError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("case notes are not a JSON object")]
    NotStructured,
}

/// Flatten a structured case-notes payload to matchable text.
///
/// Collects every string value nested directly under the `wellness` and
/// `procedure` objects, one per line. A payload that parses but carries no
/// such strings flattens to the empty string; the caller skips the field
/// rather than mining unrelated JSON structure as prose.
pub fn flatten_structured_notes(raw: &str) -> Result<String, CaseNotesError> {
    let value: Value = serde_json::from_str(raw)?;
    let doc = value.as_object().ok_or(CaseNotesError::NotStructured)?;

    let mut lines: Vec<&str> = Vec::new();
    for section in ["wellness", "procedure"] {
        if let Some(Value::Object(fields)) = doc.get(section) {
            for field_value in fields.values() {
                if let Value::String(text) = field_value {
                    lines.push(text);
                }
            }
        }
    }

    Ok(lines.join("\n"))
}
