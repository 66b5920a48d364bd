//! Consultation text sources.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The free-text sections of a clinical consultation record.
///
/// All fields are optional; the extraction engine only reads them. The
/// `case_notes` field may itself be a JSON document carrying `wellness`
/// and `procedure` sub-objects (see [`crate::notes`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsultSources {
    /// Raw recording transcript
    pub original_input: Option<String>,
    /// SOAP: subjective
    pub soap_s: Option<String>,
    /// SOAP: objective
    pub soap_o: Option<String>,
    /// SOAP: assessment
    pub soap_a: Option<String>,
    /// SOAP: plan
    pub soap_p: Option<String>,
    /// Case notes, possibly JSON-structured (wellness/procedure)
    pub case_notes: Option<String>,
    /// Discharge summary
    pub discharge_summary: Option<String>,
    /// Client education notes
    pub client_education: Option<String>,
}

impl ConsultSources {
    /// Build from an untyped JSON value, taking only string-valued fields.
    ///
    /// Non-string values (numbers, nulls, nested objects) are silently
    /// skipped rather than failing deserialization, so a partially
    /// malformed record still yields whatever text it does carry.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| -> Option<String> {
            value.get(key).and_then(Value::as_str).map(str::to_string)
        };
        Self {
            original_input: field("original_input"),
            soap_s: field("soap_s"),
            soap_o: field("soap_o"),
            soap_a: field("soap_a"),
            soap_p: field("soap_p"),
            case_notes: field("case_notes"),
            discharge_summary: field("discharge_summary"),
            client_education: field("client_education"),
        }
    }

    /// Get the raw text of a field.
    pub fn field(&self, field: SourceField) -> Option<&str> {
        match field {
            SourceField::Plan => self.soap_p.as_deref(),
            SourceField::Discharge => self.discharge_summary.as_deref(),
            SourceField::CaseNotes => self.case_notes.as_deref(),
            SourceField::Recording => self.original_input.as_deref(),
            SourceField::Assessment => self.soap_a.as_deref(),
            SourceField::Objective => self.soap_o.as_deref(),
            SourceField::Subjective => self.soap_s.as_deref(),
            SourceField::ClientEducation => self.client_education.as_deref(),
        }
    }
}

/// A named consultation section, in extraction priority order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SourceField {
    Plan,
    Discharge,
    CaseNotes,
    Recording,
    Assessment,
    Objective,
    Subjective,
    ClientEducation,
}

impl SourceField {
    /// All fields in the fixed visiting order.
    pub const PRIORITY: [SourceField; 8] = [
        SourceField::Plan,
        SourceField::Discharge,
        SourceField::CaseNotes,
        SourceField::Recording,
        SourceField::Assessment,
        SourceField::Objective,
        SourceField::Subjective,
        SourceField::ClientEducation,
    ];

    /// Human-readable label used on extracted mentions.
    pub fn label(&self) -> &'static str {
        match self {
            SourceField::Plan => "Plan",
            SourceField::Discharge => "Discharge",
            SourceField::CaseNotes => "Case Notes",
            SourceField::Recording => "Recording",
            SourceField::Assessment => "Assessment",
            SourceField::Objective => "Objective",
            SourceField::Subjective => "Subjective",
            SourceField::ClientEducation => "Client Education",
        }
    }
}
