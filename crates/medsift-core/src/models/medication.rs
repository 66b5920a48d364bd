//! Extracted medication mention models.

use serde::{Deserialize, Serialize};

/// How strongly a mention is believed to be a real medication.
///
/// Lexicon hits are always [`Confidence::High`]; suffix and dosage-context
/// hits are always [`Confidence::Medium`]. The ordering (`Medium < High`)
/// is what the deduplicator uses to resolve duplicate detections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Heuristic match (drug-name suffix or dosage context)
    Medium,
    /// Exact lexicon match
    High,
}

/// A single medication mention mined from consultation text.
///
/// Ephemeral: constructed fresh on every extraction call, never mutated
/// afterwards, and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedMedication {
    /// Normalized drug name (title-case, hyphens preserved)
    pub name: String,
    /// Verbatim substring from the source text
    pub original_match: String,
    /// Therapeutic category (present only for lexicon hits)
    pub category: Option<String>,
    /// Match confidence
    pub confidence: Confidence,
    /// Human-readable label of the field the mention was found in
    pub source: String,
}

impl ExtractedMedication {
    /// Create a high-confidence lexicon hit.
    pub fn lexicon_hit(name: String, original: String, category: &str, source: &str) -> Self {
        Self {
            name,
            original_match: original,
            category: Some(category.to_string()),
            confidence: Confidence::High,
            source: source.to_string(),
        }
    }

    /// Create a medium-confidence heuristic hit (no category).
    pub fn heuristic_hit(name: String, original: String, source: &str) -> Self {
        Self {
            name,
            original_match: original,
            category: None,
            confidence: Confidence::Medium,
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::High > Confidence::Medium);
        assert_eq!(Confidence::High.max(Confidence::Medium), Confidence::High);
    }

    #[test]
    fn test_confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Confidence::Medium).unwrap(),
            "\"medium\""
        );
    }

    #[test]
    fn test_lexicon_hit_shape() {
        let med = ExtractedMedication::lexicon_hit(
            "Amoxicillin".into(),
            "amoxicillin".into(),
            "antibiotics",
            "Plan",
        );
        assert_eq!(med.confidence, Confidence::High);
        assert_eq!(med.category.as_deref(), Some("antibiotics"));
        assert_eq!(med.source, "Plan");
    }

    #[test]
    fn test_heuristic_hit_has_no_category() {
        let med =
            ExtractedMedication::heuristic_hit("Dicloxacillin".into(), "Dicloxacillin".into(), "Plan");
        assert_eq!(med.confidence, Confidence::Medium);
        assert!(med.category.is_none());
    }
}
