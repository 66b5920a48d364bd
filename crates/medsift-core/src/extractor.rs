//! Multi-source orchestration, deduplication, and ranking.

use std::borrow::Cow;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::matcher;
use crate::models::{ConsultSources, ExtractedMedication, SourceField};
use crate::notes;

/// Extract every medication mention from a consultation record.
///
/// Visits the text fields in priority order, runs the per-source matcher
/// pipeline on each, then collapses duplicates (case-insensitive by name,
/// highest confidence kept, first seen wins ties) and sorts the result
/// ascending by name. Never fails: malformed input is skipped or matched
/// as literal text, and the output may be empty.
pub fn extract_medications(sources: &ConsultSources) -> Vec<ExtractedMedication> {
    let mut all: Vec<ExtractedMedication> = Vec::new();

    for field in SourceField::PRIORITY {
        let Some(raw) = sources.field(field) else {
            continue;
        };
        if raw.trim().is_empty() {
            trace!(source = field.label(), "skipping blank field");
            continue;
        }

        let text: Cow<'_, str> = if field == SourceField::CaseNotes {
            match notes::flatten_structured_notes(raw) {
                Ok(flat) => {
                    debug!(source = field.label(), "using structured case notes");
                    Cow::Owned(flat)
                }
                Err(err) => {
                    debug!(
                        source = field.label(),
                        error = %err,
                        "case notes not structured, matching raw text"
                    );
                    Cow::Borrowed(raw)
                }
            }
        } else {
            Cow::Borrowed(raw)
        };

        if text.trim().is_empty() {
            continue;
        }

        let hits = matcher::extract_from_source(&text, field.label());
        debug!(
            source = field.label(),
            count = hits.len(),
            "extracted medication mentions"
        );
        all.extend(hits);
    }

    dedup_and_rank(all)
}

/// Extract just the medication names, in the same order as
/// [`extract_medications`].
pub fn extract_medication_names(sources: &ConsultSources) -> Vec<String> {
    extract_medications(sources)
        .into_iter()
        .map(|m| m.name)
        .collect()
}

/// Collapse case-insensitive duplicate names, keeping the highest-confidence
/// entry (first seen wins ties), then sort ascending by name.
fn dedup_and_rank(hits: Vec<ExtractedMedication>) -> Vec<ExtractedMedication> {
    let mut kept: Vec<ExtractedMedication> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for hit in hits {
        let key = hit.name.to_lowercase();
        match index.get(&key) {
            Some(&i) => {
                if hit.confidence > kept[i].confidence {
                    kept[i] = hit;
                }
            }
            None => {
                index.insert(key, kept.len());
                kept.push(hit);
            }
        }
    }

    kept.sort_by(|a, b| a.name.cmp(&b.name));
    kept
}
