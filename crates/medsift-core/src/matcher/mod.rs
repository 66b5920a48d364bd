//! Medication matching strategies.
//!
//! Per-source pipeline: Lexicon → Suffix → Dosage-Context. The strict
//! ordering is the precision/recall policy: an exact dictionary hit always
//! wins, and its name is seeded into the shared already-found set so the
//! heuristic matchers never re-report the same drug at lower confidence.

mod dosage;
mod lexicon;
mod suffix;

pub use dosage::match_dosage_context;
pub use lexicon::match_lexicon;
pub use suffix::match_suffixes;

use std::collections::HashSet;

use crate::models::ExtractedMedication;

/// Minimum length for any heuristically matched drug name.
pub const MIN_NAME_LEN: usize = 5;

/// Run all three matchers against one text blob.
///
/// The already-found set is local to this call: the same drug can be
/// independently rediscovered in a different source field, and the global
/// deduplicator resolves that afterwards.
pub fn extract_from_source(text: &str, source: &str) -> Vec<ExtractedMedication> {
    let mut found: HashSet<String> = HashSet::new();

    let mut hits = match_lexicon(text, source);
    for hit in &hits {
        found.insert(hit.name.to_lowercase());
    }

    hits.extend(match_suffixes(text, source, &mut found));
    hits.extend(match_dosage_context(text, source, &mut found));
    hits
}

/// Normalize a drug name to title case, preserving hyphens.
pub(crate) fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_boundary = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}
