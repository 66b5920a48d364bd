//! Dosage-context matcher: drug names corroborated by surrounding context.
//!
//! A dosage amount, route/frequency code, administration verb, or dosage
//! form next to a candidate word is treated as corroborating evidence, not
//! standalone proof: the candidate must still be a lexicon drug or carry a
//! drug-name suffix.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{has_drug_suffix, is_excluded, is_known_drug};
use crate::models::ExtractedMedication;

use super::{title_case, MIN_NAME_LEN};

struct DosagePattern {
    regex: Regex,
    description: &'static str,
}

fn pattern(regex_str: &str, description: &'static str) -> DosagePattern {
    DosagePattern {
        regex: Regex::new(regex_str).expect("valid dosage-context pattern"),
        description,
    }
}

/// Fixed ordered context patterns. Every pattern names its drug candidate
/// with the `drug` capture group.
static DOSAGE_PATTERNS: LazyLock<Vec<DosagePattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)\b(?P<drug>[a-z][a-z-]{2,})\s+\d+(?:\.\d+)?\s*(?:mg|mcg|g|ml|cc|units?|iu|tablets?|tabs?|capsules?|caps?|drops?)\b",
            "drug followed by dose",
        ),
        pattern(
            r"(?i)\b\d+(?:\.\d+)?\s*(?:mg|mcg|g|ml|cc|units?|iu)\s+(?:of\s+)?(?P<drug>[a-z][a-z-]{2,})\b",
            "dose followed by drug",
        ),
        pattern(
            r"\b(?P<drug>[A-Za-z][A-Za-z-]{2,})\s+(?:PO|IV|IM|SQ|SC|SID|BID|TID|QID|EOD|PRN)\b",
            "drug followed by route or frequency code",
        ),
        pattern(
            r"(?i)\b(?:give|gave|giving|administer(?:ed|ing)?|prescribe[ds]?|prescribing|dispense[ds]?|dispensing|start(?:ed|ing)?|continue[ds]?|continuing)\s+(?P<drug>[a-z][a-z-]{2,})\b",
            "administration verb followed by drug",
        ),
        pattern(
            r"(?i)\b(?P<drug>[a-z][a-z-]{2,})\s+(?:tablets?|capsules?|injection|suspension|chewables?|ointment|drops)\b",
            "drug followed by dosage form",
        ),
        pattern(
            r"(?i)\b(?:on|taking|receiving)\s+(?P<drug>[a-z][a-z-]{2,})\b",
            "ongoing-medication phrase",
        ),
    ]
});

/// Scan with every context pattern and apply the shared post-filter.
///
/// The filter is applied uniformly after capture for every pattern branch:
/// not already found, not excluded, minimum length, and lexicon membership
/// or a strict suffix.
pub fn match_dosage_context(
    text: &str,
    source: &str,
    found: &mut HashSet<String>,
) -> Vec<ExtractedMedication> {
    let mut hits = Vec::new();

    for dp in DOSAGE_PATTERNS.iter() {
        for caps in dp.regex.captures_iter(text) {
            let candidate = &caps["drug"];
            if let Some(lower) = accept(candidate, found) {
                tracing::trace!(
                    candidate,
                    pattern = dp.description,
                    "dosage-context match accepted"
                );
                hits.push(ExtractedMedication::heuristic_hit(
                    title_case(&lower),
                    candidate.to_string(),
                    source,
                ));
            }
        }
    }

    hits
}

/// Shared post-filter. Returns the lowercase form on acceptance, after
/// recording it in `found`.
fn accept(candidate: &str, found: &mut HashSet<String>) -> Option<String> {
    let lower = candidate.to_lowercase();
    if lower.len() < MIN_NAME_LEN {
        return None;
    }
    if found.contains(&lower) || is_excluded(&lower) {
        return None;
    }
    if !is_known_drug(&lower) && !has_drug_suffix(&lower) {
        return None;
    }
    found.insert(lower.clone());
    Some(lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confidence;

    fn run(text: &str) -> Vec<ExtractedMedication> {
        let mut found = HashSet::new();
        match_dosage_context(text, "Plan", &mut found)
    }

    #[test]
    fn test_drug_followed_by_dose() {
        let hits = run("dicloxacillin 300mg twice daily");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dicloxacillin");
        assert_eq!(hits[0].confidence, Confidence::Medium);
    }

    #[test]
    fn test_dose_followed_by_drug() {
        let hits = run("administered 2ml of proparacaine to each eye");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Proparacaine");
    }

    #[test]
    fn test_route_code_context() {
        let hits = run("dicloxacillin PO until recheck");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dicloxacillin");
    }

    #[test]
    fn test_verb_context_requires_corroboration() {
        // "water" has neither lexicon membership nor a drug suffix.
        assert!(run("give water freely overnight").is_empty());
    }

    #[test]
    fn test_verb_context_with_suffix_candidate() {
        let hits = run("continue dicloxacillin until finished");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dicloxacillin");
    }

    #[test]
    fn test_excluded_word_in_dose_context_rejected() {
        // Exclusion applies after capture on every branch.
        assert!(run("give vaccine at the next visit").is_empty());
        assert!(run("saline 10ml flush").is_empty());
    }

    #[test]
    fn test_short_candidate_rejected() {
        // "tine" would suffix-match but is under the minimum length.
        assert!(run("tine 50mg").is_empty());
    }

    #[test]
    fn test_duplicate_across_patterns_emitted_once() {
        // Matches both the dose pattern and the route pattern.
        let hits = run("dicloxacillin 300mg PO BID and more dicloxacillin 150mg");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_already_found_candidate_skipped() {
        let mut found = HashSet::new();
        found.insert("dicloxacillin".to_string());
        let hits = match_dosage_context("dicloxacillin 300mg", "Plan", &mut found);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_lexicon_member_lowercase_accepted() {
        // Lowercase brand names fail the suffix matcher's capitalization
        // rule but dosage context plus lexicon membership recovers them.
        let hits = run("taking cerenia every morning");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Cerenia");
    }
}
