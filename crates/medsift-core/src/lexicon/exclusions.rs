//! Suffix rules and the exclusion denylist.
//!
//! The suffix list deliberately includes broad endings (`ine`, `cine`) that
//! catch real drug names missing from the lexicon; the denylist is what
//! recovers precision by naming the common clinical and everyday words
//! whose surface form collides with those endings.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Drug-name suffixes, most specific first. A candidate must be at least
/// [`crate::matcher::MIN_NAME_LEN`] characters before any of these count.
pub static DRUG_SUFFIXES: &[&str] = &[
    "cillin", "mycin", "micin", "cycline", "floxacin", "prazole", "azole", "azepam", "zolam",
    "barbital", "phylline", "profen", "coxib", "tidine", "statin", "sartan", "dipine", "caine",
    "ectin", "oxetine", "azine", "terol", "olol", "pril", "onide", "cine", "ine",
];

/// Lowercase words that look drug-like but never are.
static EXCLUDED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // Species and clinical vocabulary
        "canine",
        "feline",
        "equine",
        "bovine",
        "porcine",
        "vaccine",
        "vaccines",
        "medicine",
        "medicines",
        "urine",
        "saline",
        "spine",
        "supine",
        "intestine",
        "creatinine",
        "histamine",
        "quarantine",
        "migraine",
        "alkaline",
        // Everyday words with drug-like endings
        "routine",
        "baseline",
        "guideline",
        "guidelines",
        "examine",
        "determine",
        "discipline",
        "decline",
        "online",
        "outline",
        "timeline",
        "deadline",
        "borderline",
        "midline",
        "machine",
        "genuine",
        "pristine",
        "crystalline",
        "vaseline",
        "gasoline",
        "cuisine",
        "chlorine",
        "fluorine",
        "bromine",
        "iodine",
        "protocol",
        "control",
    ])
});

/// Whether the word is on the denylist (case-insensitive).
pub fn is_excluded(word: &str) -> bool {
    EXCLUDED_WORDS.contains(word.to_lowercase().as_str())
}

/// Whether the word ends in a drug-name suffix. Length limits are the
/// caller's concern; this checks the ending only.
pub fn has_drug_suffix(word: &str) -> bool {
    let lower = word.to_lowercase();
    DRUG_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}
