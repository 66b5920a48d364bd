//! Lexicon matcher: exact, word-bounded dictionary lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::lexicon::entries;
use crate::models::ExtractedMedication;

use super::title_case;

struct LexiconPattern {
    regex: Regex,
    name: &'static str,
    category: &'static str,
}

/// One compiled word-boundary pattern per lexicon entry, in lexicon order
/// (category order, then list order).
static LEXICON_PATTERNS: LazyLock<Vec<LexiconPattern>> = LazyLock::new(|| {
    entries()
        .map(|(name, category)| LexiconPattern {
            regex: RegexBuilder::new(&format!(r"\b{}\b", regex::escape(name)))
                .case_insensitive(true)
                .build()
                .expect("lexicon entry escapes to a valid pattern"),
            name,
            category,
        })
        .collect()
});

/// Find every lexicon entry appearing as a whole word in the text.
///
/// Each matched term is recorded once per call, keeping the first category
/// in lexicon order; `original_match` is the first occurrence verbatim.
pub fn match_lexicon(text: &str, source: &str) -> Vec<ExtractedMedication> {
    let mut hits = Vec::new();
    let mut seen: HashSet<&'static str> = HashSet::new();

    for pattern in LEXICON_PATTERNS.iter() {
        if seen.contains(pattern.name) {
            continue;
        }
        if let Some(m) = pattern.regex.find(text) {
            seen.insert(pattern.name);
            hits.push(ExtractedMedication::lexicon_hit(
                title_case(pattern.name),
                m.as_str().to_string(),
                pattern.category,
                source,
            ));
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confidence;

    #[test]
    fn test_case_insensitive_whole_word_match() {
        let hits = match_lexicon("started AMOXICILLIN this morning", "Plan");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Amoxicillin");
        assert_eq!(hits[0].original_match, "AMOXICILLIN");
        assert_eq!(hits[0].category.as_deref(), Some("antibiotics"));
        assert_eq!(hits[0].confidence, Confidence::High);
    }

    #[test]
    fn test_substring_inside_longer_word_rejected() {
        let hits = match_lexicon("digoxinoid compounds were discussed", "Plan");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_hyphenated_entry_matches() {
        let hits = match_lexicon("on amoxicillin-clavulanate 62.5mg", "Plan");
        assert!(hits
            .iter()
            .any(|h| h.name == "Amoxicillin-Clavulanate"));
    }

    #[test]
    fn test_term_recorded_once_per_call() {
        let hits = match_lexicon("Cerenia today, Cerenia again tomorrow", "Plan");
        assert_eq!(hits.iter().filter(|h| h.name == "Cerenia").count(), 1);
    }

    #[test]
    fn test_multiple_distinct_drugs() {
        let hits = match_lexicon("carprofen with famotidine as gastroprotectant", "Plan");
        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert!(names.contains(&"Carprofen"));
        assert!(names.contains(&"Famotidine"));
    }

    #[test]
    fn test_brand_name_keeps_its_category() {
        let hits = match_lexicon("Continue Cerenia for nausea", "Plan");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category.as_deref(), Some("gastrointestinal"));
    }
}
