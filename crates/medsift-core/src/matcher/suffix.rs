//! Suffix matcher: capitalized tokens ending in drug-name suffixes.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{has_drug_suffix, is_excluded};
use crate::models::ExtractedMedication;

use super::{title_case, MIN_NAME_LEN};

/// An uppercase first letter followed by lowercase letters. All-caps
/// abbreviations and mid-word fragments do not qualify.
static CAP_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+\b").expect("valid token pattern"));

/// Find capitalized tokens that end in a known drug suffix.
///
/// Tokens already in `found` are skipped (the caller seeds it with lexicon
/// hits); accepted tokens are added to `found` so later matchers in the
/// same per-source call cannot re-report them.
pub fn match_suffixes(
    text: &str,
    source: &str,
    found: &mut HashSet<String>,
) -> Vec<ExtractedMedication> {
    let mut hits = Vec::new();

    for m in CAP_TOKEN.find_iter(text) {
        let token = m.as_str();
        if token.len() < MIN_NAME_LEN {
            continue;
        }
        let lower = token.to_lowercase();
        if found.contains(&lower) || is_excluded(&lower) || !has_drug_suffix(&lower) {
            continue;
        }
        found.insert(lower.clone());
        hits.push(ExtractedMedication::heuristic_hit(
            title_case(&lower),
            token.to_string(),
            source,
        ));
    }

    hits
}
