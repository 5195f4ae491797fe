//! Whole-word concept counting
//!
//! Each concept is matched literally (regex metacharacters escaped) and
//! bounded by word-boundary assertions, so "code" never matches inside
//! "decode" or "coding". Concepts are counted independently of each other.

use crate::error::EngineError;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// Build the whole-word matcher for one concept.
///
/// The concept text is escaped and wrapped in `\b` assertions; the regex
/// crate's Unicode word boundaries apply. Case folding is controlled by
/// `case_sensitive`.
pub fn whole_word_matcher(concept: &str, case_sensitive: bool) -> Result<Regex, EngineError> {
    let pattern = format!(r"\b{}\b", regex::escape(concept));
    RegexBuilder::new(&pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|source| EngineError::InvalidConcept {
            concept: concept.to_string(),
            source,
        })
}

/// Count non-overlapping whole-word occurrences of each concept in `text`.
///
/// The result is keyed by the concept text exactly as supplied, 0 when a
/// concept is absent. Duplicate concepts in the slice fold to a single
/// entry with the same count.
pub fn count_concepts(
    text: &str,
    concepts: &[String],
    case_sensitive: bool,
) -> Result<HashMap<String, usize>, EngineError> {
    let mut counts = HashMap::with_capacity(concepts.len());

    for concept in concepts {
        let matcher = whole_word_matcher(concept, case_sensitive)?;
        counts.insert(concept.clone(), matcher.find_iter(text).count());
    }

    Ok(counts)
}
