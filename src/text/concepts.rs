use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{ConceptCandidate, ConceptKind};

pub const DEFAULT_MAX_CONCEPTS: usize = 20;

/// Points this short or shorter are dropped.
const MIN_KEY_POINT_CHARS: usize = 20;
const KEY_POINT_TERM_CHARS: usize = 50;

static DEFINITION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?:is|are|refers to|means|defined as)\s+(.+?)(?:\.|;|\n)",
    )
    .expect("DEFINITION_REGEX is a valid regex pattern")
});

static KEY_POINT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[•*-]|\d+\.)[^\S\n]+(.+)$").expect("KEY_POINT_REGEX is a valid regex pattern")
});

/// Scans cleaned text for definitions ("X is Y.") and bulleted or numbered
/// key points. Definitions come first, then key points, both in the order
/// they appear; the combined list is capped at `max_concepts`.
pub fn extract_key_concepts(text: &str, max_concepts: usize) -> Vec<ConceptCandidate> {
    let definitions = DEFINITION_REGEX.captures_iter(text).map(|caps| ConceptCandidate {
        term: caps[1].trim().to_string(),
        definition: caps[2].trim().to_string(),
        kind: ConceptKind::Definition,
    });

    let key_points = text
        .lines()
        .filter_map(|line| KEY_POINT_REGEX.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .filter(|point| point.chars().count() > MIN_KEY_POINT_CHARS)
        .map(|point| ConceptCandidate {
            term: truncate_term(&point),
            definition: point,
            kind: ConceptKind::KeyPoint,
        });

    definitions.chain(key_points).take(max_concepts).collect()
}

fn truncate_term(point: &str) -> String {
    if point.chars().count() > KEY_POINT_TERM_CHARS {
        let head: String = point.chars().take(KEY_POINT_TERM_CHARS).collect();
        format!("{head}...")
    } else {
        point.to_string()
    }
}
