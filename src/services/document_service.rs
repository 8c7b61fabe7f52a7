use crate::{
    errors::{AppError, AppResult},
    models::domain::{ConceptCandidate, Segment},
    text::{
        cleaner::clean_text,
        concepts::{extract_key_concepts, DEFAULT_MAX_CONCEPTS},
        segmenter::segment_text,
    },
};

/// Everything derived from one upload of raw notes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedNotes {
    pub segments: Vec<Segment>,
    pub topics: Vec<String>,
    pub word_count: usize,
    pub key_concepts: Vec<ConceptCandidate>,
}

#[derive(Default)]
pub struct DocumentService;

impl DocumentService {
    pub fn new() -> Self {
        Self
    }

    pub fn process_notes(&self, raw_text: &str) -> AppResult<ProcessedNotes> {
        if raw_text.trim().is_empty() {
            return Err(AppError::ValidationError("No text provided".to_string()));
        }

        let cleaned = clean_text(raw_text);
        let segments = segment_text(&cleaned);
        let topics = segments
            .iter()
            .filter_map(|s| s.heading.clone())
            .filter(|h| !h.is_empty())
            .collect();
        let key_concepts = extract_key_concepts(&cleaned, DEFAULT_MAX_CONCEPTS);

        log::info!(
            "Processed notes into {} segments and {} key concepts",
            segments.len(),
            key_concepts.len()
        );

        Ok(ProcessedNotes {
            segments,
            topics,
            word_count: raw_text.split_whitespace().count(),
            key_concepts,
        })
    }
}
