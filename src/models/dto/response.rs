use serde::Serialize;

use crate::models::domain::{
    ConceptCandidate, EvaluationResult, Quiz, QuizRecord, QuizStatistics, Segment,
};

/// Characters of the uploaded text echoed back to the client.
pub const RAW_TEXT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UploadNotesResponse {
    pub success: bool,
    pub raw_text: String,
    pub segments: Vec<Segment>,
    pub topics: Vec<String>,
    pub word_count: usize,
    pub key_concepts: Vec<ConceptCandidate>,
}

/// A freshly composed quiz with the id it was stored under.
#[derive(Debug, Serialize)]
pub struct QuizDto {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub quiz_id: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub success: bool,
    pub quiz: QuizDto,
}

impl From<QuizRecord> for GenerateQuizResponse {
    fn from(record: QuizRecord) -> Self {
        GenerateQuizResponse {
            success: true,
            quiz: QuizDto {
                quiz: record.quiz_data,
                quiz_id: record.id,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EvaluateAnswerResponse {
    pub success: bool,
    pub evaluation: EvaluationResult,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<QuizRecord>,
}

#[derive(Debug, Serialize)]
pub struct QuizRecordResponse {
    pub success: bool,
    pub quiz: QuizRecord,
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub statistics: QuizStatistics,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// First [`RAW_TEXT_PREVIEW_CHARS`] characters of `text`, with `...` appended
/// when anything was cut.
pub fn raw_text_preview(text: &str) -> String {
    match text.char_indices().nth(RAW_TEXT_PREVIEW_CHARS) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
