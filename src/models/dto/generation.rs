use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::{
    question::MCQ_OPTION_COUNT, Difficulty, McqQuestion, QuizPreferences, SaqQuestion,
};

const DEFAULT_MAX_MARKS: u32 = 5;

fn default_max_marks() -> u32 {
    DEFAULT_MAX_MARKS
}

/// Reply shape expected from the backend for multiple-choice generation.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedMcqBatch {
    pub questions: Vec<GeneratedMcq>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedMcq {
    pub question: String,
    pub options: Vec<String>,
    /// Index of the correct option (0-3).
    pub correct_answer: i64,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub section_reference: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Reply shape expected from the backend for short-answer generation.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedSaqBatch {
    pub questions: Vec<GeneratedSaq>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedSaq {
    pub question: String,
    pub model_answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub marking_points: Vec<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub section_reference: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default = "default_max_marks")]
    pub max_marks: u32,
}

impl GeneratedMcq {
    /// Checks the variant invariants and applies the quiz preferences.
    pub fn into_question(self, preferences: &QuizPreferences) -> Result<McqQuestion, String> {
        let correct_index = u8::try_from(self.correct_answer)
            .ok()
            .filter(|index| usize::from(*index) < MCQ_OPTION_COUNT)
            .ok_or_else(|| format!("correct_answer {} is out of range", self.correct_answer))?;

        let option_count = self.options.len();
        let options: [String; MCQ_OPTION_COUNT] = self
            .options
            .try_into()
            .map_err(|_| format!("expected {MCQ_OPTION_COUNT} options, got {option_count}"))?;

        Ok(McqQuestion {
            question: self.question,
            options,
            correct_index,
            explanation: self.explanation,
            hint: keep_if(preferences.include_hints, self.hint),
            section_reference: keep_if(preferences.include_section_refs, self.section_reference),
            difficulty: resolve_difficulty(self.difficulty.as_deref(), preferences.difficulty),
        })
    }
}

impl GeneratedSaq {
    pub fn into_question(self, preferences: &QuizPreferences) -> SaqQuestion {
        SaqQuestion {
            question: self.question,
            model_answer: self.model_answer,
            keywords: self.keywords,
            marking_points: self.marking_points,
            hint: keep_if(preferences.include_hints, self.hint),
            section_reference: keep_if(preferences.include_section_refs, self.section_reference),
            difficulty: resolve_difficulty(self.difficulty.as_deref(), preferences.difficulty),
            max_marks: self.max_marks,
        }
    }
}

fn keep_if(enabled: bool, value: Option<String>) -> Option<String> {
    value.filter(|v| enabled && !v.trim().is_empty())
}

fn resolve_difficulty(reported: Option<&str>, requested: Difficulty) -> Difficulty {
    reported
        .and_then(|d| d.parse().ok())
        .unwrap_or(requested)
}
