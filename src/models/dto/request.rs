use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        AnswerStyle, Difficulty, QuestionType, QuizPreferences, QuizResults, Segment,
    },
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadNotesRequest {
    #[validate(length(min = 1, message = "No text provided"))]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    #[validate(nested)]
    pub preferences: QuizPreferencesInput,
}

/// Preferences as sent by clients: every field optional, enums as loose
/// strings. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuizPreferencesInput {
    pub question_type: Option<String>,
    #[validate(range(min = 1, max = 50, message = "num_questions must be between 1 and 50"))]
    pub num_questions: Option<u32>,
    pub difficulty: Option<String>,
    pub mcq_distractor_type: Option<String>,
    pub saq_answer_style: Option<String>,
    pub include_hints: Option<bool>,
    pub include_section_refs: Option<bool>,
}

impl QuizPreferencesInput {
    /// Validates the input and fills absent fields with defaults.
    pub fn resolve(self) -> AppResult<QuizPreferences> {
        self.validate()?;
        let defaults = QuizPreferences::default();

        Ok(QuizPreferences {
            question_type: parse_or::<QuestionType>(self.question_type, defaults.question_type)?,
            num_questions: self.num_questions.unwrap_or(defaults.num_questions),
            difficulty: parse_or::<Difficulty>(self.difficulty, defaults.difficulty)?,
            mcq_distractor_type: self
                .mcq_distractor_type
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(defaults.mcq_distractor_type),
            saq_answer_style: parse_or::<AnswerStyle>(self.saq_answer_style, defaults.saq_answer_style)?,
            include_hints: self.include_hints.unwrap_or(defaults.include_hints),
            include_section_refs: self
                .include_section_refs
                .unwrap_or(defaults.include_section_refs),
        })
    }
}

fn parse_or<T>(value: Option<String>, default: T) -> AppResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    match value {
        Some(v) => v.parse().map_err(AppError::ValidationError),
        None => Ok(default),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateAnswerRequest {
    #[serde(default)]
    pub user_answer: String,
    #[serde(default)]
    pub model_answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegenerateQuizRequest {
    #[serde(default)]
    pub quiz_id: Option<String>,
}

pub type SubmitResultsRequest = QuizResults;
