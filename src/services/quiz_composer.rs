use std::sync::Arc;

use serde_json::Value;

use crate::{
    errors::{AppError, AppResult, BackendError, BackendResult},
    models::{
        domain::{McqQuestion, Question, QuestionType, Quiz, QuizPreferences, SaqQuestion, Segment},
        dto::generation::{GeneratedMcqBatch, GeneratedSaqBatch},
    },
    services::{
        fallback_generator::{fallback_mcqs, fallback_saqs},
        model_service::LanguageModel,
        prompt_builder::{mcq_generation_request, saq_generation_request},
    },
    text::segmenter::clean_and_segment,
};

/// How many questions of each type a quiz asks the backend for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionDistribution {
    pub mcq: usize,
    pub saq: usize,
}

impl QuestionDistribution {
    pub fn from_preferences(preferences: &QuizPreferences) -> Self {
        let total = preferences.num_questions as usize;
        match preferences.question_type {
            QuestionType::Mcq => Self { mcq: total, saq: 0 },
            QuestionType::Saq => Self { mcq: 0, saq: total },
            QuestionType::Mixed => Self {
                mcq: total / 2,
                saq: total - total / 2,
            },
        }
    }
}

pub struct QuizComposer {
    model: Arc<dyn LanguageModel>,
}

impl QuizComposer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Builds a quiz from notes. MCQs come first, then SAQs.
    ///
    /// Each question type gets one backend attempt; a failed or unusable
    /// reply is replaced by the rule-based generator for that type only.
    pub async fn compose(
        &self,
        text: String,
        segments: Vec<Segment>,
        preferences: QuizPreferences,
    ) -> AppResult<Quiz> {
        let (text, segments) = resolve_material(text, segments)?;
        let distribution = QuestionDistribution::from_preferences(&preferences);

        log::info!(
            "Composing quiz: {} MCQ + {} SAQ from {} segments",
            distribution.mcq,
            distribution.saq,
            segments.len()
        );

        let (mcqs, saqs) = tokio::join!(
            self.mcqs(&text, distribution.mcq, &segments, &preferences),
            self.saqs(&text, distribution.saq, &segments, &preferences),
        );

        let questions = mcqs
            .into_iter()
            .map(Question::Mcq)
            .chain(saqs.into_iter().map(Question::Saq))
            .collect();

        Ok(Quiz::new(questions, preferences, text, segments))
    }

    async fn mcqs(
        &self,
        text: &str,
        count: usize,
        segments: &[Segment],
        preferences: &QuizPreferences,
    ) -> Vec<McqQuestion> {
        if count == 0 {
            return Vec::new();
        }

        let request = mcq_generation_request(text, count, preferences);
        let generated = self
            .model
            .complete_json(&request)
            .await
            .and_then(|reply| parse_mcq_batch(reply, preferences));

        match generated {
            Ok(mut questions) => {
                questions.truncate(count);
                questions
            }
            Err(e) => {
                log::warn!("MCQ generation failed: {}", e);
                log::info!("Falling back to cloze MCQs");
                fallback_mcqs(text, count, segments, preferences)
            }
        }
    }

    async fn saqs(
        &self,
        text: &str,
        count: usize,
        segments: &[Segment],
        preferences: &QuizPreferences,
    ) -> Vec<SaqQuestion> {
        if count == 0 {
            return Vec::new();
        }

        let request = saq_generation_request(text, count, preferences);
        let generated = self
            .model
            .complete_json(&request)
            .await
            .and_then(|reply| parse_saq_batch(reply, preferences));

        match generated {
            Ok(mut questions) => {
                questions.truncate(count);
                questions
            }
            Err(e) => {
                log::warn!("SAQ generation failed: {}", e);
                log::info!("Falling back to segment SAQs");
                fallback_saqs(count, segments, preferences)
            }
        }
    }
}

/// Fills in whichever of text or segments is missing.
fn resolve_material(text: String, segments: Vec<Segment>) -> AppResult<(String, Vec<Segment>)> {
    let has_text = !text.trim().is_empty();
    match (has_text, segments.is_empty()) {
        (false, true) => Err(AppError::ValidationError(
            "Either text or segments must be provided".to_string(),
        )),
        (true, true) => {
            let segments = clean_and_segment(&text);
            Ok((text, segments))
        }
        (false, false) => {
            let text = segments
                .iter()
                .map(|s| s.content.as_str())
                .collect::<Vec<_>>()
                .join("\n\n");
            Ok((text, segments))
        }
        (true, false) => Ok((text, segments)),
    }
}

fn parse_mcq_batch(reply: Value, preferences: &QuizPreferences) -> BackendResult<Vec<McqQuestion>> {
    let batch: GeneratedMcqBatch = serde_json::from_value(reply)
        .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;
    non_empty(batch.questions)?
        .into_iter()
        .map(|q| q.into_question(preferences))
        .collect::<Result<Vec<_>, String>>()
        .map_err(BackendError::MalformedResponse)
}

fn parse_saq_batch(reply: Value, preferences: &QuizPreferences) -> BackendResult<Vec<SaqQuestion>> {
    let batch: GeneratedSaqBatch = serde_json::from_value(reply)
        .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;
    Ok(non_empty(batch.questions)?
        .into_iter()
        .map(|q| q.into_question(preferences))
        .collect())
}

fn non_empty<T>(questions: Vec<T>) -> BackendResult<Vec<T>> {
    if questions.is_empty() {
        Err(BackendError::MalformedResponse(
            "`questions` is empty".to_string(),
        ))
    } else {
        Ok(questions)
    }
}
