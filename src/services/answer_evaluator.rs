use std::sync::Arc;

use crate::{
    errors::{BackendError, BackendResult},
    models::domain::{AssessmentSource, EvaluationResult, QualitativeAssessment},
    services::{model_service::LanguageModel, prompt_builder::evaluation_request},
};

const FALLBACK_FEEDBACK: &str = "Basic keyword matching performed.";
/// Keyword coverage above this ratio counts as understanding in the fallback.
const UNDERSTANDING_THRESHOLD: f64 = 0.6;
const MAX_QUALITATIVE_SCORE: f64 = 10.0;

/// Which required keywords an answer mentions, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordMatch {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordMatch {
    /// Case-insensitive substring match of every keyword against `answer`.
    pub fn of(answer: &str, keywords: &[String]) -> Self {
        let answer = answer.to_lowercase();
        let (found, missing): (Vec<String>, Vec<String>) = keywords
            .iter()
            .cloned()
            .partition(|keyword| answer.contains(&keyword.to_lowercase()));
        Self { found, missing }
    }

    /// Rounded share of keywords found, 0 when there are none.
    pub fn percentage(&self) -> u8 {
        let total = self.found.len() + self.missing.len();
        if total == 0 {
            return 0;
        }
        (100.0 * self.found.len() as f64 / total as f64).round() as u8
    }
}

pub struct AnswerEvaluator {
    model: Arc<dyn LanguageModel>,
}

impl AnswerEvaluator {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Scores a free-text answer. Never fails: when the backend cannot give a
    /// qualitative judgment, one is derived from keyword coverage.
    pub async fn evaluate(
        &self,
        user_answer: &str,
        model_answer: &str,
        keywords: &[String],
    ) -> EvaluationResult {
        let keyword_match = KeywordMatch::of(user_answer, keywords);
        let percentage = keyword_match.percentage();

        let request = evaluation_request(user_answer, model_answer, keywords);
        let (assessment, source) = match self
            .model
            .complete_json(&request)
            .await
            .and_then(parse_assessment)
        {
            Ok(assessment) => (assessment, AssessmentSource::Model),
            Err(e) => {
                log::warn!("Answer evaluation fell back to keyword matching: {}", e);
                (keyword_assessment(&keyword_match, percentage), AssessmentSource::KeywordFallback)
            }
        };

        EvaluationResult {
            keywords_found: keyword_match.found,
            keywords_missing: keyword_match.missing,
            keyword_score_percentage: percentage,
            qualitative_score: assessment.score_out_of_10.round() as u8,
            feedback: assessment.feedback,
            strengths: assessment.strengths,
            improvements: assessment.improvements,
            demonstrates_understanding: assessment.demonstrates_understanding,
            assessment_source: source,
        }
    }
}

fn parse_assessment(reply: serde_json::Value) -> BackendResult<QualitativeAssessment> {
    let assessment: QualitativeAssessment = serde_json::from_value(reply)
        .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

    if !(0.0..=MAX_QUALITATIVE_SCORE).contains(&assessment.score_out_of_10) {
        return Err(BackendError::MalformedResponse(format!(
            "score_out_of_10 {} is out of range",
            assessment.score_out_of_10
        )));
    }

    Ok(assessment)
}

fn keyword_assessment(keyword_match: &KeywordMatch, percentage: u8) -> QualitativeAssessment {
    let strengths = if keyword_match.found.is_empty() {
        vec![]
    } else {
        vec![format!("Included: {}", keyword_match.found.join(", "))]
    };
    let improvements = if keyword_match.missing.is_empty() {
        vec![]
    } else {
        vec![format!("Missing: {}", keyword_match.missing.join(", "))]
    };

    QualitativeAssessment {
        score_out_of_10: (f64::from(percentage) / 10.0).round(),
        feedback: FALLBACK_FEEDBACK.to_string(),
        strengths,
        improvements,
        demonstrates_understanding: f64::from(percentage) / 100.0 > UNDERSTANDING_THRESHOLD,
    }
}
