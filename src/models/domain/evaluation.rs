use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the qualitative half of an evaluation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSource {
    Model,
    KeywordFallback,
}

/// Holistic judgment of an answer, as returned by the evaluation backend.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct QualitativeAssessment {
    pub score_out_of_10: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub demonstrates_understanding: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvaluationResult {
    pub keywords_found: Vec<String>,
    pub keywords_missing: Vec<String>,
    pub keyword_score_percentage: u8,
    pub qualitative_score: u8,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub demonstrates_understanding: bool,
    pub assessment_source: AssessmentSource,
}
