use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{preferences::QuizPreferences, question::Question, segment::Segment};

/// A composed quiz together with the material it was built from, so it can
/// be regenerated later with the same inputs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub preferences: QuizPreferences,
    pub text: String,
    pub segments: Vec<Segment>,
}

impl Quiz {
    pub fn new(
        questions: Vec<Question>,
        preferences: QuizPreferences,
        text: String,
        segments: Vec<Segment>,
    ) -> Self {
        Quiz {
            total_questions: questions.len(),
            questions,
            preferences,
            text,
            segments,
        }
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter_map(|s| s.heading.as_deref())
            .filter(|h| !h.is_empty())
    }
}

/// Outcome of a completed quiz as reported by the client.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizResults {
    pub score: u32,
    pub total: u32,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub answers: Vec<serde_json::Value>,
    #[serde(default)]
    pub weak_topics: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub quiz_data: Quiz,
    pub preferences: QuizPreferences,
    pub results: Option<QuizResults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl QuizRecord {
    pub fn new(quiz: Quiz) -> Self {
        QuizRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            preferences: quiz.preferences.clone(),
            quiz_data: quiz,
            results: None,
            completed_at: None,
        }
    }

    pub fn complete(&mut self, results: QuizResults) {
        self.results = Some(results);
        self.completed_at = Some(Utc::now());
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuizStatistics {
    pub total_quizzes: usize,
    pub completed_quizzes: usize,
    pub average_score: f64,
    pub topics_studied: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz::new(
            vec![],
            QuizPreferences::default(),
            "notes".to_string(),
            vec![
                Segment {
                    heading: Some("1. Cells".to_string()),
                    section_number: Some("1".to_string()),
                    content: "body".to_string(),
                },
                Segment {
                    heading: None,
                    section_number: None,
                    content: "preface".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_new_record_has_fresh_id_and_no_results() {
        let first = QuizRecord::new(sample_quiz());
        let second = QuizRecord::new(sample_quiz());

        assert_ne!(first.id, second.id);
        assert!(first.results.is_none());
        assert!(first.completed_at.is_none());
        assert_eq!(first.preferences, first.quiz_data.preferences);
    }

    #[test]
    fn test_completing_a_record_stamps_completion_time() {
        let mut record = QuizRecord::new(sample_quiz());
        record.complete(QuizResults {
            score: 3,
            total: 4,
            percentage: 75.0,
            answers: vec![],
            weak_topics: vec!["1. Cells".to_string()],
        });

        assert_eq!(record.results.as_ref().map(|r| r.score), Some(3));
        assert!(record.completed_at.is_some());
    }

    #[test]
    fn test_topics_skip_segments_without_headings() {
        let quiz = sample_quiz();
        assert_eq!(quiz.topics().collect::<Vec<_>>(), vec!["1. Cells"]);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = QuizRecord::new(sample_quiz());
        let json = serde_json::to_string(&record).expect("record should serialize");
        let parsed: QuizRecord = serde_json::from_str(&json).expect("record should deserialize");

        assert_eq!(parsed, record);
    }
}
