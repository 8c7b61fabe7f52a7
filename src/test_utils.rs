#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::domain::{Quiz, QuizPreferences, QuizResults, Segment};

    /// Lecture notes with numbered, all-caps and title-case headings.
    pub fn sample_notes() -> String {
        "1. Introduction to Cells\n\
         Cells are the smallest units that carry out all the processes of life.\n\
         Every living organism is built from one or more of these tiny structures.\n\
         \n\
         2. Cell Structure\n\
         The cell membrane controls which substances enter and leave the cell.\n\
         Mitochondria release energy from glucose during aerobic respiration.\n\
         - Ribosomes assemble proteins from chains of amino acids\n\
         \n\
         KEY TERMS\n\
         Osmosis is the movement of water across a partially permeable membrane.\n\
         Diffusion means the net spread of particles from high to low concentration."
            .to_string()
    }

    pub fn sample_segments() -> Vec<Segment> {
        vec![
            Segment {
                heading: Some("1. Introduction to Cells".to_string()),
                section_number: Some("1".to_string()),
                content: "Cells are the smallest units of life.".to_string(),
            },
            Segment {
                heading: Some("2. Cell Structure".to_string()),
                section_number: Some("2".to_string()),
                content: "The cell membrane controls what enters the cell.".to_string(),
            },
        ]
    }

    pub fn sample_quiz() -> Quiz {
        Quiz::new(
            vec![],
            QuizPreferences::default(),
            sample_notes(),
            sample_segments(),
        )
    }

    pub fn results(score: u32, total: u32) -> QuizResults {
        QuizResults {
            score,
            total,
            percentage: if total == 0 {
                0.0
            } else {
                f64::from(score) * 100.0 / f64::from(total)
            },
            answers: vec![],
            weak_topics: vec![],
        }
    }

    /// A well-formed backend reply with `count` multiple-choice questions.
    pub fn mcq_batch_json(count: usize) -> Value {
        let questions: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "type": "mcq",
                    "question": format!("Generated MCQ {i}?"),
                    "options": ["alpha", "beta", "gamma", "delta"],
                    "correct_answer": i % 4,
                    "explanation": "Because it is",
                    "hint": "Look closely",
                    "section_reference": "1",
                    "difficulty": "medium"
                })
            })
            .collect();
        json!({ "questions": questions })
    }

    /// A well-formed backend reply with `count` short-answer questions.
    pub fn saq_batch_json(count: usize) -> Value {
        let questions: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "type": "saq",
                    "question": format!("Generated SAQ {i}?"),
                    "model_answer": "A full model answer",
                    "keywords": ["cell", "membrane", "energy"],
                    "marking_points": ["Defines the term", "Gives an example"],
                    "difficulty": "hard",
                    "max_marks": 4
                })
            })
            .collect();
        json!({ "questions": questions })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;

    use crate::{
        app_state::AppState, config::Config, repositories::InMemoryQuizHistoryRepository,
        services::model_service::UnavailableModel,
    };

    /// App state with no generative backend and an empty in-memory history.
    pub fn offline_state() -> AppState {
        AppState::with_components(
            Config::test_config(),
            Arc::new(UnavailableModel),
            Arc::new(InMemoryQuizHistoryRepository::new()),
        )
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::text::segmenter::clean_and_segment;

    #[test]
    fn test_sample_notes_segment_into_headed_sections() {
        let headings: Vec<Option<String>> = clean_and_segment(&sample_notes())
            .into_iter()
            .map(|s| s.heading)
            .collect();

        assert_eq!(
            headings,
            vec![
                Some("1. Introduction to Cells".to_string()),
                Some("2. Cell Structure".to_string()),
                Some("KEY TERMS".to_string()),
            ]
        );
    }

    #[test]
    fn test_batches_have_requested_size() {
        assert_eq!(mcq_batch_json(3)["questions"].as_array().map(Vec::len), Some(3));
        assert_eq!(saq_batch_json(0)["questions"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_results_percentage() {
        assert_eq!(results(3, 4).percentage, 75.0);
        assert_eq!(results(0, 0).percentage, 0.0);
    }
}
