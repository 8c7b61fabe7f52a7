use std::{collections::BTreeSet, sync::Arc};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizPreferences, QuizRecord, QuizResults, QuizStatistics, Segment},
    repositories::QuizHistoryRepository,
    services::quiz_composer::QuizComposer,
};

/// Quiz generation plus the history kept for every generated quiz.
pub struct QuizService {
    composer: QuizComposer,
    repository: Arc<dyn QuizHistoryRepository>,
}

impl QuizService {
    pub fn new(composer: QuizComposer, repository: Arc<dyn QuizHistoryRepository>) -> Self {
        Self {
            composer,
            repository,
        }
    }

    /// Composes a quiz and saves it to history.
    pub async fn generate_quiz(
        &self,
        text: String,
        segments: Vec<Segment>,
        preferences: QuizPreferences,
    ) -> AppResult<QuizRecord> {
        let quiz = self.composer.compose(text, segments, preferences).await?;
        let record = self.repository.save(QuizRecord::new(quiz)).await?;

        log::info!(
            "Saved quiz {} with {} questions",
            record.id,
            record.quiz_data.total_questions
        );
        Ok(record)
    }

    /// Composes a new quiz from the material and preferences of a stored one.
    pub async fn regenerate_quiz(&self, id: &str) -> AppResult<QuizRecord> {
        if id.trim().is_empty() {
            return Err(AppError::ValidationError("Quiz ID required".to_string()));
        }

        let original = self.get_quiz(id).await?;
        log::info!("Regenerating quiz {}", id);

        self.generate_quiz(
            original.quiz_data.text,
            original.quiz_data.segments,
            original.preferences,
        )
        .await
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<QuizRecord> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| quiz_not_found(id))
    }

    pub async fn list_history(&self) -> AppResult<Vec<QuizRecord>> {
        self.repository.list().await
    }

    pub async fn submit_results(&self, id: &str, results: QuizResults) -> AppResult<QuizRecord> {
        if results.score > results.total {
            return Err(AppError::ValidationError(format!(
                "score {} exceeds total {}",
                results.score, results.total
            )));
        }

        self.repository
            .update_results(id, results)
            .await?
            .ok_or_else(|| quiz_not_found(id))
    }

    pub async fn delete_quiz(&self, id: &str) -> AppResult<()> {
        if self.repository.delete(id).await? {
            log::info!("Deleted quiz {}", id);
            Ok(())
        } else {
            Err(quiz_not_found(id))
        }
    }

    pub async fn statistics(&self) -> AppResult<QuizStatistics> {
        let records = self.repository.list().await?;
        Ok(compute_statistics(&records))
    }
}

fn quiz_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Quiz with id '{}' not found", id))
}

fn compute_statistics(records: &[QuizRecord]) -> QuizStatistics {
    let completed: Vec<&QuizResults> = records.iter().filter_map(|r| r.results.as_ref()).collect();

    let total_score: u64 = completed.iter().map(|r| u64::from(r.score)).sum();
    let total_possible: u64 = completed.iter().map(|r| u64::from(r.total)).sum();
    let average_score = if total_possible > 0 {
        (total_score as f64 / total_possible as f64 * 1000.0).round() / 10.0
    } else {
        0.0
    };

    let topics_studied: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.quiz_data.topics())
        .collect();

    QuizStatistics {
        total_quizzes: records.len(),
        completed_quizzes: completed.len(),
        average_score,
        topics_studied: topics_studied.into_iter().map(str::to_string).collect(),
    }
}
