use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{QuizRecord, QuizResults},
};

#[async_trait]
pub trait QuizHistoryRepository: Send + Sync {
    async fn save(&self, record: QuizRecord) -> AppResult<QuizRecord>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizRecord>>;
    /// All records, oldest first.
    async fn list(&self) -> AppResult<Vec<QuizRecord>>;
    /// Attaches results to a record; `None` when the id is unknown.
    async fn update_results(&self, id: &str, results: QuizResults) -> AppResult<Option<QuizRecord>>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Process-local history, lost on restart.
#[derive(Default)]
pub struct InMemoryQuizHistoryRepository {
    records: RwLock<Vec<QuizRecord>>,
}

impl InMemoryQuizHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizHistoryRepository for InMemoryQuizHistoryRepository {
    async fn save(&self, record: QuizRecord) -> AppResult<QuizRecord> {
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<QuizRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn update_results(&self, id: &str, results: QuizResults) -> AppResult<Option<QuizRecord>> {
        let mut records = self.records.write().await;
        Ok(records.iter_mut().find(|r| r.id == id).map(|record| {
            record.complete(results);
            record.clone()
        }))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }
}

pub struct MongoQuizHistoryRepository {
    collection: Collection<QuizRecord>,
}

impl MongoQuizHistoryRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz history collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let timestamp_index = IndexModel::builder()
            .keys(doc! { "timestamp": 1 })
            .options(
                IndexOptions::builder()
                    .name("timestamp_asc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes(vec![id_index, timestamp_index])
            .await?;

        log::info!("Successfully created indexes for quiz history collection");
        Ok(())
    }
}

#[async_trait]
impl QuizHistoryRepository for MongoQuizHistoryRepository {
    async fn save(&self, record: QuizRecord) -> AppResult<QuizRecord> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizRecord>> {
        let record = self.collection.find_one(doc! { "id": id }).await?;
        Ok(record)
    }

    async fn list(&self) -> AppResult<Vec<QuizRecord>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "timestamp": 1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(find_options).await?;
        let records: Vec<QuizRecord> = cursor.try_collect().await?;

        Ok(records)
    }

    async fn update_results(&self, id: &str, results: QuizResults) -> AppResult<Option<QuizRecord>> {
        let Some(mut record) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        record.complete(results);
        self.collection
            .replace_one(doc! { "id": id }, &record)
            .await?;

        Ok(Some(record))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{results, sample_quiz};

    #[actix_web::test]
    async fn test_in_memory_list_keeps_insertion_order() {
        let repo = InMemoryQuizHistoryRepository::new();
        let first = repo.save(QuizRecord::new(sample_quiz())).await.unwrap();
        let second = repo.save(QuizRecord::new(sample_quiz())).await.unwrap();

        let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[actix_web::test]
    async fn test_in_memory_update_results_marks_completion() {
        let repo = InMemoryQuizHistoryRepository::new();
        let record = repo.save(QuizRecord::new(sample_quiz())).await.unwrap();

        let updated = repo
            .update_results(&record.id, results(4, 5))
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.results, Some(results(4, 5)));
        assert!(updated.completed_at.is_some());
        assert_eq!(repo.find_by_id(&record.id).await.unwrap(), Some(updated));
    }

    #[actix_web::test]
    async fn test_in_memory_unknown_ids_are_reported() {
        let repo = InMemoryQuizHistoryRepository::new();

        assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
        assert_eq!(repo.update_results("missing", results(1, 1)).await.unwrap(), None);
        assert!(!repo.delete("missing").await.unwrap());
    }

    #[actix_web::test]
    async fn test_in_memory_delete_removes_only_the_target() {
        let repo = InMemoryQuizHistoryRepository::new();
        let keep = repo.save(QuizRecord::new(sample_quiz())).await.unwrap();
        let remove = repo.save(QuizRecord::new(sample_quiz())).await.unwrap();

        assert!(repo.delete(&remove.id).await.unwrap());
        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }
}
