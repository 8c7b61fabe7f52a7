pub mod quiz_history_repository;

pub use quiz_history_repository::{
    InMemoryQuizHistoryRepository, MongoQuizHistoryRepository, QuizHistoryRepository,
};
