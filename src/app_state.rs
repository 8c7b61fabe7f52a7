use std::sync::Arc;

use crate::{
    config::{Config, HistoryStore},
    db,
    errors::AppResult,
    repositories::{
        InMemoryQuizHistoryRepository, MongoQuizHistoryRepository, QuizHistoryRepository,
    },
    services::{
        build_language_model, AnswerEvaluator, DocumentService, LanguageModel, QuizComposer,
        QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub evaluator: Arc<AnswerEvaluator>,
    pub document_service: Arc<DocumentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let model = build_language_model(&config);

        let repository: Arc<dyn QuizHistoryRepository> = match config.history_store {
            HistoryStore::Memory => {
                log::info!("Keeping quiz history in memory");
                Arc::new(InMemoryQuizHistoryRepository::new())
            }
            HistoryStore::Mongo => {
                let db = db::connect(&config).await?;
                let repository =
                    MongoQuizHistoryRepository::new(&db, &config.quiz_history_collection);
                repository.ensure_indexes().await?;
                Arc::new(repository)
            }
        };

        Ok(Self::with_components(config, model, repository))
    }

    /// Wires services around an already built backend and history store.
    pub fn with_components(
        config: Config,
        model: Arc<dyn LanguageModel>,
        repository: Arc<dyn QuizHistoryRepository>,
    ) -> Self {
        let composer = QuizComposer::new(Arc::clone(&model));

        Self {
            quiz_service: Arc::new(QuizService::new(composer, repository)),
            evaluator: Arc::new(AnswerEvaluator::new(model)),
            document_service: Arc::new(DocumentService::new()),
            config: Arc::new(config),
        }
    }
}
