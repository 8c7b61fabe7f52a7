pub mod answer_evaluator;
pub mod document_service;
pub mod fallback_generator;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_composer;
pub mod quiz_service;

pub use answer_evaluator::AnswerEvaluator;
pub use document_service::DocumentService;
pub use model_service::{build_language_model, LanguageModel};
pub use quiz_composer::QuizComposer;
pub use quiz_service::QuizService;
