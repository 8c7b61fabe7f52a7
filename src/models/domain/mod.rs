pub mod concept;
pub mod evaluation;
pub mod preferences;
pub mod question;
pub mod quiz;
pub mod segment;

pub use concept::{ConceptCandidate, ConceptKind};
pub use evaluation::{AssessmentSource, EvaluationResult, QualitativeAssessment};
pub use preferences::{AnswerStyle, QuestionType, QuizPreferences};
pub use question::{Difficulty, McqQuestion, Question, SaqQuestion};
pub use quiz::{Quiz, QuizRecord, QuizResults, QuizStatistics};
pub use segment::Segment;
