pub mod choice_assembler;
pub mod fallback_generator;
pub mod quiz_generator;
pub mod quiz_service;
pub mod topic_normalizer;

pub use quiz_generator::{DeterministicQuizGenerator, QuizGenerator};
pub use quiz_service::QuizService;
pub use topic_normalizer::normalize_topic;
