pub mod difficulty;
pub mod question_draft;
pub mod quiz;
pub mod quiz_question;
pub use difficulty::Difficulty;
pub use question_draft::QuestionDraft;
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
