use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::Difficulty;

pub const DEFAULT_NUM_QUESTIONS: usize = 5;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(
        length(min = 1, max = 120, message = "topic must be between 1 and 120 characters"),
        custom(function = validate_topic_not_blank)
    )]
    pub topic: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 20, message = "num_questions must be between 1 and 20"))]
    pub num_questions: usize,
}

impl GenerateQuizRequest {
    /// Topic with surrounding whitespace removed, as handed to the normalizer.
    pub fn trimmed_topic(&self) -> &str {
        self.topic.trim()
    }
}

fn default_num_questions() -> usize {
    DEFAULT_NUM_QUESTIONS
}

fn validate_topic_not_blank(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        let mut error = ValidationError::new("blank_topic");
        error.message = Some("topic must be non-empty".into());
        return Err(error);
    }
    Ok(())
}
