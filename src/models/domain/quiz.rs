use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{difficulty::Difficulty, quiz_question::QuizQuestion};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub quiz_id: Uuid, // Fresh per generation, never derived from the inputs
    pub topic: String,
    pub difficulty: Difficulty,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn new(topic: &str, difficulty: Difficulty, questions: Vec<QuizQuestion>) -> Self {
        Quiz {
            quiz_id: Uuid::new_v4(),
            topic: topic.to_string(),
            difficulty,
            questions,
        }
    }
}
