use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::AppResult,
    models::domain::{Difficulty, Quiz},
    repositories::QuizRepository,
    services::quiz_generator::QuizGenerator,
};

pub struct QuizService {
    generator: Arc<dyn QuizGenerator>,
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(generator: Arc<dyn QuizGenerator>, repository: Arc<dyn QuizRepository>) -> Self {
        Self {
            generator,
            repository,
        }
    }

    /// Generates and stores a quiz under a fresh id. `topic` is expected to be
    /// normalized already.
    pub async fn generate_quiz(
        &self,
        topic: &str,
        difficulty: Difficulty,
        num_questions: usize,
    ) -> AppResult<Quiz> {
        log::info!(
            "Generating quiz: topic='{}' difficulty={} num_questions={}",
            topic,
            difficulty,
            num_questions
        );

        let questions = self.generator.generate(topic, difficulty, num_questions)?;
        let quiz = Quiz::new(topic, difficulty, questions);
        self.repository.save(&quiz).await?;

        log::info!("Generated quiz {} for topic '{}'", quiz.quiz_id, topic);
        Ok(quiz)
    }

    pub async fn get_quiz(&self, id: &Uuid) -> AppResult<Option<Quiz>> {
        self.repository.find_by_id(id).await
    }
}
