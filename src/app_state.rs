use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemoryQuizRepository, QuizRepository},
    services::{quiz_generator::DeterministicQuizGenerator, QuizGenerator, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = Arc::new(DeterministicQuizGenerator::new());
        let quiz_repository = Arc::new(InMemoryQuizRepository::new());

        Self::with_components(config, generator, quiz_repository)
    }

    pub fn with_components(
        config: Config,
        generator: Arc<dyn QuizGenerator>,
        quiz_repository: Arc<dyn QuizRepository>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(generator, quiz_repository));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
