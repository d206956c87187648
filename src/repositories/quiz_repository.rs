use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn save(&self, quiz: &Quiz) -> AppResult<()>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Quiz>>;
}

/// Unbounded process-local store. Quizzes live until the process exits.
#[derive(Clone, Default)]
pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<Uuid, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.quizzes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.quizzes.read().await.is_empty()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn save(&self, quiz: &Quiz) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.quiz_id) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with id '{}' already exists",
                quiz.quiz_id
            )));
        }

        quizzes.insert(quiz.quiz_id, quiz.clone());
        log::debug!("Stored quiz {} ({} total)", quiz.quiz_id, quizzes.len());
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }
}
