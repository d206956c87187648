use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::{
    constants::question_bank::{QuestionBank, QuestionBankItem, QUESTION_BANK},
    errors::{AppError, AppResult},
    models::domain::{Difficulty, QuestionDraft, QuizQuestion},
    services::{choice_assembler::assemble_choices, fallback_generator::fallback_drafts},
};

pub const MIN_QUESTIONS: usize = 1;
pub const MAX_QUESTIONS: usize = 20;

/// Source of question content for a quiz.
#[cfg_attr(test, mockall::automock)]
pub trait QuizGenerator: Send + Sync {
    fn generate(
        &self,
        topic: &str,
        difficulty: Difficulty,
        num_questions: usize,
    ) -> AppResult<Vec<QuizQuestion>>;
}

/// Generator whose output depends only on its inputs.
///
/// Every call seeds its own [`StdRng`] from the inputs, so equal inputs give
/// byte-identical questions no matter how many calls run concurrently.
pub struct DeterministicQuizGenerator {
    bank: &'static QuestionBank,
}

impl DeterministicQuizGenerator {
    pub fn new() -> Self {
        Self {
            bank: &QUESTION_BANK,
        }
    }

    fn bank_drafts<R: Rng + ?Sized>(
        items: &[QuestionBankItem],
        num_questions: usize,
        rng: &mut R,
    ) -> Vec<QuestionDraft> {
        let mut items = items.to_vec();
        items.shuffle(rng);

        (0..num_questions)
            .map(|i| {
                let item = &items[i % items.len()];
                QuestionDraft {
                    question: item.question.to_string(),
                    correct: item.correct.to_string(),
                    distractors: item.distractors.iter().map(|d| d.to_string()).collect(),
                    explanation: item.explanation.to_string(),
                }
            })
            .collect()
    }
}

impl Default for DeterministicQuizGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizGenerator for DeterministicQuizGenerator {
    fn generate(
        &self,
        topic: &str,
        difficulty: Difficulty,
        num_questions: usize,
    ) -> AppResult<Vec<QuizQuestion>> {
        if topic.trim().is_empty() {
            return Err(AppError::InvalidInput("topic must be non-empty".to_string()));
        }
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&num_questions) {
            return Err(AppError::InvalidInput(format!(
                "num_questions must be between {} and {}, got {}",
                MIN_QUESTIONS, MAX_QUESTIONS, num_questions
            )));
        }

        let mut rng = StdRng::from_seed(content_seed(topic, difficulty, num_questions));

        let drafts = match self.bank.get(topic).filter(|items| !items.is_empty()) {
            Some(items) => {
                log::debug!("Using question bank for '{}' ({} items)", topic, items.len());
                Self::bank_drafts(items, num_questions, &mut rng)
            }
            None => {
                log::debug!("No bank entry for '{}', using generic templates", topic);
                fallback_drafts(topic, num_questions, &mut rng)
            }
        };

        drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| {
                let assembled = assemble_choices(&draft.correct, &draft.distractors, &mut rng)?;
                Ok(QuizQuestion {
                    id: i as u32 + 1,
                    question: format!("{} ({})", draft.question, difficulty),
                    choices: assembled.choices,
                    answer_index: assembled.answer_index,
                    explanation: draft.explanation,
                })
            })
            .collect()
    }
}

/// SHA-256 of `"{topic}|{difficulty}|{num_questions}"`. The 32 digest bytes
/// are the 256-bit seed in big-endian order.
pub fn content_seed(topic: &str, difficulty: Difficulty, num_questions: usize) -> [u8; 32] {
    let seed_input = format!("{}|{}|{}", topic, difficulty, num_questions);
    let digest = Sha256::digest(seed_input.as_bytes());
    log::debug!("Content seed for '{}' is {:x}", seed_input, digest);
    digest.into()
}
