use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    constants::generic_templates::FILLER_DISTRACTORS,
    errors::{AppError, AppResult},
    models::domain::quiz_question::CHOICES_PER_QUESTION,
};

const DISTRACTORS_PER_QUESTION: usize = CHOICES_PER_QUESTION - 1;

/// Shuffled choices for one question plus the index of the correct one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledChoices {
    pub choices: Vec<String>,
    pub answer_index: usize,
}

/// Builds four unique choices from `correct` and its distractor pool, padding
/// with the standard fillers, and shuffles them with `rng`.
///
/// The shuffle advances `rng`, so consecutive calls on the same source give
/// different orders even for identical pools.
///
/// # Errors
/// Returns [`AppError::DistractorExhaustion`] when fewer than three distinct
/// distractors exist after padding.
pub fn assemble_choices<R: Rng + ?Sized>(
    correct: &str,
    distractors: &[String],
    rng: &mut R,
) -> AppResult<AssembledChoices> {
    assemble_with_fillers(correct, distractors, FILLER_DISTRACTORS, rng)
}

fn assemble_with_fillers<R: Rng + ?Sized>(
    correct: &str,
    distractors: &[String],
    fillers: &[&str],
    rng: &mut R,
) -> AppResult<AssembledChoices> {
    let mut candidates: Vec<&str> = Vec::with_capacity(DISTRACTORS_PER_QUESTION);
    for distractor in distractors.iter().map(String::as_str) {
        if distractor != correct && !candidates.contains(&distractor) {
            candidates.push(distractor);
        }
    }

    for filler in fillers {
        if candidates.len() >= DISTRACTORS_PER_QUESTION {
            break;
        }
        if *filler != correct && !candidates.contains(filler) {
            candidates.push(*filler);
        }
    }

    if candidates.len() < DISTRACTORS_PER_QUESTION {
        return Err(AppError::DistractorExhaustion(format!(
            "'{}' has {} of {} distractors",
            correct,
            candidates.len(),
            DISTRACTORS_PER_QUESTION
        )));
    }

    let mut choices: Vec<String> = std::iter::once(correct)
        .chain(candidates.into_iter().take(DISTRACTORS_PER_QUESTION))
        .map(str::to_string)
        .collect();
    choices.shuffle(rng);

    let answer_index = choices
        .iter()
        .position(|choice| choice == correct)
        .ok_or_else(|| AppError::InternalError(format!("'{}' lost during shuffle", correct)))?;

    Ok(AssembledChoices {
        choices,
        answer_index,
    })
}
