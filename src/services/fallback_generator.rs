use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    constants::generic_templates::{
        GENERIC_ANSWER_SETS, GENERIC_EXPLANATIONS, GENERIC_STEMS, TOPIC_PLACEHOLDER,
    },
    models::domain::QuestionDraft,
};

/// Templated drafts for a topic the bank does not cover.
///
/// Only the stems are shuffled; answer sets and explanations cycle in their
/// fixed order so the same index always pairs with the same answer set.
pub fn fallback_drafts<R: Rng + ?Sized>(
    topic: &str,
    num_questions: usize,
    rng: &mut R,
) -> Vec<QuestionDraft> {
    let mut stems = GENERIC_STEMS.to_vec();
    stems.shuffle(rng);

    (0..num_questions)
        .map(|i| {
            let stem = stems[i % stems.len()];
            let (correct, distractors) = GENERIC_ANSWER_SETS[i % GENERIC_ANSWER_SETS.len()];
            let explanation = GENERIC_EXPLANATIONS[i % GENERIC_EXPLANATIONS.len()];

            QuestionDraft {
                question: fill_topic(stem, topic),
                correct: fill_topic(correct, topic),
                distractors: distractors.iter().map(|d| fill_topic(d, topic)).collect(),
                explanation: explanation.to_string(),
            }
        })
        .collect()
}

fn fill_topic(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}
