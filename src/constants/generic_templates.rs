//! Topic-agnostic templates for topics the bank does not cover. Every
//! `{topic}` placeholder is replaced with the canonical topic.

pub const TOPIC_PLACEHOLDER: &str = "{topic}";

pub const GENERIC_STEMS: &[&str] = &[
    "Which statement about {topic} is correct?",
    "Pick the best answer related to {topic}.",
    "In {topic}, which option fits best?",
    "Choose the correct concept about {topic}.",
    "Which option best describes {topic}?",
];

/// (correct answer, distractors) pairs, cycled in order.
pub const GENERIC_ANSWER_SETS: &[(&str, &[&str])] = &[
    (
        "{topic} has defined rules and common real-world use cases.",
        &[
            "{topic} is only used for styling user interfaces.",
            "{topic} has no practical applications.",
            "{topic} is a random string with no structure.",
        ],
    ),
    (
        "{topic} follows consistent patterns that make it predictable.",
        &[
            "{topic} is purely a visual design principle.",
            "{topic} cannot be learned or practiced.",
            "{topic} is unrelated to problem solving.",
        ],
    ),
    (
        "{topic} is commonly used to solve problems efficiently.",
        &[
            "{topic} only applies to hardware manufacturing.",
            "{topic} is a deprecated concept with no usage today.",
            "{topic} has no defined behavior or purpose.",
        ],
    ),
];

pub const GENERIC_EXPLANATIONS: &[&str] = &[
    "The correct choice reflects the typical definition and usage.",
    "The correct answer aligns with how the topic is commonly applied.",
    "The correct option matches standard expectations for the topic.",
];

/// Padding used when a question has fewer than three usable distractors.
pub const FILLER_DISTRACTORS: &[&str] = &[
    "None of the above.",
    "All of the above.",
    "Not enough information.",
    "Depends on the context.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_mentions_the_topic() {
        for stem in GENERIC_STEMS {
            assert!(stem.contains(TOPIC_PLACEHOLDER), "stem without topic: {stem}");
        }
        for (correct, distractors) in GENERIC_ANSWER_SETS {
            assert!(correct.contains(TOPIC_PLACEHOLDER));
            assert_eq!(distractors.len(), 3);
            assert!(distractors.iter().all(|d| d.contains(TOPIC_PLACEHOLDER)));
        }
    }

    #[test]
    fn fillers_can_always_complete_a_choice_set() {
        // One filler may collide with the correct answer; three must remain.
        assert!(FILLER_DISTRACTORS.len() >= 4);
    }
}
