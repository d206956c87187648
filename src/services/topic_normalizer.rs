use crate::constants::question_bank::TOPIC_ALIASES;

/// Canonical topic key for free-text input.
///
/// Whitespace runs collapse to single spaces, the result is lowercased and then
/// resolved through the alias table. Unknown topics come back in that collapsed,
/// lowercased form, so the function is idempotent.
pub fn normalize_topic(raw_topic: &str) -> String {
    let normalized = raw_topic
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    match TOPIC_ALIASES.get(normalized.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => normalized,
    }
}
