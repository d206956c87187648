/// A question before its choices are assembled: the text, the right answer and
/// the pool of wrong answers to draw from. Produced by the bank and fallback
/// paths alike.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub correct: String,
    pub distractors: Vec<String>,
    pub explanation: String,
}
