use serde::{Deserialize, Serialize};

pub const CHOICES_PER_QUESTION: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: u32, // 1-based position within the quiz
    pub question: String,
    pub choices: Vec<String>,
    pub answer_index: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(self.answer_index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> QuizQuestion {
        QuizQuestion {
            id: 1,
            question: "Which SQL clause filters rows in a SELECT query? (easy)".to_string(),
            choices: vec![
                "ORDER BY".to_string(),
                "WHERE".to_string(),
                "GROUP BY".to_string(),
                "HAVING".to_string(),
            ],
            answer_index: 1,
            explanation: "WHERE filters rows before grouping or ordering.".to_string(),
        }
    }

    #[test]
    fn correct_choice_points_into_choices() {
        let question = sample_question();
        assert_eq!(question.correct_choice(), Some("WHERE"));
    }

    #[test]
    fn correct_choice_is_none_when_index_out_of_range() {
        let mut question = sample_question();
        question.answer_index = CHOICES_PER_QUESTION;
        assert_eq!(question.correct_choice(), None);
    }

    #[test]
    fn quiz_question_serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample_question()).expect("question should serialize");

        assert_eq!(value["id"], 1);
        assert_eq!(value["answer_index"], 1);
        assert_eq!(value["choices"].as_array().map(Vec::len), Some(4));
        assert!(value["explanation"].is_string());
    }
}
