use crate::models::domain::{Difficulty, Quiz, QuizQuestion};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a well-formed question with the given id
    pub fn test_question(id: u32) -> QuizQuestion {
        QuizQuestion {
            id,
            question: format!("Sample question {} (easy)", id),
            choices: vec![
                "Right".to_string(),
                "Wrong one".to_string(),
                "Wrong two".to_string(),
                "Wrong three".to_string(),
            ],
            answer_index: 0,
            explanation: "Right is right.".to_string(),
        }
    }

    /// Creates a standard test quiz with three questions
    pub fn test_quiz() -> Quiz {
        Quiz::new(
            "sql basics",
            Difficulty::Easy,
            (1..=3).map(test_question).collect(),
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashSet;

    use actix_web::http::StatusCode;

    use super::*;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts the shape every generated question must have
    pub fn assert_well_formed(question: &QuizQuestion) {
        assert_eq!(question.choices.len(), 4, "question {} choices", question.id);
        let unique: HashSet<_> = question.choices.iter().collect();
        assert_eq!(unique.len(), 4, "duplicate choices in {:?}", question.choices);
        assert!(question.answer_index <= 3);
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;

    #[test]
    fn test_fixtures_test_quiz() {
        let quiz = test_quiz();
        assert_eq!(quiz.topic, "sql basics");
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.questions[2].id, 3);
    }

    #[test]
    fn test_fixtures_questions_are_well_formed() {
        for question in test_quiz().questions {
            assert_well_formed(&question);
            assert_eq!(question.correct_choice(), Some("Right"));
        }
    }
}
