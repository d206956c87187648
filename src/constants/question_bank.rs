use std::collections::HashMap;

use once_cell::sync::Lazy;

/// One hand-authored question. The bank is read-only; callers copy what they need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionBankItem {
    pub question: &'static str,
    pub correct: &'static str,
    pub distractors: &'static [&'static str],
    pub explanation: &'static str,
}

pub type QuestionBank = HashMap<&'static str, &'static [QuestionBankItem]>;

const PYTHON_LISTS: &[QuestionBankItem] = &[
    QuestionBankItem {
        question: "What is the primary purpose of a Python list?",
        correct: "To store an ordered, mutable collection of items.",
        distractors: &[
            "To store only unique items without order.",
            "To map keys to values in a fixed structure.",
            "To define an immutable sequence of characters.",
        ],
        explanation: "Lists are ordered and mutable, ideal for sequences you need to change.",
    },
    QuestionBankItem {
        question: "Which list operation appends an item to the end?",
        correct: "list.append(item)",
        distractors: &["list.extend(item)", "list.insert(item)", "list.add(item)"],
        explanation: "append adds a single item to the end of a list.",
    },
    QuestionBankItem {
        question: "What does slicing a list return?",
        correct: "A new list containing the selected elements.",
        distractors: &[
            "A tuple with the first and last element.",
            "A view into the original list.",
            "A generator that yields items lazily.",
        ],
        explanation: "Slicing returns a new list with the selected items.",
    },
];

const PYTHON_DICTS: &[QuestionBankItem] = &[
    QuestionBankItem {
        question: "What data structure does a Python dict represent?",
        correct: "A mapping of unique keys to values.",
        distractors: &[
            "An ordered list of duplicate values.",
            "A fixed-size array of numbers.",
            "A stack of items with LIFO access.",
        ],
        explanation: "Dicts map unique keys to values for fast lookup.",
    },
    QuestionBankItem {
        question: "Which method safely retrieves a value with a default?",
        correct: "dict.get(key, default)",
        distractors: &[
            "dict.fetch(key, default)",
            "dict.find(key, default)",
            "dict.value(key, default)",
        ],
        explanation: "get returns the default if the key is missing.",
    },
    QuestionBankItem {
        question: "What happens when you assign an existing key in a dict?",
        correct: "The value is overwritten.",
        distractors: &[
            "A new key is created with a suffix.",
            "The assignment is ignored.",
            "A KeyError is raised.",
        ],
        explanation: "Keys are unique; assigning replaces the existing value.",
    },
];

const PYTHON_FUNCTIONS: &[QuestionBankItem] = &[
    QuestionBankItem {
        question: "What does a function return if no return statement is present?",
        correct: "None",
        distractors: &["False", "0", "An empty string"],
        explanation: "Python functions return None by default.",
    },
    QuestionBankItem {
        question: "What is a parameter in a function definition?",
        correct: "A named variable listed in the function signature.",
        distractors: &[
            "A value passed at call time.",
            "A type annotation only.",
            "A required keyword for all functions.",
        ],
        explanation: "Parameters are variables defined in the function signature.",
    },
    QuestionBankItem {
        question: "What is the purpose of *args in a function?",
        correct: "To accept a variable number of positional arguments.",
        distractors: &[
            "To accept only keyword arguments.",
            "To unpack dictionaries.",
            "To define default values.",
        ],
        explanation: "*args captures extra positional arguments.",
    },
];

const SQL_BASICS: &[QuestionBankItem] = &[
    QuestionBankItem {
        question: "Which SQL clause filters rows in a SELECT query?",
        correct: "WHERE",
        distractors: &["ORDER BY", "GROUP BY", "HAVING"],
        explanation: "WHERE filters rows before grouping or ordering.",
    },
    QuestionBankItem {
        question: "Which SQL statement inserts new rows?",
        correct: "INSERT INTO",
        distractors: &["ADD ROW", "CREATE ROW", "APPEND ROW"],
        explanation: "INSERT INTO adds new rows to a table.",
    },
    QuestionBankItem {
        question: "What does SELECT * do in SQL?",
        correct: "Returns all columns from the selected tables.",
        distractors: &[
            "Returns only primary key columns.",
            "Deletes all rows from the table.",
            "Returns only aggregated values.",
        ],
        explanation: "SELECT * retrieves all columns in the result set.",
    },
];

/// Curated questions keyed by canonical topic.
pub static QUESTION_BANK: Lazy<QuestionBank> = Lazy::new(|| {
    HashMap::from([
        ("python lists", PYTHON_LISTS),
        ("python dicts", PYTHON_DICTS),
        ("python functions", PYTHON_FUNCTIONS),
        ("sql basics", SQL_BASICS),
    ])
});

/// Free-text spellings (already whitespace-collapsed and lowercased) that map
/// onto a bank topic. Every bank key maps to itself.
pub static TOPIC_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("list", "python lists"),
        ("lists", "python lists"),
        ("python list", "python lists"),
        ("python lists", "python lists"),
        ("dict", "python dicts"),
        ("dicts", "python dicts"),
        ("dictionary", "python dicts"),
        ("dictionaries", "python dicts"),
        ("python dict", "python dicts"),
        ("python dicts", "python dicts"),
        ("function", "python functions"),
        ("functions", "python functions"),
        ("python function", "python functions"),
        ("python functions", "python functions"),
        ("sql", "sql basics"),
        ("sql basics", "sql basics"),
    ])
});

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_bank_topic_is_its_own_alias() {
        for topic in QUESTION_BANK.keys() {
            assert_eq!(TOPIC_ALIASES.get(topic), Some(topic), "missing self alias for {topic}");
        }
    }

    #[test]
    fn every_alias_target_is_a_bank_topic() {
        for target in TOPIC_ALIASES.values() {
            assert!(QUESTION_BANK.contains_key(target), "alias target {target} not in bank");
        }
    }

    #[test]
    fn bank_items_have_three_distinct_usable_distractors() {
        for (topic, items) in QUESTION_BANK.iter() {
            assert!(!items.is_empty(), "{topic} has no questions");
            for item in items.iter() {
                let usable: HashSet<_> = item
                    .distractors
                    .iter()
                    .filter(|d| **d != item.correct)
                    .collect();
                assert!(usable.len() >= 3, "{topic}: '{}' lacks distractors", item.question);
            }
        }
    }
}
