//! Multiple-choice comprehension questions for extracted risks.
//!
//! Each risk statement gets a four-choice question: the correct frequency
//! restatement, a complement distractor, a unit-confusion distractor, and a
//! "cannot be determined" distractor. Choice order is randomized.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One answer choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub is_correct: bool,
}

/// A generated comprehension question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mcq {
    pub question: String,
    pub choices: Vec<Choice>,
}

impl Mcq {
    /// Build the question for a normalized risk value (0-100 percentage).
    ///
    /// Choices are shuffled, so their ordering is non-deterministic.
    pub fn generate(value: f64) -> Self {
        let question = format!(
            "The statement mentions a risk of {:.1}%. This is the same as...",
            value
        );

        let correct_val = value.round() as i64;
        let complement_val = 100 - correct_val;

        let mut choices = vec![
            Choice {
                text: format!("{} people out of 100.", correct_val),
                is_correct: true,
            },
            Choice {
                text: format!("{} people out of 100.", complement_val),
                is_correct: false,
            },
            Choice {
                text: format!("{} people out of 1,000.", correct_val),
                is_correct: false,
            },
            Choice {
                text: "It is impossible to say from the information given.".to_string(),
                is_correct: false,
            },
        ];
        choices.shuffle(&mut rand::thread_rng());

        Self { question, choices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_correct_choice() {
        let mcq = Mcq::generate(45.0);
        assert_eq!(mcq.choices.len(), 4);
        assert_eq!(mcq.choices.iter().filter(|c| c.is_correct).count(), 1);
    }

    #[test]
    fn test_correct_choice_is_rounded_frequency() {
        let mcq = Mcq::generate(3.5);
        let correct = mcq.choices.iter().find(|c| c.is_correct).unwrap();
        assert_eq!(correct.text, "4 people out of 100.");
    }

    #[test]
    fn test_question_mentions_value() {
        let mcq = Mcq::generate(12.34);
        assert!(mcq.question.contains("12.3%"));
    }

    #[test]
    fn test_distractors_present_regardless_of_order() {
        let mcq = Mcq::generate(40.0);
        let texts: Vec<&str> = mcq.choices.iter().map(|c| c.text.as_str()).collect();
        assert!(texts.contains(&"40 people out of 100."));
        assert!(texts.contains(&"60 people out of 100."));
        assert!(texts.contains(&"40 people out of 1,000."));
        assert!(texts.contains(&"It is impossible to say from the information given."));
    }
}
