//! Berlin Numeracy Test.
//!
//! A fixed bank of three questions with integer answers. Scoring is strict
//! exact-match: no partial credit and no unit conversion.

use serde::{Deserialize, Serialize};

/// One question of the test, including its answer.
#[derive(Debug, Clone, Serialize)]
pub struct NumeracyQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: i64,
    pub unit: &'static str,
}

/// A question as exposed to clients, with the answer stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: String,
    pub question: String,
    pub unit: String,
}

/// A single user response submitted for scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    /// Missing and `null` answers are treated the same: skipped.
    #[serde(default)]
    pub answer: Option<i64>,
}

/// Per-question scoring detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResponse {
    pub question: String,
    pub user_answer: i64,
    pub correct_answer: i64,
    pub is_correct: bool,
}

/// Overall test result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumeracyScore {
    pub score: usize,
    pub total: usize,
    pub responses: Vec<ScoredResponse>,
}

/// The fixed question bank.
const QUESTIONS: [NumeracyQuestion; 3] = [
    NumeracyQuestion {
        id: "bnt_1",
        question: "Imagine we are throwing a five-sided die 50 times. On average, out of \
                   these 50 throws how many times would this five-sided die show an odd \
                   number (1, 3 or 5)?",
        answer: 30,
        unit: "out of 50 throws",
    },
    NumeracyQuestion {
        id: "bnt_2",
        question: "Out of 1,000 people in a small town 500 are members of a choir. Out of \
                   these 500 members in the choir 100 are men. Out of the 500 inhabitants \
                   that are not in the choir 300 are men. What is the probability that a \
                   randomly drawn man is a member of the choir?",
        answer: 25,
        unit: "%",
    },
    NumeracyQuestion {
        id: "bnt_3",
        question: "Imagine we are throwing a loaded die (6 sides). The probability that the \
                   die shows a 6 is twice as high as the probability of each of the other \
                   numbers. On average, out of these 70 throws, how many times would the die \
                   show the number 6?",
        answer: 20,
        unit: "out of 70 throws",
    },
];

/// The question bank with answers stripped (API use).
pub fn public_questions() -> Vec<PublicQuestion> {
    QUESTIONS
        .iter()
        .map(|q| PublicQuestion {
            id: q.id.to_string(),
            question: q.question.to_string(),
            unit: q.unit.to_string(),
        })
        .collect()
}

/// Score user responses against the question bank.
///
/// Responses with an unknown id or a missing answer are skipped; each
/// scored response records the question, both answers and correctness.
pub fn score(responses: &[UserResponse]) -> NumeracyScore {
    let mut score = 0;
    let mut detailed = Vec::new();

    for resp in responses {
        let Some(question) = QUESTIONS.iter().find(|q| q.id == resp.id) else {
            continue;
        };
        let Some(user_answer) = resp.answer else {
            continue;
        };

        let is_correct = user_answer == question.answer;
        if is_correct {
            score += 1;
        }
        detailed.push(ScoredResponse {
            question: question.question.to_string(),
            user_answer,
            correct_answer: question.answer,
            is_correct,
        });
    }

    NumeracyScore {
        score,
        total: QUESTIONS.len(),
        responses: detailed,
    }
}
