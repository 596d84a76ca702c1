//! Grade-level readability scoring.
//!
//! Implements three standard readability formulas (SMOG, Gunning-Fog and
//! Flesch-Kincaid grade) over a shared sentence/word/syllable tokenizer,
//! and reports their arithmetic mean as a combined grade level.

use serde::{Deserialize, Serialize};

/// Readability scores for a text, rounded to two decimals.
///
/// All fields are `None` when the input text contains no words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub smog_index: Option<f64>,
    pub gunning_fog: Option<f64>,
    pub flesch_kincaid_grade: Option<f64>,
    pub average_grade_level: Option<f64>,
}

impl ReadabilityScores {
    /// The all-`None` result returned for empty input.
    pub fn empty() -> Self {
        Self {
            smog_index: None,
            gunning_fog: None,
            flesch_kincaid_grade: None,
            average_grade_level: None,
        }
    }
}

/// Counts extracted from a text once and shared by all formulas.
#[derive(Debug, Clone, Copy)]
struct TextCounts {
    words: usize,
    sentences: usize,
    syllables: usize,
    /// Words with three or more syllables.
    polysyllables: usize,
}

/// Readability analyzer.
pub struct Readability;

impl Readability {
    /// Compute all readability scores for `text`.
    pub fn analyze(text: &str) -> ReadabilityScores {
        let counts = count_text(text);
        if counts.words == 0 {
            return ReadabilityScores::empty();
        }

        let smog = smog_index(&counts);
        let fog = gunning_fog(&counts);
        let fk = flesch_kincaid_grade(&counts);
        let average = (smog + fog + fk) / 3.0;

        ReadabilityScores {
            smog_index: Some(round2(smog)),
            gunning_fog: Some(round2(fog)),
            flesch_kincaid_grade: Some(round2(fk)),
            average_grade_level: Some(round2(average)),
        }
    }
}

/// SMOG index: `3.1291 + 1.043 * sqrt(polysyllables * 30 / sentences)`.
///
/// Defined as 0.0 when the text has fewer than 3 sentences, matching the
/// reference formula's minimum sample size.
fn smog_index(counts: &TextCounts) -> f64 {
    if counts.sentences < 3 {
        return 0.0;
    }
    let poly = counts.polysyllables as f64;
    let sentences = counts.sentences as f64;
    3.1291 + 1.043 * (poly * 30.0 / sentences).sqrt()
}

/// Gunning-Fog: `0.4 * (words/sentences + 100 * complex_words/words)`.
fn gunning_fog(counts: &TextCounts) -> f64 {
    let words = counts.words as f64;
    let sentences = counts.sentences.max(1) as f64;
    let complex = counts.polysyllables as f64;
    0.4 * (words / sentences + 100.0 * complex / words)
}

/// Flesch-Kincaid grade: `0.39 * words/sentences + 11.8 * syllables/words - 15.59`.
fn flesch_kincaid_grade(counts: &TextCounts) -> f64 {
    let words = counts.words as f64;
    let sentences = counts.sentences.max(1) as f64;
    let syllables = counts.syllables as f64;
    0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
}

fn count_text(text: &str) -> TextCounts {
    let words = tokenize_words(text);
    let word_count = words.len();

    let mut syllables = 0;
    let mut polysyllables = 0;
    for word in &words {
        let s = count_syllables(word);
        syllables += s;
        if s >= 3 {
            polysyllables += 1;
        }
    }

    TextCounts {
        words: word_count,
        sentences: count_sentences(text, word_count),
        syllables,
        polysyllables,
    }
}

/// Split text into words: whitespace-separated tokens containing at least
/// one alphabetic character.
fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| token.chars().any(|c| c.is_alphabetic()))
        .collect()
}

/// Count sentences by terminal punctuation. Any text with words counts as
/// at least one sentence.
fn count_sentences(text: &str, word_count: usize) -> usize {
    let count = text
        .split(|c: char| matches!(c, '.' | '!' | '?'))
        .filter(|segment| segment.chars().any(|c| c.is_alphabetic()))
        .count();

    if count == 0 && word_count > 0 {
        1
    } else {
        count
    }
}

/// Heuristic English syllable count: vowel groups, minus a silent trailing
/// 'e' (except the "-le" ending), with a floor of one.
fn count_syllables(word: &str) -> usize {
    let w: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if w.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut prev_vowel = false;
    for c in w.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if count > 1 && w.ends_with('e') && !w.ends_with("le") {
        count -= 1;
    }

    count.max(1)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_counting() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("probability"), 5);
    }

    #[test]
    fn test_sentence_counting() {
        assert_eq!(count_sentences("One. Two! Three?", 3), 3);
        assert_eq!(count_sentences("no terminal punctuation", 3), 1);
        assert_eq!(count_sentences("Trailing dots...", 2), 1);
    }

    #[test]
    fn test_empty_text_yields_null_scores() {
        assert_eq!(Readability::analyze(""), ReadabilityScores::empty());
        assert_eq!(Readability::analyze("   \n  "), ReadabilityScores::empty());
        assert_eq!(Readability::analyze("123 456 %%"), ReadabilityScores::empty());
    }

    #[test]
    fn test_smog_needs_three_sentences() {
        let short = "The cat sat on the mat.";
        let scores = Readability::analyze(short);
        assert_eq!(scores.smog_index, Some(0.0));
        // The other formulas still produce values.
        assert!(scores.gunning_fog.is_some());
        assert!(scores.flesch_kincaid_grade.is_some());
    }

    #[test]
    fn test_complex_text_scores_higher() {
        let simple = "The cat sat. The dog ran. The sun shone. It was a good day.";
        let complex = "Epidemiological investigations demonstrate considerable variability. \
                       Pharmaceutical interventions necessitate comprehensive evaluation. \
                       Cardiovascular complications frequently accompany metabolic disorders.";

        let simple_scores = Readability::analyze(simple);
        let complex_scores = Readability::analyze(complex);

        assert!(
            complex_scores.average_grade_level.unwrap() > simple_scores.average_grade_level.unwrap()
        );
        assert!(complex_scores.smog_index.unwrap() > 3.0);
    }

    #[test]
    fn test_average_is_mean_of_three() {
        let text = "Doctors recommend regular exercise. Patients should eat vegetables. \
                    Medication adherence improves outcomes.";
        let scores = Readability::analyze(text);
        let expected =
            (scores.smog_index.unwrap() + scores.gunning_fog.unwrap()
                + scores.flesch_kincaid_grade.unwrap())
                / 3.0;
        // Rounding of the components vs. the mean can differ by at most a cent.
        assert!((scores.average_grade_level.unwrap() - expected).abs() < 0.02);
    }
}
