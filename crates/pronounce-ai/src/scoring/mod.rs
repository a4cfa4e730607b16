//! Local pronunciation scoring.
//!
//! Everything in this module is pure: reports are built fresh per call and
//! the same inputs always produce the same report.

mod alignment;
mod feedback;
mod normalizer;
mod report;
mod similarity;

pub use alignment::align_words;
pub use feedback::generate_feedback;
pub use normalizer::normalize;
pub use report::{ScoreReport, WordJudgment, WordStatus};
pub use similarity::{is_similar, levenshtein_distance};

use normalizer::split_words;

pub const EMPTY_TARGET_MESSAGE: &str = "Target text is empty";
pub const NO_SPEECH_MESSAGE: &str = "No speech detected";

const OVERLONG_RATIO: f64 = 1.3;
const TRUNCATED_RATIO: f64 = 0.7;
const OVERLONG_PENALTY: f64 = 15.0;
const TRUNCATED_PENALTY: f64 = 20.0;
const CONFIDENT_ACCURACY: f64 = 90.0;
const CONFIDENCE_PENALTY: f64 = 5.0;

const ACCURACY_WEIGHT: f64 = 0.4;
const PRONUNCIATION_WEIGHT: f64 = 0.3;
const FLUENCY_WEIGHT: f64 = 0.2;
const CONFIDENCE_WEIGHT: f64 = 0.1;

/// Compare recognized speech against the target sentence.
pub fn calculate_score(target_text: &str, spoken_text: &str) -> ScoreReport {
    if target_text.trim().is_empty() {
        return ScoreReport::degenerate(Vec::new(), EMPTY_TARGET_MESSAGE);
    }

    let target = normalize(target_text);
    let target_words = split_words(&target);

    if spoken_text.trim().is_empty() {
        let feedback = target_words
            .iter()
            .map(|word| WordJudgment::missing(word))
            .collect();
        return ScoreReport::degenerate(feedback, NO_SPEECH_MESSAGE);
    }

    let spoken = normalize(spoken_text);
    let spoken_words = split_words(&spoken);

    let feedback = align_words(&target_words, &spoken_words);
    let correct_words = feedback
        .iter()
        .filter(|judgment| judgment.status == WordStatus::Correct)
        .count();
    let total_words = target_words.len();

    let scores = SubScores::from_counts(correct_words, total_words, spoken_words.len());

    ScoreReport {
        overall_score: scores.overall(),
        pronunciation_score: to_score(scores.pronunciation),
        fluency_score: to_score(scores.fluency),
        confidence_score: to_score(scores.confidence),
        feedback,
        word_count: total_words,
        correct_words,
        spoken_word_count: spoken_words.len(),
        error_message: None,
    }
}

/// Unrounded sub-scores on a 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SubScores {
    accuracy: f64,
    pronunciation: f64,
    fluency: f64,
    confidence: f64,
}

impl SubScores {
    fn from_counts(correct_words: usize, total_words: usize, spoken_words: usize) -> Self {
        // A target made only of stripped punctuation has no words to score.
        if total_words == 0 {
            return Self {
                accuracy: 0.0,
                pronunciation: 0.0,
                fluency: 0.0,
                confidence: 0.0,
            };
        }

        let accuracy = correct_words as f64 / total_words as f64 * 100.0;
        let length_ratio = spoken_words as f64 / total_words as f64;

        let fluency = if length_ratio > OVERLONG_RATIO {
            (accuracy - OVERLONG_PENALTY).max(0.0)
        } else if length_ratio < TRUNCATED_RATIO {
            (accuracy - TRUNCATED_PENALTY).max(0.0)
        } else {
            accuracy
        };

        let confidence = if accuracy > CONFIDENT_ACCURACY {
            accuracy
        } else {
            (accuracy - CONFIDENCE_PENALTY).max(0.0)
        };

        Self {
            accuracy,
            pronunciation: accuracy,
            fluency,
            confidence,
        }
    }

    fn overall(&self) -> u8 {
        to_score(
            self.accuracy * ACCURACY_WEIGHT
                + self.pronunciation * PRONUNCIATION_WEIGHT
                + self.fluency * FLUENCY_WEIGHT
                + self.confidence * CONFIDENCE_WEIGHT,
        )
    }
}

fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_scores_penalize_truncated_speech_harder_than_overlong_speech() {
        let truncated = SubScores::from_counts(10, 10, 6);
        let overlong = SubScores::from_counts(10, 10, 14);
        assert_eq!(truncated.fluency, 80.0);
        assert_eq!(overlong.fluency, 85.0);
    }

    #[test]
    fn length_ratio_boundaries_are_not_penalized() {
        assert_eq!(SubScores::from_counts(10, 10, 7).fluency, 100.0);
        assert_eq!(SubScores::from_counts(10, 10, 13).fluency, 100.0);
    }

    #[test]
    fn confidence_penalty_applies_at_ninety_and_below() {
        assert_eq!(SubScores::from_counts(9, 10, 10).confidence, 85.0);
        assert_eq!(SubScores::from_counts(1, 1, 1).confidence, 100.0);
        assert_eq!(SubScores::from_counts(0, 4, 4).confidence, 0.0);
    }

    #[test]
    fn overall_weights_unrounded_sub_scores() {
        // accuracy 2/3: 66.67*0.4 + 66.67*0.3 + 46.67*0.2 + 61.67*0.1 = 62.17
        assert_eq!(SubScores::from_counts(2, 3, 1).overall(), 62);
    }

    #[test]
    fn punctuation_only_target_scores_zero_without_error() {
        let report = calculate_score("?!", "hello");
        assert_eq!(report.word_count, 0);
        assert!(report.feedback.is_empty());
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.spoken_word_count, 1);
        assert_eq!(report.error_message, None);
    }

    #[test]
    fn to_score_rounds_and_clamps() {
        assert_eq!(to_score(74.5), 75);
        assert_eq!(to_score(-3.0), 0);
        assert_eq!(to_score(100.4), 100);
        assert_eq!(to_score(180.0), 100);
    }
}
