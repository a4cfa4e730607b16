use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Verdict for a single target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordStatus {
    Correct,
    Partial,
    Incorrect,
    Missing,
}

impl WordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WordStatus::Correct => "correct",
            WordStatus::Partial => "partial",
            WordStatus::Incorrect => "incorrect",
            WordStatus::Missing => "missing",
        }
    }

    /// Statuses the coaching message may single out by name.
    pub fn needs_practice(&self) -> bool {
        matches!(self, WordStatus::Incorrect | WordStatus::Partial)
    }
}

/// One judgment per target word, in target-sentence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordJudgment {
    pub word: String,
    pub status: WordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoken: Option<String>,
}

impl WordJudgment {
    pub fn correct(word: &str, spoken: &str) -> Self {
        Self {
            word: word.to_string(),
            status: WordStatus::Correct,
            expected: None,
            spoken: Some(spoken.to_string()),
        }
    }

    pub fn partial(word: &str, spoken: &str) -> Self {
        Self::mismatch(word, WordStatus::Partial, Some(spoken))
    }

    pub fn incorrect(word: &str, spoken: &str) -> Self {
        Self::mismatch(word, WordStatus::Incorrect, Some(spoken))
    }

    pub fn missing(word: &str) -> Self {
        Self::mismatch(word, WordStatus::Missing, None)
    }

    fn mismatch(word: &str, status: WordStatus, spoken: Option<&str>) -> Self {
        Self {
            word: word.to_string(),
            status,
            expected: Some(word.to_string()),
            spoken: spoken.map(str::to_string),
        }
    }
}

/// Scored comparison of a target sentence against recognized speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub overall_score: u8,
    pub pronunciation_score: u8,
    pub fluency_score: u8,
    pub confidence_score: u8,
    pub feedback: Vec<WordJudgment>,
    pub word_count: usize,
    pub correct_words: usize,
    #[serde(default)]
    pub spoken_word_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ScoreReport {
    /// Zero-score report for input that could not be compared.
    pub(crate) fn degenerate(feedback: Vec<WordJudgment>, message: &str) -> Self {
        Self {
            overall_score: 0,
            pronunciation_score: 0,
            fluency_score: 0,
            confidence_score: 0,
            word_count: feedback.len(),
            feedback,
            correct_words: 0,
            spoken_word_count: 0,
            error_message: Some(message.to_string()),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.error_message.is_some()
    }

    /// First target word judged `incorrect` or `partial`.
    pub fn first_error_word(&self) -> Option<&str> {
        self.feedback
            .iter()
            .find(|judgment| judgment.status.needs_practice())
            .map(|judgment| judgment.word.as_str())
    }

    pub fn count_with_status(&self, status: WordStatus) -> usize {
        self.feedback
            .iter()
            .filter(|judgment| judgment.status == status)
            .count()
    }

    /// Checks the structural guarantees every report must satisfy, whether it
    /// came from the local scorer or an external assessor.
    pub fn is_consistent(&self) -> bool {
        self.consistency_error().is_none()
    }

    /// Describes the first broken guarantee, if any.
    pub fn consistency_error(&self) -> Option<String> {
        let scores = [
            ("overall", self.overall_score),
            ("pronunciation", self.pronunciation_score),
            ("fluency", self.fluency_score),
            ("confidence", self.confidence_score),
        ];
        if let Some((name, score)) = scores.iter().find(|(_, score)| *score > 100) {
            return Some(format!("{name} score {score} is above 100"));
        }

        if self.feedback.len() != self.word_count {
            return Some(format!(
                "{} judgments for {} target words",
                self.feedback.len(),
                self.word_count
            ));
        }

        let counted = self.count_with_status(WordStatus::Correct);
        if self.correct_words != counted {
            return Some(format!(
                "{} correct words reported but {} judged correct",
                self.correct_words, counted
            ));
        }

        None
    }

    /// Plain-text rendering for terminals and logs.
    pub fn summary(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "overall {}/100 (pronunciation {}, fluency {}, confidence {})",
            self.overall_score,
            self.pronunciation_score,
            self.fluency_score,
            self.confidence_score
        );
        if let Some(message) = &self.error_message {
            let _ = writeln!(output, "note: {message}");
        }
        let _ = writeln!(
            output,
            "{} of {} word{} correct, {} spoken",
            self.correct_words,
            self.word_count,
            if self.word_count == 1 { "" } else { "s" },
            self.spoken_word_count
        );
        for judgment in &self.feedback {
            match (&judgment.status, &judgment.spoken) {
                (WordStatus::Correct, _) => {}
                (status, Some(spoken)) => {
                    let _ = writeln!(
                        output,
                        "- {}: {} (heard \"{}\")",
                        judgment.word,
                        status.label(),
                        spoken
                    );
                }
                (status, None) => {
                    let _ = writeln!(output, "- {}: {}", judgment.word, status.label());
                }
            }
        }
        output
    }
}
