use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreReport;

/// One finished recording to assess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub target_text: String,
    #[serde(default)]
    pub spoken_text: String,
    /// Coaching text already produced upstream, used verbatim when non-blank.
    #[serde(default)]
    pub ai_feedback: Option<String>,
}

impl AssessmentRequest {
    pub fn new(target_text: impl Into<String>, spoken_text: impl Into<String>) -> Self {
        Self {
            target_text: target_text.into(),
            spoken_text: spoken_text.into(),
            ai_feedback: None,
        }
    }

    pub fn with_ai_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.ai_feedback = Some(feedback.into());
        self
    }
}

/// Which path produced the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSource {
    Local,
    Oracle,
}

impl AssessmentSource {
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentSource::Local => "local",
            AssessmentSource::Oracle => "oracle",
        }
    }
}

/// Record handed to persistence and rendering once an attempt is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub source: AssessmentSource,
    pub report: ScoreReport,
    pub message: String,
    pub assessed_at: DateTime<Utc>,
}
