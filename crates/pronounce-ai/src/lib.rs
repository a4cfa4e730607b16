//! Pronunciation scoring for spoken practice sentences.
//!
//! The [`scoring`] module compares a target sentence with recognized speech and
//! produces a per-word report. [`assessment`] decides whether that local scorer
//! or an external AI assessor produces the report for a given attempt.

pub mod assessment;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;

pub use assessment::{
    assessment_router, AssessmentOracle, AssessmentOutcome, AssessmentRequest, AssessmentService,
    AssessmentSource, TranscriptBuffer,
};
pub use scoring::{
    calculate_score, generate_feedback, normalize, ScoreReport, WordJudgment, WordStatus,
};
