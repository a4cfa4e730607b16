use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{AssessmentOutcome, AssessmentRequest, AssessmentSource};
use super::oracle::{self, AssessmentOracle, DisabledOracle, OracleAssessment, OracleError};
use crate::config::ScoringConfig;
use crate::scoring::{calculate_score, generate_feedback, ScoreReport};

/// Service choosing between the external oracle and the local scorer.
///
/// The local scorer is the deterministic fallback: any oracle error, or an
/// oracle report that breaks the report invariants, is logged and replaced by
/// a locally computed report.
pub struct AssessmentService<O> {
    config: ScoringConfig,
    oracle: Arc<O>,
}

impl AssessmentService<DisabledOracle> {
    /// Service that never consults an oracle.
    pub fn local_only() -> Self {
        Self::new(ScoringConfig::default(), Arc::new(DisabledOracle))
    }
}

impl<O> AssessmentService<O>
where
    O: AssessmentOracle + 'static,
{
    pub fn new(config: ScoringConfig, oracle: Arc<O>) -> Self {
        Self { config, oracle }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one attempt and compose its coaching message.
    pub fn assess(&self, request: &AssessmentRequest) -> AssessmentOutcome {
        let (source, report, oracle_feedback) = if self.config.use_local_scoring {
            (AssessmentSource::Local, self.score_locally(request), None)
        } else {
            match self.consult_oracle(request) {
                Ok(OracleAssessment { report, feedback }) => {
                    (AssessmentSource::Oracle, report, feedback)
                }
                Err(error) => {
                    warn!(%error, "falling back to local pronunciation scoring");
                    (AssessmentSource::Local, self.score_locally(request), None)
                }
            }
        };

        let coaching = oracle_feedback
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .or(request.ai_feedback.as_deref());
        let message = generate_feedback(&report, coaching);

        info!(
            source = source.label(),
            overall = report.overall_score,
            words = report.word_count,
            correct = report.correct_words,
            degenerate = report.is_degenerate(),
            "assessment complete"
        );

        AssessmentOutcome {
            source,
            report,
            message,
            assessed_at: Utc::now(),
        }
    }

    fn consult_oracle(&self, request: &AssessmentRequest) -> Result<OracleAssessment, OracleError> {
        let assessment = self.oracle.assess(request)?;
        oracle::validate(assessment)
    }

    fn score_locally(&self, request: &AssessmentRequest) -> ScoreReport {
        let report = calculate_score(&request.target_text, &request.spoken_text);
        debug!(
            target_words = report.word_count,
            spoken_words = report.spoken_word_count,
            "scored attempt locally"
        );
        report
    }
}
