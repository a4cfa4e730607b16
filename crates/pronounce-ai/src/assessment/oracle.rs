use serde::{Deserialize, Serialize};

use super::domain::AssessmentRequest;
use crate::scoring::ScoreReport;

/// External assessor that returns a finished report instead of letting the
/// local scorer compute one (e.g. a cloud speech-assessment adapter).
///
/// `assess` is blocking. Implementations may do network I/O; the HTTP router
/// runs every assessment on tokio's blocking pool, so adapters can use a
/// blocking client or `Handle::block_on` without stalling request workers.
pub trait AssessmentOracle: Send + Sync {
    fn assess(&self, request: &AssessmentRequest) -> Result<OracleAssessment, OracleError>;
}

/// Pre-computed result handed back by an oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleAssessment {
    pub report: ScoreReport,
    /// Coaching text written by the oracle, preferred over the tiered messages.
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Error enumeration for oracle failures. Callers fall back to local scoring.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("AI assessment is disabled")]
    Disabled,
    #[error("AI assessment unavailable: {0}")]
    Unavailable(String),
    #[error("AI assessment returned an inconsistent report: {0}")]
    Malformed(String),
}

/// Oracle used when no external assessor is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledOracle;

impl AssessmentOracle for DisabledOracle {
    fn assess(&self, _request: &AssessmentRequest) -> Result<OracleAssessment, OracleError> {
        Err(OracleError::Disabled)
    }
}

pub(crate) fn validate(assessment: OracleAssessment) -> Result<OracleAssessment, OracleError> {
    match assessment.report.consistency_error() {
        Some(reason) => Err(OracleError::Malformed(reason)),
        None => Ok(assessment),
    }
}
