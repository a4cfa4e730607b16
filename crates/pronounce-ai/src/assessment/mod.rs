//! Assessment orchestration: transcript assembly, oracle-or-local scoring, and
//! the HTTP endpoint that exposes it.

pub mod domain;
pub mod oracle;
pub mod router;
pub mod service;
pub mod transcript;

pub use domain::{AssessmentOutcome, AssessmentRequest, AssessmentSource};
pub use oracle::{AssessmentOracle, DisabledOracle, OracleAssessment, OracleError};
pub use router::assessment_router;
pub use service::AssessmentService;
pub use transcript::TranscriptBuffer;
