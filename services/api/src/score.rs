use clap::Args;
use pronounce_ai::assessment::{AssessmentOutcome, AssessmentRequest, AssessmentService};
use pronounce_ai::config::AppConfig;
use pronounce_ai::error::AppError;
use std::fmt::Write;
use std::sync::Arc;

use crate::infra::oracle_from_config;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Sentence the learner was asked to say
    #[arg(long)]
    pub(crate) target: String,
    /// Transcript produced by speech recognition (omit for silence)
    #[arg(long, default_value = "")]
    pub(crate) spoken: String,
    /// Coaching text to use instead of the score-based message
    #[arg(long)]
    pub(crate) ai_feedback: Option<String>,
    /// Print the full outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = AssessmentService::new(config.scoring, Arc::new(oracle_from_config(&config)));

    let mut request = AssessmentRequest::new(args.target, args.spoken);
    request.ai_feedback = args.ai_feedback;

    let outcome = service.assess(&request);
    let output = if args.json {
        serde_json::to_string_pretty(&outcome)?
    } else {
        render_outcome(&outcome)
    };
    println!("{output}");
    Ok(())
}

pub(crate) fn render_outcome(outcome: &AssessmentOutcome) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Pronunciation assessment ({})", outcome.source.label());
    output.push_str(&outcome.report.summary());
    let _ = write!(output, "\n{}", outcome.message);
    output
}
