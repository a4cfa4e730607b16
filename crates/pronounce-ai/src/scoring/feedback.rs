use super::report::ScoreReport;

pub(crate) const OUTSTANDING_MESSAGE: &str =
    "Outstanding! Your pronunciation is nearly perfect. Keep up the amazing work!";
pub(crate) const EXCELLENT_MESSAGE: &str =
    "Excellent pronunciation! You spoke clearly and accurately.";

/// Coaching message for a finished attempt.
///
/// Externally supplied coaching text wins when it has any content. Otherwise
/// the message is chosen by overall score, naming the first word that was
/// judged incorrect or partial once the score drops below 90.
pub fn generate_feedback(report: &ScoreReport, ai_feedback: Option<&str>) -> String {
    if let Some(text) = ai_feedback.filter(|text| !text.trim().is_empty()) {
        return text.to_string();
    }

    let score = report.overall_score;
    let focus = report.first_error_word();

    match (score, focus) {
        (95.., _) => OUTSTANDING_MESSAGE.to_string(),
        (90.., _) => EXCELLENT_MESSAGE.to_string(),
        (85.., Some(word)) => format!(
            "Very good! Just a small tip: pay a little more attention to \"{word}\"."
        ),
        (85.., None) => "Very good! Your speech was very clear.".to_string(),
        (70.., Some(word)) => {
            format!("Good effort! Focus on pronouncing \"{word}\" more clearly.")
        }
        (70.., None) => "Good effort! Keep practicing to sound even more natural.".to_string(),
        (50.., Some(word)) => format!(
            "You're getting there. Try to say \"{word}\" more slowly and clearly."
        ),
        (50.., None) => "You're getting there. Keep practicing and you'll improve!".to_string(),
        (_, Some(word)) => format!(
            "Let's focus on \"{word}\" first. Listen to the sentence again and repeat it slowly."
        ),
        (_, None) => {
            "Don't give up! Listen to the sentence again and try once more.".to_string()
        }
    }
}
