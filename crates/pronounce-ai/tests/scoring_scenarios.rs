//! Integration scenarios for the local pronunciation scorer.
//!
//! Scenarios exercise the public `calculate_score` / `generate_feedback` facade
//! with realistic practice sentences, plus report invariants checked across a
//! spread of target/spoken pairs.

use pronounce_ai::scoring::{EMPTY_TARGET_MESSAGE, NO_SPEECH_MESSAGE};
use pronounce_ai::{calculate_score, generate_feedback, normalize, ScoreReport, WordStatus};

fn statuses(report: &ScoreReport) -> Vec<WordStatus> {
    report.feedback.iter().map(|judgment| judgment.status).collect()
}

fn sample_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Hello world", "Hello world"),
        ("Hello, how are you?", "Hello how are you"),
        ("The cat is sleeping", "The dog is sleeping"),
        ("I love programming", "I love"),
        ("I love programming", "um I I love love programming a lot today"),
        ("She sells seashells by the seashore", "she sell sea shells by the shore"),
        ("Good morning!", "good evening everybody"),
        ("A quick brown fox", "quick brown"),
        ("¿Qué tal? Ça va", "que tal ca va"),
        ("...", "anything"),
        ("Hello everyone", ""),
        ("", "anything"),
        ("   ", "   "),
    ]
}

#[test]
fn exact_match_scores_one_hundred() {
    let report = calculate_score("Hello world", "Hello world");

    assert_eq!(report.overall_score, 100);
    assert_eq!(report.pronunciation_score, 100);
    assert_eq!(report.fluency_score, 100);
    assert_eq!(report.confidence_score, 100);
    assert_eq!(statuses(&report), vec![WordStatus::Correct; 2]);
    assert_eq!(report.error_message, None);
}

#[test]
fn case_and_punctuation_are_ignored() {
    let report = calculate_score("Hello, how are you?", "Hello how are you");

    assert_eq!(report.overall_score, 100);
    assert_eq!(report.word_count, 4);
    assert_eq!(report.feedback[0].word, "hello");
}

#[test]
fn single_substitution_is_marked_incorrect() {
    let report = calculate_score("The cat is sleeping", "The dog is sleeping");

    let incorrect: Vec<_> = report
        .feedback
        .iter()
        .filter(|judgment| judgment.status == WordStatus::Incorrect)
        .collect();
    assert_eq!(incorrect.len(), 1);
    assert_eq!(incorrect[0].word, "cat");
    assert_eq!(incorrect[0].expected.as_deref(), Some("cat"));
    assert_eq!(incorrect[0].spoken.as_deref(), Some("dog"));
    assert_eq!(report.correct_words, 3);
    assert_eq!(report.pronunciation_score, 75);
    assert_eq!(report.confidence_score, 70);
    assert!(report.overall_score > 0 && report.overall_score < 100);
}

#[test]
fn truncated_utterance_leaves_trailing_words_missing() {
    let report = calculate_score("I love programming", "I love");

    assert_eq!(report.feedback[2].word, "programming");
    assert_eq!(report.feedback[2].status, WordStatus::Missing);
    assert_eq!(report.feedback[2].spoken, None);
    assert_eq!(report.correct_words, 2);
    assert_eq!(report.spoken_word_count, 2);
    // accuracy 66.67, ratio 0.67 < 0.7 so fluency drops by 20
    assert_eq!(report.pronunciation_score, 67);
    assert_eq!(report.fluency_score, 47);
}

#[test]
fn empty_speech_reports_every_word_missing() {
    let report = calculate_score("Hello everyone", "");

    assert_eq!(report.overall_score, 0);
    assert_eq!(report.error_message.as_deref(), Some(NO_SPEECH_MESSAGE));
    assert_eq!(report.error_message.as_deref(), Some("No speech detected"));
    assert_eq!(report.word_count, 2);
    assert_eq!(report.correct_words, 0);
    assert_eq!(statuses(&report), vec![WordStatus::Missing; 2]);
    assert_eq!(report.feedback[1].expected.as_deref(), Some("everyone"));
}

#[test]
fn whitespace_only_speech_counts_as_silence() {
    let report = calculate_score("Hello everyone", " \t\n ");
    assert_eq!(report.error_message.as_deref(), Some("No speech detected"));
}

#[test]
fn punctuation_only_speech_scores_as_unheard_words() {
    let report = calculate_score("Hello everyone", "?!");

    assert_eq!(statuses(&report), vec![WordStatus::Missing; 2]);
    assert_eq!(report.error_message, None);
    assert_eq!(report.spoken_word_count, 0);
    assert_eq!(report.correct_words, 0);
    assert_eq!(report.overall_score, 0);
    assert!(!report.is_degenerate());
}

#[test]
fn empty_target_short_circuits() {
    let report = calculate_score("", "anything");

    assert_eq!(report.overall_score, 0);
    assert_eq!(report.error_message.as_deref(), Some(EMPTY_TARGET_MESSAGE));
    assert_eq!(report.error_message.as_deref(), Some("Target text is empty"));
    assert!(report.feedback.is_empty());
    assert_eq!(report.word_count, 0);
}

#[test]
fn empty_target_wins_over_empty_speech() {
    let report = calculate_score("  ", "");
    assert_eq!(report.error_message.as_deref(), Some("Target text is empty"));
}

#[test]
fn overlong_speech_costs_fluency() {
    let report = calculate_score(
        "I love programming",
        "I love programming so very much",
    );

    assert_eq!(report.correct_words, 3);
    assert_eq!(report.pronunciation_score, 100);
    assert_eq!(report.fluency_score, 85);
    assert_eq!(report.confidence_score, 100);
    // 40 + 30 + 17 + 10
    assert_eq!(report.overall_score, 97);
}

#[test]
fn noise_word_before_a_match_is_skipped() {
    let report = calculate_score("the cat sat", "the um cat sat");

    assert_eq!(
        statuses(&report),
        vec![WordStatus::Correct, WordStatus::Incorrect, WordStatus::Correct]
    );
    assert_eq!(report.feedback[1].spoken.as_deref(), Some("um"));
}

#[test]
fn scoring_is_deterministic() {
    for (target, spoken) in sample_pairs() {
        assert_eq!(
            calculate_score(target, spoken),
            calculate_score(target, spoken),
            "pair ({target:?}, {spoken:?})"
        );
    }
}

#[test]
fn reports_hold_their_invariants() {
    for (target, spoken) in sample_pairs() {
        let report = calculate_score(target, spoken);
        let expected_words = normalize(target).split_whitespace().count();

        assert_eq!(report.feedback.len(), report.word_count, "{target:?}");
        if !target.trim().is_empty() {
            assert_eq!(report.word_count, expected_words, "{target:?}");
        }
        assert_eq!(
            report.correct_words,
            report
                .feedback
                .iter()
                .filter(|judgment| judgment.status == WordStatus::Correct)
                .count(),
            "{target:?} / {spoken:?}"
        );
        for score in [
            report.overall_score,
            report.pronunciation_score,
            report.fluency_score,
            report.confidence_score,
        ] {
            assert!(score <= 100, "{target:?} / {spoken:?} scored {score}");
        }
        assert!(report.is_consistent());
    }
}

#[test]
fn judgments_follow_target_order() {
    let report = calculate_score("She sells seashells", "seashells she sells");
    let words: Vec<&str> = report
        .feedback
        .iter()
        .map(|judgment| judgment.word.as_str())
        .collect();
    assert_eq!(words, vec!["she", "sells", "seashells"]);
}

#[test]
fn feedback_message_for_outstanding_scores_ignores_word_errors() {
    let mut report = calculate_score("The cat is sleeping", "The dog is sleeping");
    report.overall_score = 96;

    let message = generate_feedback(&report, None);

    assert_eq!(message, generate_feedback(&calculate_score("a b", "a b"), None));
    assert!(!message.contains("cat"));
}

#[test]
fn feedback_message_prefers_ai_text() {
    let report = calculate_score("The cat is sleeping", "The dog is sleeping");
    assert_eq!(generate_feedback(&report, Some("custom text")), "custom text");

    let perfect = calculate_score("Hello world", "Hello world");
    assert_eq!(generate_feedback(&perfect, Some("custom text")), "custom text");
}

#[test]
fn feedback_message_names_the_mispronounced_word() {
    let report = calculate_score("The cat is sleeping", "The dog is sleeping");
    let message = generate_feedback(&report, None);
    assert!(message.contains("\"cat\""), "{message}");
}
