//! Greedy forward alignment of target words against spoken words.
//!
//! The walk keeps a single cursor into the spoken sequence and never moves it
//! backwards. Each target word consumes zero, one, or two spoken words:
//!
//! * spoken words exhausted: `missing`, nothing consumed
//! * exact match: `correct`, one consumed
//! * near match: `partial`, one consumed
//! * the *next* spoken word matches exactly: `incorrect`, two consumed
//! * anything else: `incorrect`, one consumed
//!
//! The two-word skip marks the target word `incorrect` even though its exact
//! match was heard one position late, and the matched word is not offered to
//! the following target word. Misalignment by more than one word is never
//! recovered.

use super::report::WordJudgment;
use super::similarity::is_similar;

/// Outcome of comparing one target word at the current cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlignStep<'a> {
    Correct { spoken: &'a str },
    Partial { spoken: &'a str },
    /// Noise word followed by the exact match; both are consumed.
    IncorrectSkip { noise: &'a str },
    Incorrect { spoken: &'a str },
    Missing,
}

impl<'a> AlignStep<'a> {
    fn consumed(&self) -> usize {
        match self {
            AlignStep::Missing => 0,
            AlignStep::IncorrectSkip { .. } => 2,
            AlignStep::Correct { .. } | AlignStep::Partial { .. } | AlignStep::Incorrect { .. } => {
                1
            }
        }
    }

    fn judgment(&self, target: &str) -> WordJudgment {
        match *self {
            AlignStep::Correct { spoken } => WordJudgment::correct(target, spoken),
            AlignStep::Partial { spoken } => WordJudgment::partial(target, spoken),
            AlignStep::IncorrectSkip { noise } => WordJudgment::incorrect(target, noise),
            AlignStep::Incorrect { spoken } => WordJudgment::incorrect(target, spoken),
            AlignStep::Missing => WordJudgment::missing(target),
        }
    }
}

fn step<'a>(target: &str, spoken_words: &[&'a str], cursor: usize) -> AlignStep<'a> {
    let Some(&spoken) = spoken_words.get(cursor) else {
        return AlignStep::Missing;
    };

    if target == spoken {
        return AlignStep::Correct { spoken };
    }

    if is_similar(target, spoken) {
        return AlignStep::Partial { spoken };
    }

    if spoken_words.get(cursor + 1) == Some(&target) {
        return AlignStep::IncorrectSkip { noise: spoken };
    }

    AlignStep::Incorrect { spoken }
}

/// Produce exactly one judgment per target word, in target order.
pub fn align_words(target_words: &[&str], spoken_words: &[&str]) -> Vec<WordJudgment> {
    let mut cursor = 0;
    let mut judgments = Vec::with_capacity(target_words.len());

    for target in target_words {
        let outcome = step(target, spoken_words, cursor);
        cursor += outcome.consumed();
        judgments.push(outcome.judgment(target));
    }

    judgments
}
