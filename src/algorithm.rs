//! SM-2 Spaced Repetition Algorithm
//!
//! Implementation of the SuperMemo 2 algorithm for calculating
//! optimal review intervals based on recall quality.
//!
//! Each review moves a card along one of two branches:
//! - Quality 3-5 (pass): the interval grows (1 day, then 6 days, then the
//!   previous interval scaled by the ease factor) and the repetition streak
//!   increments.
//! - Quality 0-2 (lapse): the streak resets and the card comes back after
//!   1 day.
//!
//! The ease factor is re-derived from the quality on both branches and never
//! falls below 1.3.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Card, Quality, ReviewOutcome};

/// Ease factor assigned to new cards
pub const DEFAULT_EASE_FACTOR: f32 = 2.5;

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f32 = 1.3;

/// Calculate the next review parameters for a card using the SM-2 algorithm.
///
/// Pure: `card` is a read-only input and is never mutated; the caller folds
/// the returned outcome back into its own record (see [`Card::apply`]).
/// `today` is the review time and the base for the new due date.
pub fn calculate_next_review(card: &Card, quality: Quality, today: DateTime<Utc>) -> ReviewOutcome {
    let mut interval = card.interval;
    let mut repetitions = card.repetitions;

    if quality.is_pass() {
        interval = match repetitions {
            // First successful review (or first after a lapse): 1 day
            0 => 1,
            // Second consecutive success: 6 days
            1 => 6,
            // Subsequent: scale the previous interval by the pre-update ease
            _ => (interval as f32 * card.ease_factor).round() as i32,
        };
        repetitions += 1;
    } else {
        // Lapse: the card is treated as forgotten and comes back tomorrow
        repetitions = 0;
        interval = 1;
    }

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02))
    // Applied regardless of branch; floored at the minimum ease factor.
    let q = quality.value() as f32;
    let ease_factor = (card.ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)))
        .max(MIN_EASE_FACTOR);

    ReviewOutcome {
        card_id: card.id,
        quality,
        interval,
        ease_factor,
        repetitions,
        next_review_date: today + Duration::days(interval as i64),
        reviewed_at: today,
    }
}

/// Calculate the interval each quality rating would give, indexed by quality.
/// Used to show learners what each answer is worth before they commit.
pub fn preview_intervals(card: &Card, today: DateTime<Utc>) -> [i32; 6] {
    let mut intervals = [0; 6];
    for (slot, quality) in intervals.iter_mut().zip(Quality::ALL) {
        *slot = calculate_next_review(card, quality, today).interval;
    }
    intervals
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i32) -> String {
    match days {
        0 => "now".to_string(),
        1..=6 => format!("{}d", days),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}
