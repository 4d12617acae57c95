//! Due-card selection and review composition over caller-owned collections.
//!
//! The engine owns no storage: callers hand in a slice of cards and get
//! back references or fresh values. Ordering of due cards follows the input
//! (urgency sorting is a caller policy).

use chrono::{DateTime, Utc};
use log::debug;

use crate::algorithm::calculate_next_review;
use crate::models::{Card, CardStatus, ReviewOutcome, ReviewStats};
use crate::rating::{map_rating_to_quality, Rating};

/// Cards due for review at `now`, preserving input order
pub fn due_cards<'a>(cards: &'a [Card], now: DateTime<Utc>) -> Vec<&'a Card> {
    let due: Vec<&Card> = cards.iter().filter(|card| card.is_due(now)).collect();
    debug!("{} of {} cards due", due.len(), cards.len());
    due
}

/// Review a card with a coarse rating under the standard scale.
///
/// Composes rating mapping, the SM-2 calculation, and the fold-back into a
/// new card state. The input card is untouched; callers persist the returned
/// card (and may record the outcome) themselves.
pub fn review(card: &Card, rating: Rating, now: DateTime<Utc>) -> (ReviewOutcome, Card) {
    let quality = map_rating_to_quality(rating);
    let outcome = calculate_next_review(card, quality, now);
    debug!(
        "card {} rated {:?} (q={}): interval {} -> {}, due {}",
        card.id,
        rating,
        quality.value(),
        card.interval,
        outcome.interval,
        outcome.next_review_date
    );
    let updated = card.apply(&outcome);
    (outcome, updated)
}

/// Summarize a collection of cards for dashboards and session planning
pub fn review_stats(cards: &[Card], now: DateTime<Utc>) -> ReviewStats {
    let mut stats = ReviewStats {
        total_cards: cards.len(),
        ..Default::default()
    };

    for card in cards {
        match card.status() {
            CardStatus::New => stats.new_cards += 1,
            CardStatus::Learning => stats.learning_cards += 1,
            CardStatus::Review | CardStatus::Relearning => stats.review_cards += 1,
        }
        if card.is_due(now) {
            stats.due_cards += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn card_due_at(front: &str, due: DateTime<Utc>) -> Card {
        Card::new_at(
            Uuid::new_v4(),
            front.to_string(),
            String::new(),
            Uuid::new_v4(),
            due,
        )
    }

    #[test]
    fn test_due_cards_filters_and_preserves_order() {
        let now = Utc::now();
        let cards = vec![
            card_due_at("a", now + Duration::days(3)),
            card_due_at("b", now - Duration::days(1)),
            card_due_at("c", now + Duration::days(1)),
            card_due_at("d", now),
            card_due_at("e", now + Duration::days(7)),
        ];

        let due = due_cards(&cards, now);

        // Exactly the overdue card and the boundary card, in input order
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].front, "b");
        assert_eq!(due[1].front, "d");
    }

    #[test]
    fn test_due_cards_empty_input() {
        assert!(due_cards(&[], Utc::now()).is_empty());
    }

    #[test]
    fn test_review_correct_on_fresh_card() {
        let now = Utc::now();
        let card = card_due_at("q", now);

        let (outcome, updated) = review(&card, Rating::Correct, now);

        assert_eq!(outcome.quality.value(), 5);
        assert_eq!(updated.interval, 1);
        assert_eq!(updated.repetitions, 1);
        assert_eq!(updated.next_review_date, now + Duration::days(1));
        assert_eq!(updated.last_review_date, Some(now));
        // Input card untouched
        assert_eq!(card.repetitions, 0);
        assert!(card.last_review_date.is_none());
    }

    #[test]
    fn test_review_skipped_resets_streak() {
        let now = Utc::now();
        let mut card = card_due_at("q", now);
        card.repetitions = 3;
        card.interval = 15;
        card.last_review_date = Some(now - Duration::days(15));

        let (outcome, updated) = review(&card, Rating::Skipped, now);

        assert_eq!(outcome.quality.value(), 0);
        assert_eq!(updated.repetitions, 0);
        assert_eq!(updated.interval, 1);
        assert_eq!(updated.status(), CardStatus::Relearning);
    }

    #[test]
    fn test_review_stats_counts() {
        let now = Utc::now();

        let fresh = card_due_at("new", now);

        let mut learning = card_due_at("learning", now + Duration::days(1));
        learning.repetitions = 1;
        learning.last_review_date = Some(now);

        let mut mature = card_due_at("mature", now - Duration::days(2));
        mature.repetitions = 4;
        mature.last_review_date = Some(now - Duration::days(20));

        let mut lapsed = card_due_at("lapsed", now);
        lapsed.repetitions = 0;
        lapsed.last_review_date = Some(now - Duration::days(1));

        let cards = vec![fresh, learning, mature, lapsed];
        let stats = review_stats(&cards, now);

        assert_eq!(stats.total_cards, 4);
        assert_eq!(stats.new_cards, 1);
        assert_eq!(stats.learning_cards, 1);
        assert_eq!(stats.review_cards, 2);
        assert_eq!(stats.due_cards, 3);
    }
}
