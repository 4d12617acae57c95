//! Data models for the scheduling engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::DEFAULT_EASE_FACTOR;
use crate::error::{Result, SchedulerError};

/// A validated SM-2 quality rating.
///
/// Quality ratings (0-5):
/// - 0: Complete blackout, no recall
/// - 1: Incorrect, but upon seeing answer, remembered
/// - 2: Incorrect, but answer seemed easy to recall
/// - 3: Correct response with serious difficulty
/// - 4: Correct response after hesitation
/// - 5: Perfect response with no hesitation
///
/// Values outside 0-5 are rejected at construction, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    /// Complete blackout, no recall
    pub const BLACKOUT: Quality = Quality(0);
    /// Incorrect, but the answer seemed easy to recall
    pub const INCORRECT_EASY: Quality = Quality(2);
    /// Perfect response with no hesitation
    pub const PERFECT: Quality = Quality(5);

    /// All qualities in ascending order
    pub const ALL: [Quality; 6] = [
        Quality(0),
        Quality(1),
        Quality(2),
        Quality(3),
        Quality(4),
        Quality(5),
    ];

    /// Minimum quality that counts as a successful recall
    pub const PASS_THRESHOLD: u8 = 3;

    pub fn new(value: u8) -> Result<Self> {
        if value <= 5 {
            Ok(Self(value))
        } else {
            Err(SchedulerError::InvalidQuality(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this review counts as a successful recall (quality >= 3)
    pub fn is_pass(self) -> bool {
        self.0 >= Self::PASS_THRESHOLD
    }
}

impl TryFrom<u8> for Quality {
    type Error = SchedulerError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> u8 {
        quality.0
    }
}

/// A flashcard together with its current spaced repetition state.
///
/// The content payload (`front`/`back`) is inert to the scheduler and passed
/// through unchanged; identity is owned by the external store. The scheduling
/// fields are read-only inputs to [`crate::calculate_next_review`] — reviews
/// produce a fresh state via [`Card::apply`] rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub front: String,
    pub back: String,
    /// SM-2 ease factor (default 2.5, never below 1.3 after an update)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f32,
    /// Current interval in days (0 only for a never-reviewed card)
    #[serde(default)]
    pub interval: i32,
    /// Consecutive successful reviews since the last lapse
    #[serde(default)]
    pub repetitions: i32,
    /// When the card is due for review
    pub next_review_date: DateTime<Utc>,
    /// When the card was last reviewed, if ever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<DateTime<Utc>>,
}

fn default_ease_factor() -> f32 {
    DEFAULT_EASE_FACTOR
}

impl Card {
    /// Create a fresh card, due immediately
    pub fn new(id: Uuid, front: String, back: String, deck_id: Uuid) -> Self {
        Self::new_at(id, front, back, deck_id, Utc::now())
    }

    /// Create a fresh card with an explicit creation time
    pub fn new_at(
        id: Uuid,
        front: String,
        back: String,
        deck_id: Uuid,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            deck_id,
            front,
            back,
            ease_factor: DEFAULT_EASE_FACTOR,
            interval: 0,
            repetitions: 0,
            next_review_date: now,
            last_review_date: None,
        }
    }

    /// Check if the card is due for review. Boundary equality counts as due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_date <= now
    }

    /// Convenience form of [`Card::is_due`] against the current time
    pub fn is_due_now(&self) -> bool {
        self.is_due(Utc::now())
    }

    /// Classify the card's position in the learning process.
    ///
    /// Derived entirely from the scheduling fields; nothing extra is stored.
    pub fn status(&self) -> CardStatus {
        if self.last_review_date.is_none() {
            CardStatus::New
        } else if self.repetitions == 0 {
            CardStatus::Relearning
        } else if self.repetitions == 1 {
            CardStatus::Learning
        } else {
            CardStatus::Review
        }
    }

    /// Fold a review outcome back into the card, producing the new state.
    ///
    /// Content and identity are untouched; `last_review_date` becomes the
    /// outcome's review time.
    pub fn apply(&self, outcome: &ReviewOutcome) -> Card {
        Card {
            ease_factor: outcome.ease_factor,
            interval: outcome.interval,
            repetitions: outcome.repetitions,
            next_review_date: outcome.next_review_date,
            last_review_date: Some(outcome.reviewed_at),
            ..self.clone()
        }
    }
}

/// Status of a card in the spaced repetition process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardStatus {
    /// Never reviewed
    New,
    /// One successful review so far
    Learning,
    /// Two or more consecutive successful reviews
    Review,
    /// Reviewed but lapsed; the streak is broken
    Relearning,
}

/// Result of a single scheduling computation.
///
/// Transient: not persisted itself. Callers fold it back into their card
/// record via [`Card::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    pub card_id: Uuid,
    /// Quality rating this outcome was computed from
    pub quality: Quality,
    /// New interval in days (always >= 1)
    pub interval: i32,
    /// New ease factor (always >= 1.3)
    pub ease_factor: f32,
    /// New consecutive-success count
    pub repetitions: i32,
    /// When the card is next due
    pub next_review_date: DateTime<Utc>,
    /// When the review occurred
    pub reviewed_at: DateTime<Utc>,
}

/// Summary statistics over a collection of cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_cards: usize,
    pub new_cards: usize,
    pub learning_cards: usize,
    pub review_cards: usize,
    pub due_cards: usize,
}
