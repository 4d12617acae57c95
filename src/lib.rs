//! mnemo — SM-2 spaced repetition review-scheduling engine
//!
//! This crate provides:
//! - The SM-2 scheduling step ([`calculate_next_review`])
//! - Card memory state and review outcomes ([`Card`], [`ReviewOutcome`])
//! - Due-card selection over caller-owned collections ([`due_cards`])
//! - Coarse rating mapping with a replaceable policy ([`Rating`],
//!   [`RatingScale`])
//!
//! The engine is a deterministic calculation invoked once per review event:
//! no storage, no I/O, no shared mutable state. Persistence, deck
//! management, and rendering belong to callers, which fold each
//! [`ReviewOutcome`] back into their own card records. Every operation that
//! depends on the current time takes it as an explicit parameter (with
//! `Utc::now()` convenience forms) so scheduling stays testable.

pub mod algorithm;
pub mod error;
pub mod models;
pub mod queue;
pub mod rating;

pub use algorithm::{
    calculate_next_review, format_interval, preview_intervals, DEFAULT_EASE_FACTOR,
    MIN_EASE_FACTOR,
};
pub use error::{Result, SchedulerError};
pub use models::*;
pub use queue::{due_cards, review, review_stats};
pub use rating::{map_rating_to_quality, Rating, RatingScale, StandardScale};
