//! Coarse review ratings and their mapping onto the SM-2 quality scale

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::Quality;

/// Coarse outcome of a single review, as reported by a simple three-button UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    Correct,
    Incorrect,
    Skipped,
}

impl FromStr for Rating {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "correct" => Ok(Self::Correct),
            "incorrect" => Ok(Self::Incorrect),
            "skipped" => Ok(Self::Skipped),
            other => Err(SchedulerError::UnknownRating(other.to_string())),
        }
    }
}

/// Policy translating coarse ratings into SM-2 quality values.
///
/// The three-button mapping is a deliberate simplification; callers offering
/// finer-grained feedback should implement their own scale, or skip the
/// mapping entirely and pass a [`Quality`] to
/// [`crate::calculate_next_review`] directly.
pub trait RatingScale {
    fn quality(&self, rating: Rating) -> Quality;
}

/// Default scale: a correct answer counts as a perfect recall, an incorrect
/// one as a near-miss, a skip as a complete blackout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScale;

impl RatingScale for StandardScale {
    fn quality(&self, rating: Rating) -> Quality {
        match rating {
            Rating::Correct => Quality::PERFECT,
            Rating::Incorrect => Quality::INCORRECT_EASY,
            Rating::Skipped => Quality::BLACKOUT,
        }
    }
}

/// Map a coarse rating to its SM-2 quality under the standard scale
pub fn map_rating_to_quality(rating: Rating) -> Quality {
    StandardScale.quality(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scale_mapping() {
        assert_eq!(map_rating_to_quality(Rating::Correct).value(), 5);
        assert_eq!(map_rating_to_quality(Rating::Incorrect).value(), 2);
        assert_eq!(map_rating_to_quality(Rating::Skipped).value(), 0);
    }

    #[test]
    fn test_rating_from_str() {
        assert_eq!("correct".parse::<Rating>().unwrap(), Rating::Correct);
        assert_eq!("incorrect".parse::<Rating>().unwrap(), Rating::Incorrect);
        assert_eq!("skipped".parse::<Rating>().unwrap(), Rating::Skipped);
    }

    #[test]
    fn test_unknown_rating_fails() {
        let err = "easy".parse::<Rating>().unwrap_err();
        assert_eq!(err, SchedulerError::UnknownRating("easy".to_string()));

        // Case matters; these are wire values, not prose
        assert!("Correct".parse::<Rating>().is_err());
        assert!("".parse::<Rating>().is_err());
    }

    #[test]
    fn test_custom_scale() {
        // A harsher policy: incorrect answers count as blackouts
        struct Strict;
        impl RatingScale for Strict {
            fn quality(&self, rating: Rating) -> Quality {
                match rating {
                    Rating::Correct => Quality::PERFECT,
                    _ => Quality::BLACKOUT,
                }
            }
        }

        assert_eq!(Strict.quality(Rating::Incorrect), Quality::BLACKOUT);
        assert_eq!(Strict.quality(Rating::Correct), Quality::PERFECT);
    }
}
