//! Core types for the spaced repetition scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Card learning status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    New,
    Learning,
    Review,
    Relearning,
}

impl Default for CardStatus {
    fn default() -> Self {
        Self::New
    }
}

/// Rating for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// Convert to 4-point numeric value (1-4).
    pub fn value(self) -> u8 {
        match self {
            Self::Again => 1,
            Self::Hard => 2,
            Self::Good => 3,
            Self::Easy => 4,
        }
    }

    /// Create from 4-point numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Again),
            2 => Some(Self::Hard),
            3 => Some(Self::Good),
            4 => Some(Self::Easy),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, CardError> {
        Self::from_value(value).ok_or(CardError::InvalidRating { value })
    }
}

/// One learnable item's memory state.
///
/// Updated only through [`Scheduler::schedule_review`]: the scheduler takes a
/// card by reference and returns a new value, never mutating its input.
/// Persistence of the returned value is the caller's responsibility.
///
/// [`Scheduler::schedule_review`]: crate::scheduler::Scheduler::schedule_review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub status: CardStatus,
    /// Resistance to stability growth, in `[0.1, 1.0]`. Higher is harder.
    pub difficulty: f64,
    /// Modeled days until recall probability decays to the reference
    /// threshold. `0.0` only while the card is new.
    pub stability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    /// `None` means due now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review_at: Option<DateTime<Utc>>,
    /// Incremented exactly once per scheduled review.
    pub review_count: u32,
}

impl Card {
    /// Create a new card that has never been reviewed.
    pub fn new() -> Self {
        Self {
            status: CardStatus::New,
            difficulty: 0.5,
            stability: 0.0,
            last_reviewed_at: None,
            next_review_at: None,
            review_count: 0,
        }
    }

    /// Check stored-state invariants.
    ///
    /// Intended for callers loading cards from storage: a card with fields
    /// outside their documented ranges indicates upstream data corruption,
    /// which should surface as an error rather than be silently clamped.
    pub fn validate(&self) -> Result<(), CardError> {
        if !self.difficulty.is_finite() || !(0.1..=1.0).contains(&self.difficulty) {
            return Err(CardError::DifficultyOutOfRange {
                value: self.difficulty,
            });
        }
        if !self.stability.is_finite() || self.stability < 0.0 {
            return Err(CardError::InvalidStability {
                value: self.stability,
            });
        }
        Ok(())
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
