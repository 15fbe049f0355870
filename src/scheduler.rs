//! The rating-driven scheduling rule.
//!
//! Simplified fixed-parameter variant of FSRS: stability grows
//! multiplicatively on successful recall, resets to the shortest interval on
//! failure, and difficulty is nudged per rating rather than recomputed.

use chrono::{DateTime, Duration, Utc};
use fastrand::Rng;

use crate::types::{Card, CardStatus, Rating};

/// Growth multiplier for a Good rating on an already-reviewed card.
const GOOD_MULTIPLIER: f64 = 2.5;

/// Fixed scheduling parameters.
///
/// Constructed once and injected into a [`Scheduler`]; never mutated at
/// runtime, so alternate tunings can coexist without interference.
#[derive(Debug, Clone)]
pub struct SchedulerParams {
    /// Stability (days) assigned on the first successful review, indexed by
    /// `rating - 1`.
    pub initial_stability: [f64; 4],
    /// Extra growth applied on Easy, on top of the Good multiplier.
    pub easy_bonus: f64,
    /// Growth multiplier for Hard.
    pub hard_factor: f64,
    /// Minimum stability (days) for a learning card to graduate to review.
    pub graduating_interval_days: f64,
}

impl Default for SchedulerParams {
    fn default() -> Self {
        Self {
            initial_stability: [0.4, 0.6, 2.4, 5.8],
            easy_bonus: 1.3,
            hard_factor: 0.8,
            graduating_interval_days: 1.0,
        }
    }
}

/// Scheduler holding the parameter table and the fuzz rng.
///
/// Apart from interval fuzz drawn from the owned rng, every method is a pure
/// function of its arguments. Use [`Scheduler::with_seed`] for reproducible
/// intervals.
#[derive(Debug, Clone)]
pub struct Scheduler {
    params: SchedulerParams,
    rng: Rng,
}

impl Scheduler {
    /// Create a scheduler with default parameters.
    pub fn new() -> Self {
        Self::with_params(SchedulerParams::default())
    }

    /// Create a scheduler with custom parameters.
    pub fn with_params(params: SchedulerParams) -> Self {
        Self {
            params,
            rng: Rng::new(),
        }
    }

    /// Create a scheduler with default parameters and a seeded rng.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            params: SchedulerParams::default(),
            rng: Rng::with_seed(seed),
        }
    }

    /// Create a scheduler with custom parameters and a seeded rng.
    pub fn with_params_and_seed(params: SchedulerParams, seed: u64) -> Self {
        Self {
            params,
            rng: Rng::with_seed(seed),
        }
    }

    pub fn params(&self) -> &SchedulerParams {
        &self.params
    }

    /// Schedule the next review for a card based on the user's rating.
    ///
    /// Returns the updated card; the input is left untouched. The scheduler
    /// has no notion of card identity or storage, so callers must treat
    /// read-schedule-write as one serialized operation per card.
    pub fn schedule_review(&mut self, card: &Card, rating: Rating, now: DateTime<Utc>) -> Card {
        debug_assert!(card.validate().is_ok(), "card violates state invariants");

        let mut updated = card.clone();
        updated.review_count = card.review_count + 1;
        updated.last_reviewed_at = Some(now);

        if rating == Rating::Again {
            // Failed: back to the shortest interval regardless of prior
            // stability.
            updated.status = if card.status == CardStatus::New {
                CardStatus::Learning
            } else {
                CardStatus::Relearning
            };
            updated.difficulty = (card.difficulty + 0.2).min(1.0);
            updated.stability = self.params.initial_stability[0];
        } else {
            let difficulty_delta = (rating.value() as f64 - 3.0) * 0.15;
            updated.difficulty = (card.difficulty - difficulty_delta).clamp(0.1, 1.0);

            if card.status == CardStatus::New {
                // First successful review; Easy graduates immediately.
                updated.stability = self.params.initial_stability[rating.value() as usize - 1];
                updated.status = if rating == Rating::Easy {
                    CardStatus::Review
                } else {
                    CardStatus::Learning
                };
            } else {
                updated.stability =
                    card.stability * self.stability_multiplier(rating, card.difficulty);

                let learning = matches!(card.status, CardStatus::Learning | CardStatus::Relearning);
                if learning && updated.stability >= self.params.graduating_interval_days {
                    updated.status = CardStatus::Review;
                }
            }
        }

        let interval_days = self.calculate_interval(updated.stability);
        updated.next_review_at = Some(now + Duration::seconds((interval_days * 86400.0) as i64));

        updated
    }

    /// Interval in days for a given stability.
    ///
    /// Applies ±10% fuzz so that cards reviewed together don't land on the
    /// same future due date, rounds to one decimal, and floors at 0.1 days.
    pub fn calculate_interval(&mut self, stability: f64) -> f64 {
        let fuzz = 0.9 + self.rng.f64() * 0.2;
        ((stability * fuzz * 10.0).round() / 10.0).max(0.1)
    }

    fn stability_multiplier(&self, rating: Rating, difficulty: f64) -> f64 {
        let base = match rating {
            // Not reachable from schedule_review; Again resets stability.
            Rating::Again => 0.5,
            Rating::Hard => self.params.hard_factor,
            Rating::Good => GOOD_MULTIPLIER,
            Rating::Easy => GOOD_MULTIPLIER * self.params.easy_bonus,
        };
        // Easier cards earn longer intervals.
        base * (1.0 + (1.0 - difficulty) * 0.5)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
