//! Spaced repetition scheduler core.
//!
//! Pure computation library driving flashcard review: given a card's memory
//! state and a recall rating, it produces the updated state and the next
//! review time. Provides:
//! - Rating-driven scheduling rule (simplified fixed-parameter FSRS variant)
//! - Due-card selection and review queue ordering
//! - Retention estimation and collection statistics
//! - Shared types (Card, CardStatus, Rating)
//!
//! Persistence and presentation live with the caller: every function takes
//! plain values plus an explicit `now`, and returns new values, so any
//! storage layer can wrap the scheduler without modification. Concurrent
//! review submissions for the same card must be serialized by the caller;
//! the scheduler has no notion of card identity.

pub mod error;
pub mod queue;
pub mod scheduler;
pub mod stats;
pub mod types;

pub use error::{CardError, Result};
pub use queue::{days_overdue, due_cards, is_due, upcoming_reviews, UpcomingReviews};
pub use scheduler::{Scheduler, SchedulerParams};
pub use stats::{card_statistics, retention, CardStatistics};
pub use types::{Card, CardStatus, Rating};
