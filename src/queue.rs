//! Due-card selection and review queue ordering.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Card, CardStatus};

/// Whether a card should be reviewed now.
///
/// New cards are always due, and a card without a schedule is treated as due.
pub fn is_due(card: &Card, now: DateTime<Utc>) -> bool {
    if card.status == CardStatus::New {
        return true;
    }
    match card.next_review_at {
        Some(next) => next <= now,
        None => true,
    }
}

/// Filter and order a collection of cards into a review queue.
///
/// New cards sort before everything else, then unscheduled cards, then
/// ascending by next review time. The sort is stable, so cards with equal
/// keys keep their input order.
pub fn due_cards(cards: &[Card], now: DateTime<Utc>) -> Vec<Card> {
    let mut due: Vec<Card> = cards.iter().filter(|c| is_due(c, now)).cloned().collect();

    // None sorts before Some, which handles the unscheduled case.
    due.sort_by(|a, b| {
        (a.status != CardStatus::New, a.next_review_at)
            .cmp(&(b.status != CardStatus::New, b.next_review_at))
    });

    due
}

/// Whole days a scheduled card is past its due date; `0` when not overdue.
pub fn days_overdue(card: &Card, now: DateTime<Utc>) -> i64 {
    match card.next_review_at {
        Some(next) if next < now => (now - next).num_days(),
        _ => 0,
    }
}

/// Counts of reviews coming due over the next week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingReviews {
    pub today: usize,
    pub tomorrow: usize,
    pub this_week: usize,
}

/// Bucket upcoming reviews by end-of-day boundaries.
///
/// Cards that are already due, including new and unscheduled ones, count
/// toward `today`. Cards due beyond seven days are not counted.
pub fn upcoming_reviews(cards: &[Card], now: DateTime<Utc>) -> UpcomingReviews {
    let end_of_today = now
        .date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("valid wall-clock time")
        .and_utc();
    let end_of_tomorrow = end_of_today + Duration::days(1);
    let end_of_week = end_of_today + Duration::days(7);

    let mut counts = UpcomingReviews::default();
    for card in cards {
        if is_due(card, now) {
            counts.today += 1;
            continue;
        }
        match card.next_review_at {
            Some(next) if next <= end_of_today => counts.today += 1,
            Some(next) if next <= end_of_tomorrow => counts.tomorrow += 1,
            Some(next) if next <= end_of_week => counts.this_week += 1,
            _ => {}
        }
    }

    counts
}
