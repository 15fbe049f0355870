//! Read-only progress views over card collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::queue::is_due;
use crate::types::{Card, CardStatus};

/// Estimated probability that a card can still be recalled right now.
///
/// Exponential decay over the scheduled interval, clamped to `[0, 1]`.
/// Returns `0.0` for new or never-scheduled cards and `1.0` immediately
/// after a review. Display-only heuristic; the scheduler never consults it.
pub fn retention(card: &Card, now: DateTime<Utc>) -> f64 {
    if card.status == CardStatus::New {
        return 0.0;
    }
    let (Some(last), Some(next)) = (card.last_reviewed_at, card.next_review_at) else {
        return 0.0;
    };

    let elapsed = (now - last).num_milliseconds() as f64;
    if elapsed <= 0.0 {
        return 1.0;
    }
    let scheduled = (next - last).num_milliseconds() as f64;
    (-elapsed / scheduled).exp().clamp(0.0, 1.0)
}

/// Aggregate counts and averages for a card collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardStatistics {
    pub total: usize,
    pub new: usize,
    pub learning: usize,
    pub review: usize,
    pub relearning: usize,
    pub due: usize,
    /// Average over reviewed (non-new) cards; `0.0` when none exist.
    pub avg_difficulty: f64,
    /// Average over reviewed (non-new) cards; `0.0` when none exist.
    pub avg_stability: f64,
}

/// Compute statistics for a collection of cards in a single pass.
pub fn card_statistics(cards: &[Card], now: DateTime<Utc>) -> CardStatistics {
    let mut stats = CardStatistics {
        total: cards.len(),
        ..CardStatistics::default()
    };

    let mut difficulty_sum = 0.0;
    let mut stability_sum = 0.0;
    let mut reviewed = 0usize;

    for card in cards {
        match card.status {
            CardStatus::New => stats.new += 1,
            CardStatus::Learning => stats.learning += 1,
            CardStatus::Review => stats.review += 1,
            CardStatus::Relearning => stats.relearning += 1,
        }

        if is_due(card, now) {
            stats.due += 1;
        }

        if card.status != CardStatus::New {
            difficulty_sum += card.difficulty;
            stability_sum += card.stability;
            reviewed += 1;
        }
    }

    if reviewed > 0 {
        stats.avg_difficulty = difficulty_sum / reviewed as f64;
        stats.avg_stability = stability_sum / reviewed as f64;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn reviewed_card(
        status: CardStatus,
        difficulty: f64,
        stability: f64,
        last: DateTime<Utc>,
        next: DateTime<Utc>,
    ) -> Card {
        Card {
            status,
            difficulty,
            stability,
            last_reviewed_at: Some(last),
            next_review_at: Some(next),
            review_count: 3,
        }
    }

    #[test]
    fn retention_is_zero_for_new_cards() {
        assert_eq!(retention(&Card::new(), at_noon()), 0.0);
    }

    #[test]
    fn retention_is_zero_without_timestamps() {
        let card = Card {
            status: CardStatus::Learning,
            ..Card::new()
        };
        assert_eq!(retention(&card, at_noon()), 0.0);
    }

    #[test]
    fn retention_is_full_just_after_review() {
        let now = at_noon();
        let card = reviewed_card(CardStatus::Review, 0.5, 5.0, now, now + Duration::days(5));
        assert_eq!(retention(&card, now), 1.0);
    }

    #[test]
    fn retention_decays_over_the_scheduled_interval() {
        let now = at_noon();
        let card = reviewed_card(
            CardStatus::Review,
            0.5,
            2.0,
            now - Duration::days(1),
            now + Duration::days(1),
        );

        // Halfway through the interval: exp(-0.5).
        let r = retention(&card, now);
        assert!((r - (-0.5f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn statistics_count_by_status() {
        let now = at_noon();
        let future = now + Duration::days(5);
        let cards = vec![
            Card::new(),
            Card::new(),
            reviewed_card(CardStatus::Learning, 0.5, 0.6, now, future),
            reviewed_card(CardStatus::Review, 0.5, 5.0, now, future),
        ];

        let stats = card_statistics(&cards, now);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.new, 2);
        assert_eq!(stats.learning, 1);
        assert_eq!(stats.review, 1);
        assert_eq!(stats.relearning, 0);
    }

    #[test]
    fn statistics_count_due_cards() {
        let now = at_noon();
        let cards = vec![
            Card::new(),
            reviewed_card(CardStatus::Review, 0.5, 5.0, now, now + Duration::days(5)),
            reviewed_card(CardStatus::Review, 0.5, 5.0, now - Duration::days(6), now - Duration::days(1)),
        ];

        let stats = card_statistics(&cards, now);
        assert_eq!(stats.due, 2);
    }

    #[test]
    fn statistics_average_only_reviewed_cards() {
        let now = at_noon();
        let future = now + Duration::days(1);
        let cards = vec![
            Card::new(),
            reviewed_card(CardStatus::Review, 0.3, 5.0, now, future),
            reviewed_card(CardStatus::Review, 0.7, 3.0, now, future),
        ];

        let stats = card_statistics(&cards, now);
        assert!((stats.avg_difficulty - 0.5).abs() < 1e-9);
        assert!((stats.avg_stability - 4.0).abs() < 1e-9);
    }

    #[test]
    fn statistics_averages_are_zero_without_reviewed_cards() {
        let stats = card_statistics(&[Card::new(), Card::new()], at_noon());
        assert_eq!(stats.avg_difficulty, 0.0);
        assert_eq!(stats.avg_stability, 0.0);
    }

    #[test]
    fn statistics_for_empty_collection() {
        let stats = card_statistics(&[], at_noon());
        assert_eq!(stats, CardStatistics::default());
    }
}
