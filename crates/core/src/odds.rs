// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds for the next card drawn.
//!
//! The odds are computed over the remaining population, that is the copies of
//! each card slot that have not been seen yet.
use std::cmp::Ordering;

use crate::{DeckConfig, Error, Ledger, Result};

/// The number of copies of a slot not seen yet.
pub fn remaining(count: u32, max_per_slot: u32) -> u32 {
    max_per_slot.saturating_sub(count)
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// The odds that the next card rank is higher, lower or equal to a reference.
///
/// Values are percentages, all zero if there are no cards left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RankOdds {
    /// Chance the next card is higher.
    pub higher: f64,
    /// Chance the next card is lower.
    pub lower: f64,
    /// Chance the next card has the same rank.
    pub equal: f64,
}

impl RankOdds {
    /// Computes the odds for the reference rank.
    ///
    /// Ledger slots whose rank is not in the config are ignored, returns an error
    /// if the reference rank is not in the config.
    pub fn compute(
        reference: &str,
        ledger: &Ledger,
        max_per_slot: u32,
        config: &DeckConfig,
    ) -> Result<Self> {
        let reference = config
            .value(reference)
            .ok_or_else(|| Error::UnknownRank(reference.to_string()))?;

        let (mut higher, mut lower, mut equal) = (0u64, 0u64, 0u64);
        for (rank, _, count) in ledger.iter() {
            let Some(value) = config.value(rank) else {
                continue;
            };

            let left = u64::from(remaining(count, max_per_slot));
            match value.cmp(&reference) {
                Ordering::Greater => higher += left,
                Ordering::Less => lower += left,
                Ordering::Equal => equal += left,
            }
        }

        let total = higher + lower + equal;
        Ok(Self {
            higher: percent(higher, total),
            lower: percent(lower, total),
            equal: percent(equal, total),
        })
    }

    /// The sum of the three percentages.
    pub fn sum(&self) -> f64 {
        self.higher + self.lower + self.equal
    }
}

/// The odds of the next card suit, for each active suit in config order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuitOdds {
    suits: Vec<(String, f64)>,
}

impl SuitOdds {
    /// Computes the suits odds.
    pub fn compute(ledger: &Ledger, max_per_slot: u32, config: &DeckConfig) -> Self {
        let mut totals = vec![0u64; config.suits().len()];

        for (rank, suit, count) in ledger.iter() {
            if !config.contains_rank(rank) {
                continue;
            }

            if let Some(idx) = config.suit_index(suit) {
                totals[idx] += u64::from(remaining(count, max_per_slot));
            }
        }

        let total = totals.iter().sum();
        let suits = config
            .suits()
            .iter()
            .zip(totals)
            .map(|(suit, left)| (suit.clone(), percent(left, total)))
            .collect();

        Self { suits }
    }

    /// The odds for a suit.
    pub fn get(&self, suit: &str) -> Option<f64> {
        self.suits.iter().find(|(s, _)| s == suit).map(|(_, p)| *p)
    }

    /// Iterates over (suit, percent) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.suits.iter().map(|(s, p)| (s.as_str(), *p))
    }

    /// The number of suits.
    pub fn len(&self) -> usize {
        self.suits.len()
    }

    /// Checks if there are no suits.
    pub fn is_empty(&self) -> bool {
        self.suits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn config(ranks: &[&str], suits: &[&str], num_decks: u32) -> DeckConfig {
        DeckConfig::from_labels(
            ranks.iter().map(|r| r.to_string()),
            suits.iter().map(|s| s.to_string()),
            num_decks,
        )
        .unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{a} != {b}");
    }

    #[test]
    fn rank_odds_after_one_card() {
        let config = config(&["2", "3", "4"], &["♠", "♥"], 1);
        let mut ledger = Ledger::new(&config);
        ledger.observe("3", "♠", 1).unwrap();

        let odds = RankOdds::compute("3", &ledger, 1, &config).unwrap();
        assert_close(odds.higher, 40.0);
        assert_close(odds.lower, 40.0);
        assert_close(odds.equal, 20.0);
        assert_close(odds.sum(), 100.0);

        // Same inputs same outputs.
        assert_eq!(odds, RankOdds::compute("3", &ledger, 1, &config).unwrap());
    }

    #[test]
    fn rank_odds_at_bounds() {
        let config = config(&["2", "3", "4"], &["♠", "♥"], 2);
        let ledger = Ledger::new(&config);

        let odds = RankOdds::compute("2", &ledger, 2, &config).unwrap();
        assert_close(odds.lower, 0.0);
        assert_close(odds.equal, 100.0 / 3.0);
        assert_close(odds.higher, 200.0 / 3.0);

        let odds = RankOdds::compute("4", &ledger, 2, &config).unwrap();
        assert_close(odds.higher, 0.0);
        assert_close(odds.sum(), 100.0);
    }

    #[test]
    fn suit_odds_after_one_card() {
        let config = config(&["2", "3", "4"], &["♠", "♥"], 1);
        let mut ledger = Ledger::new(&config);
        ledger.observe("3", "♠", 1).unwrap();

        let odds = SuitOdds::compute(&ledger, 1, &config);
        assert_eq!(odds.len(), 2);
        assert_close(odds.get("♠").unwrap(), 40.0);
        assert_close(odds.get("♥").unwrap(), 60.0);
        assert_eq!(odds.get("♦"), None);
        assert_close(odds.iter().map(|(_, p)| p).sum(), 100.0);
    }

    #[test]
    fn exhausted_suit_is_reported() {
        let config = config(&["2", "3"], &["♠", "♥", "♣"], 1);
        let mut ledger = Ledger::new(&config);
        ledger.observe("2", "♣", 1).unwrap();
        ledger.observe("3", "♣", 1).unwrap();

        let odds = SuitOdds::compute(&ledger, 1, &config);
        let suits = odds.iter().map(|(s, _)| s).collect::<Vec<_>>();
        assert_eq!(suits, ["♠", "♥", "♣"]);
        assert_close(odds.get("♣").unwrap(), 0.0);
        assert_close(odds.get("♠").unwrap(), 50.0);
    }

    #[test]
    fn fully_observed_deck() {
        let config = config(&["2", "3"], &["♠", "♥"], 1);
        let mut ledger = Ledger::new(&config);
        for rank in ["2", "3"] {
            for suit in ["♠", "♥"] {
                ledger.observe(rank, suit, 1).unwrap();
            }
        }

        let odds = RankOdds::compute("2", &ledger, 1, &config).unwrap();
        assert_eq!(odds, RankOdds::default());

        let odds = SuitOdds::compute(&ledger, 1, &config);
        assert!(odds.iter().all(|(_, p)| p == 0.0));
        assert_eq!(odds.len(), 2);
    }

    #[test]
    fn empty_ranks() {
        let config = config(&[], &["♠", "♥"], 1);
        let ledger = Ledger::new(&config);

        let odds = SuitOdds::compute(&ledger, 1, &config);
        assert_eq!(odds.len(), 2);
        assert!(odds.iter().all(|(_, p)| p == 0.0));

        let res = RankOdds::compute("2", &ledger, 1, &config);
        assert_eq!(res.unwrap_err(), Error::UnknownRank("2".to_string()));
    }

    #[test]
    fn wrapped_slot_counts_as_unseen() {
        let config = config(&["2", "3", "4"], &["♠", "♥"], 2);
        let fresh = Ledger::new(&config);

        let mut ledger = Ledger::new(&config);
        for _ in 0..3 {
            ledger.observe("4", "♥", 2).unwrap();
        }

        assert_eq!(
            RankOdds::compute("3", &ledger, 2, &config).unwrap(),
            RankOdds::compute("3", &fresh, 2, &config).unwrap()
        );
        assert_eq!(
            SuitOdds::compute(&ledger, 2, &config),
            SuitOdds::compute(&fresh, 2, &config)
        );
    }

    #[test]
    fn counts_above_max_leave_nothing() {
        assert_eq!(remaining(0, 2), 2);
        assert_eq!(remaining(2, 2), 0);
        assert_eq!(remaining(3, 2), 0);

        // Counts taken with 3 decks evaluated against a single deck.
        let config = config(&["2", "3"], &["♠"], 3);
        let mut ledger = Ledger::new(&config);
        ledger.observe("2", "♠", 3).unwrap();
        ledger.observe("2", "♠", 3).unwrap();

        let odds = RankOdds::compute("2", &ledger, 1, &config).unwrap();
        assert_close(odds.higher, 100.0);
        assert_close(odds.equal, 0.0);
    }

    #[test]
    fn odds_sum_to_hundred() {
        let config = config(&["A", "B", "C", "D", "E"], &["x", "y", "z"], 3);
        let mut ledger = Ledger::new(&config);

        // Walk a few deterministic observations and check the totals each step.
        let ranks = config.ranks().to_vec();
        let suits = config.suits().to_vec();
        for step in 0..40 {
            let rank = &ranks[(step * 7) % ranks.len()];
            let suit = &suits[(step * 5) % suits.len()];
            ledger.observe(rank, suit, 3).unwrap();

            let odds = RankOdds::compute(rank, &ledger, 3, &config).unwrap();
            assert_close(odds.sum(), 100.0);

            let odds = SuitOdds::compute(&ledger, 3, &config);
            assert_close(odds.iter().map(|(_, p)| p).sum(), 100.0);
        }
    }
}
