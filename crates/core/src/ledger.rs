// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seen cards ledger.
use ahash::AHashMap;
use log::debug;
use std::fmt;

use crate::{DeckConfig, Error, Result};

/// A card slot, the unit of observation tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    /// The rank label.
    pub rank: String,
    /// The suit label.
    pub suit: String,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(rank: impl Into<String>, suit: impl Into<String>) -> Self {
        Self {
            rank: rank.into(),
            suit: suit.into(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

/// The number of times each card slot has been seen.
///
/// Counts are stored in a table with a row for each rank and a column for each
/// suit, the shape is fixed for a given [DeckConfig].
#[derive(Debug, Clone)]
pub struct Ledger {
    ranks: Vec<String>,
    suits: Vec<String>,
    counts: Vec<u32>,
    rank_index: AHashMap<String, usize>,
    suit_index: AHashMap<String, usize>,
}

impl Ledger {
    /// Creates a ledger with all counts set to zero for the config slots.
    pub fn new(config: &DeckConfig) -> Self {
        let ranks = config.ranks().to_vec();
        let suits = config.suits().to_vec();
        let counts = vec![0; ranks.len() * suits.len()];

        let rank_index = ranks
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.clone(), idx))
            .collect();

        let suit_index = suits
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.clone(), idx))
            .collect();

        Self {
            ranks,
            suits,
            counts,
            rank_index,
            suit_index,
        }
    }

    /// The ledger ranks in row order.
    pub fn ranks(&self) -> &[String] {
        &self.ranks
    }

    /// The ledger suits in column order.
    pub fn suits(&self) -> &[String] {
        &self.suits
    }

    /// Returns the count for a slot.
    pub fn count(&self, rank: &str, suit: &str) -> Option<u32> {
        self.position(rank, suit).map(|pos| self.counts[pos])
    }

    /// Returns the counts of a rank for each suit, in suits order.
    pub fn rank_counts(&self, rank: &str) -> Option<&[u32]> {
        let row = *self.rank_index.get(rank)?;
        let cols = self.suits.len();
        Some(&self.counts[row * cols..(row + 1) * cols])
    }

    /// Observes a card slot and returns its new count.
    ///
    /// The count cycles through `0..=num_decks`, observing a slot that has been
    /// seen `num_decks` times sets it back to zero.
    pub fn observe(&mut self, rank: &str, suit: &str, num_decks: u32) -> Result<u32> {
        let pos = self
            .position(rank, suit)
            .ok_or_else(|| Error::UnknownSlot {
                rank: rank.to_string(),
                suit: suit.to_string(),
            })?;

        let count = (u64::from(self.counts[pos]) + 1) % (u64::from(num_decks) + 1);
        let count = count as u32;
        self.counts[pos] = count;

        debug!("Observed {suit} {rank} count {count}");

        Ok(count)
    }

    /// Sets all counts to zero.
    pub fn clear(&mut self) {
        self.counts.fill(0);
    }

    /// Checks if no card has been seen.
    pub fn is_clear(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// The sum of all counts.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterates over all slots as (rank, suit, count), rank major.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        let cols = self.suits.len();
        self.counts.iter().enumerate().map(move |(pos, &count)| {
            (
                self.ranks[pos / cols].as_str(),
                self.suits[pos % cols].as_str(),
                count,
            )
        })
    }

    /// Checks if this ledger keys are the config slots.
    pub fn matches(&self, config: &DeckConfig) -> bool {
        self.ranks.len() == config.ranks().len()
            && self.suits.len() == config.suits().len()
            && config.ranks().iter().all(|r| self.rank_index.contains_key(r))
            && config.suits().iter().all(|s| self.suit_index.contains_key(s))
    }

    /// Reshapes this ledger for a new config.
    ///
    /// When the config has the same ranks and suits sets the counts are kept and
    /// moved to the new rows and columns order, otherwise the ledger is replaced
    /// with an empty one. Returns true if the counts have been discarded.
    pub fn rebuild(&mut self, config: &DeckConfig) -> bool {
        let mut ledger = Ledger::new(config);

        if !self.matches(config) {
            *self = ledger;
            return true;
        }

        for (rank, suit, count) in self.iter() {
            if let Some(pos) = ledger.position(rank, suit) {
                ledger.counts[pos] = count;
            }
        }

        *self = ledger;
        false
    }

    fn position(&self, rank: &str, suit: &str) -> Option<usize> {
        let row = self.rank_index.get(rank)?;
        let col = self.suit_index.get(suit)?;
        Some(row * self.suits.len() + col)
    }
}
