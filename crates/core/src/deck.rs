// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck configuration types.
//!
//! A [DeckConfig] is derived from the user [DeckSettings] and defines the active
//! ranks sequence, the value of each rank used for comparisons, the active suits
//! and the number of shuffled decks.
use ahash::AHashMap;

use crate::{Error, Result};

/// The canonical ranks order used for range selection.
pub const CARD_ORDER: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// The maximum number of shuffled decks.
pub const MAX_DECKS: u32 = 10;

/// The standard suits.
pub const DEFAULT_SUITS: [&str; 4] = ["♠", "♥", "♦", "♣"];

/// How the active ranks are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankSource {
    /// A contiguous range of the canonical [CARD_ORDER], bounds included.
    Range {
        /// The first rank label.
        start: String,
        /// The last rank label.
        end: String,
    },
    /// A comma separated list of rank labels, in comparison order.
    Custom(String),
}

impl Default for RankSource {
    fn default() -> Self {
        RankSource::Range {
            start: CARD_ORDER[0].to_string(),
            end: CARD_ORDER[CARD_ORDER.len() - 1].to_string(),
        }
    }
}

/// How the active suits are selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuitSource {
    /// The [DEFAULT_SUITS].
    #[default]
    Standard,
    /// A comma separated list of suit labels.
    Custom(String),
}

/// The user deck settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSettings {
    /// The number of shuffled decks.
    pub num_decks: u32,
    /// The ranks selection.
    pub ranks: RankSource,
    /// The suits selection.
    pub suits: SuitSource,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            num_decks: 1,
            ranks: RankSource::default(),
            suits: SuitSource::default(),
        }
    }
}

/// Parses a comma separated ranks list.
///
/// Labels are trimmed and upper cased, empty entries are skipped, order and
/// duplicates are preserved.
pub fn parse_rank_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Parses a comma separated suits list.
pub fn parse_suit_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The active deck configuration.
#[derive(Debug, Clone)]
pub struct DeckConfig {
    /// The ranks as given by the user, duplicates included.
    sequence: Vec<String>,
    /// Distinct ranks in first seen order.
    ranks: Vec<String>,
    /// The value of each distinct rank.
    values: Vec<u32>,
    /// Distinct suits in first seen order.
    suits: Vec<String>,
    rank_index: AHashMap<String, usize>,
    suit_index: AHashMap<String, usize>,
    num_decks: u32,
}

impl DeckConfig {
    /// Builds a configuration from the user settings.
    pub fn build(settings: &DeckSettings) -> Result<Self> {
        let sequence = match &settings.ranks {
            RankSource::Range { start, end } => {
                let start = canonical_index(start)?;
                let end = canonical_index(end)?;

                // An inverted range has no cards.
                if start <= end {
                    CARD_ORDER[start..=end]
                        .iter()
                        .map(|r| r.to_string())
                        .collect()
                } else {
                    Vec::new()
                }
            }
            RankSource::Custom(text) => parse_rank_list(text),
        };

        let suits = match &settings.suits {
            SuitSource::Standard => DEFAULT_SUITS.iter().map(|s| s.to_string()).collect(),
            SuitSource::Custom(text) => parse_suit_list(text),
        };

        Self::from_labels(sequence, suits, settings.num_decks)
    }

    /// Creates a configuration from ranks and suits labels.
    ///
    /// Each rank gets the value of its position in the sequence plus 2; when a
    /// label appears more than once its last position wins.
    pub fn from_labels<R, S>(sequence: R, suits: S, num_decks: u32) -> Result<Self>
    where
        R: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        if !(1..=MAX_DECKS).contains(&num_decks) {
            return Err(Error::InvalidDeckCount(num_decks));
        }

        let sequence = sequence.into_iter().collect::<Vec<_>>();

        let mut ranks = Vec::with_capacity(sequence.len());
        let mut values = Vec::with_capacity(sequence.len());
        let mut rank_index = AHashMap::with_capacity(sequence.len());
        for (pos, rank) in sequence.iter().enumerate() {
            let value = pos as u32 + 2;
            if let Some(&idx) = rank_index.get(rank) {
                values[idx] = value;
            } else {
                rank_index.insert(rank.clone(), ranks.len());
                ranks.push(rank.clone());
                values.push(value);
            }
        }

        let mut distinct_suits = Vec::new();
        let mut suit_index = AHashMap::new();
        for suit in suits {
            if !suit_index.contains_key(&suit) {
                suit_index.insert(suit.clone(), distinct_suits.len());
                distinct_suits.push(suit);
            }
        }

        Ok(Self {
            sequence,
            ranks,
            values,
            suits: distinct_suits,
            rank_index,
            suit_index,
            num_decks,
        })
    }

    /// The ranks sequence as entered, duplicates included.
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// The distinct active ranks.
    pub fn ranks(&self) -> &[String] {
        &self.ranks
    }

    /// The distinct active suits.
    pub fn suits(&self) -> &[String] {
        &self.suits
    }

    /// The number of shuffled decks, that is the number of copies of each card.
    pub fn num_decks(&self) -> u32 {
        self.num_decks
    }

    /// The comparison value of a rank.
    pub fn value(&self, rank: &str) -> Option<u32> {
        self.rank_index(rank).map(|idx| self.values[idx])
    }

    /// The position of a rank in [Self::ranks].
    pub fn rank_index(&self, rank: &str) -> Option<usize> {
        self.rank_index.get(rank).copied()
    }

    /// The position of a suit in [Self::suits].
    pub fn suit_index(&self, suit: &str) -> Option<usize> {
        self.suit_index.get(suit).copied()
    }

    /// Checks if a rank is active.
    pub fn contains_rank(&self, rank: &str) -> bool {
        self.rank_index.contains_key(rank)
    }

    /// Checks if there are no card slots.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty() || self.suits.is_empty()
    }

    /// Checks if two configurations have the same ranks and suits sets.
    ///
    /// Ordering and number of decks are ignored.
    pub fn same_slots(&self, other: &DeckConfig) -> bool {
        self.ranks.len() == other.ranks.len()
            && self.suits.len() == other.suits.len()
            && self.ranks.iter().all(|r| other.contains_rank(r))
            && self.suits.iter().all(|s| other.suit_index.contains_key(s))
    }
}

fn canonical_index(label: &str) -> Result<usize> {
    let label = label.trim();
    CARD_ORDER
        .iter()
        .position(|r| r.eq_ignore_ascii_case(label))
        .ok_or_else(|| Error::UnknownRank(label.to_string()))
}
