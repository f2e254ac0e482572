// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tracker error types.
use thiserror::Error;

/// Errors returned by the deck, ledger and odds operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rank label that is not part of the active or canonical ranks.
    #[error("unknown rank {0:?}")]
    UnknownRank(String),
    /// A card slot that is not part of the ledger.
    #[error("unknown card slot {suit} {rank}")]
    UnknownSlot {
        /// The slot rank label.
        rank: String,
        /// The slot suit label.
        suit: String,
    },
    /// The number of decks is outside `1..=MAX_DECKS`.
    #[error("invalid number of decks {0}, must be between 1 and {max}", max = crate::deck::MAX_DECKS)]
    InvalidDeckCount(u32),
}

/// Result type for the core operations.
pub type Result<T> = std::result::Result<T, Error>;
