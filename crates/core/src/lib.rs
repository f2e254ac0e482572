// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hilo core types for tracking seen cards in a Higher or Lower game.
//!
//! A [DeckConfig] defines the active ranks and suits, a [Ledger] counts how many
//! times each card slot has been seen, and the odds engine computes the chances
//! that the next card is higher, lower, or equal to a reference rank:
//!
//! ```
//! # use hilo_core::*;
//! let settings = DeckSettings {
//!     ranks: RankSource::Custom("2,3,4".to_string()),
//!     suits: SuitSource::Custom("S,H".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut tracker = Tracker::new(settings).unwrap();
//! tracker.observe("3", "S").unwrap();
//!
//! let odds = tracker.rank_odds().unwrap();
//! assert!((odds.higher - 40.0).abs() < 1e-9);
//! assert!((odds.lower - 40.0).abs() < 1e-9);
//! assert!((odds.equal - 20.0).abs() < 1e-9);
//! ```
//!
//! The [Tracker] owns all the session state and exposes a [Snapshot] with the
//! values a front-end needs to display after each action.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod deck;
pub use deck::{
    CARD_ORDER, DEFAULT_SUITS, DeckConfig, DeckSettings, MAX_DECKS, RankSource, SuitSource,
};

pub mod error;
pub use error::{Error, Result};

pub mod ledger;
pub use ledger::{Ledger, Slot};

pub mod odds;
pub use odds::{RankOdds, SuitOdds};

pub mod tracker;
pub use tracker::{RankSummary, Snapshot, Tracker};
