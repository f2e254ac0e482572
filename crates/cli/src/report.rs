// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds report formatting and card arguments.
use std::{fmt, str::FromStr};

use hilo_core::Snapshot;

/// A card given on the command line as `RANK/SUIT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardArg {
    /// The rank label, upper cased.
    pub rank: String,
    /// The suit label.
    pub suit: String,
}

impl FromStr for CardArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s
            .split_once('/')
            .ok_or_else(|| format!("invalid card {s:?}, expected RANK/SUIT"))?;

        let (rank, suit) = (rank.trim(), suit.trim());
        if rank.is_empty() || suit.is_empty() {
            return Err(format!("invalid card {s:?}, expected RANK/SUIT"));
        }

        Ok(Self {
            rank: rank.to_uppercase(),
            suit: suit.to_string(),
        })
    }
}

impl fmt::Display for CardArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

/// Formats the report lines for a snapshot.
pub fn report_lines(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = Vec::new();

    match &snapshot.last_observed {
        Some(slot) => {
            lines.push(format!("Last clicked card: {slot}"));

            if let Some(odds) = snapshot.rank_odds {
                lines.push(format!("  Higher: {:6.2}%", odds.higher));
                lines.push(format!("  Lower:  {:6.2}%", odds.lower));
                lines.push(format!("  Equal:  {:6.2}%", odds.equal));
            }

            if let Some(suit_odds) = &snapshot.suit_odds {
                lines.push("Suit probabilities:".to_string());
                for (suit, pct) in suit_odds.iter() {
                    lines.push(format!("  {suit}: {pct:6.2}%"));
                }
            }
        }
        None => lines.push("Observe a card to calculate odds.".to_string()),
    }

    lines.push(String::new());
    lines.push(format!("Total cards seen: {}", snapshot.total_seen));

    for summary in &snapshot.seen_by_rank {
        let counts = summary
            .counts
            .iter()
            .map(|(suit, count)| format!("{suit}={count}"))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("- {}: {counts}", summary.rank));
    }

    lines
}
