// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Session state for a Higher or Lower game.
use log::info;

use crate::{DeckConfig, DeckSettings, Ledger, RankOdds, Result, Slot, SuitOdds};

/// The counts of a rank for each suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankSummary {
    /// The rank label.
    pub rank: String,
    /// The (suit, count) pairs in suits order.
    pub counts: Vec<(String, u32)>,
}

/// The values shown to the user after each action.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// The tracker version this snapshot was taken at.
    pub version: u64,
    /// The last observed card.
    pub last_observed: Option<Slot>,
    /// Rank odds for the last observed card rank.
    pub rank_odds: Option<RankOdds>,
    /// Suits odds, available once a card has been observed.
    pub suit_odds: Option<SuitOdds>,
    /// Total number of seen cards.
    pub total_seen: u32,
    /// Ranks with at least one seen card.
    pub seen_by_rank: Vec<RankSummary>,
}

/// The tracker state: deck configuration, seen cards and last observed card.
///
/// Every state change bumps the tracker [version](Tracker::version) so that
/// callers can recompute derived values only when needed.
#[derive(Debug, Clone)]
pub struct Tracker {
    settings: DeckSettings,
    config: DeckConfig,
    ledger: Ledger,
    last_observed: Option<Slot>,
    version: u64,
}

impl Tracker {
    /// Creates a tracker with no cards seen.
    pub fn new(settings: DeckSettings) -> Result<Self> {
        let config = DeckConfig::build(&settings)?;
        let ledger = Ledger::new(&config);

        Ok(Self {
            settings,
            config,
            ledger,
            last_observed: None,
            version: 0,
        })
    }

    /// The current settings.
    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    /// The active deck configuration.
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// The seen cards ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The state version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies new settings.
    ///
    /// If the new settings change the ranks or suits sets the seen cards and the
    /// last observed card are cleared and this function returns true. On error
    /// the tracker is left unchanged.
    pub fn configure(&mut self, settings: DeckSettings) -> Result<bool> {
        if settings == self.settings {
            return Ok(false);
        }

        let config = DeckConfig::build(&settings)?;

        let discarded = self.ledger.rebuild(&config);
        if discarded {
            self.last_observed = None;
            info!(
                "Deck changed to {} ranks and {} suits, seen cards cleared",
                config.ranks().len(),
                config.suits().len()
            );
        }

        self.config = config;
        self.settings = settings;
        self.version += 1;

        Ok(discarded)
    }

    /// Observes a card and returns the new count for its slot.
    pub fn observe(&mut self, rank: &str, suit: &str) -> Result<u32> {
        let count = self.ledger.observe(rank, suit, self.config.num_decks())?;
        self.last_observed = Some(Slot::new(rank, suit));
        self.version += 1;
        Ok(count)
    }

    /// Clears all seen cards and the last observed card.
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.last_observed = None;
        self.version += 1;
        info!("Seen cards reset");
    }

    /// The last observed card if any.
    pub fn last_observed(&self) -> Option<&Slot> {
        self.last_observed.as_ref()
    }

    /// The count for a card slot.
    pub fn count(&self, rank: &str, suit: &str) -> Option<u32> {
        self.ledger.count(rank, suit)
    }

    /// The rank odds for the last observed card.
    pub fn rank_odds(&self) -> Option<RankOdds> {
        let slot = self.last_observed.as_ref()?;
        RankOdds::compute(
            &slot.rank,
            &self.ledger,
            self.config.num_decks(),
            &self.config,
        )
        .ok()
    }

    /// The next card suit odds.
    pub fn suit_odds(&self) -> SuitOdds {
        SuitOdds::compute(&self.ledger, self.config.num_decks(), &self.config)
    }

    /// The total number of seen cards for the active ranks.
    pub fn total_seen(&self) -> u32 {
        self.ledger
            .iter()
            .filter(|(rank, _, _)| self.config.contains_rank(rank))
            .map(|(_, _, count)| count)
            .sum()
    }

    /// The per suit counts for each rank with at least one seen card.
    pub fn seen_by_rank(&self) -> Vec<RankSummary> {
        self.config
            .ranks()
            .iter()
            .filter_map(|rank| {
                let counts = self.ledger.rank_counts(rank)?;
                counts.iter().any(|&c| c > 0).then(|| RankSummary {
                    rank: rank.clone(),
                    counts: self
                        .ledger
                        .suits()
                        .iter()
                        .cloned()
                        .zip(counts.iter().copied())
                        .collect(),
                })
            })
            .collect()
    }

    /// Takes a snapshot of the values to display.
    pub fn snapshot(&self) -> Snapshot {
        let suit_odds = self.last_observed.as_ref().map(|_| self.suit_odds());

        Snapshot {
            version: self.version,
            last_observed: self.last_observed.clone(),
            rank_odds: self.rank_odds(),
            suit_odds,
            total_seen: self.total_seen(),
            seen_by_rank: self.seen_by_rank(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MAX_DECKS, RankSource, SuitSource};

    const EPS: f64 = 1e-9;

    fn settings(ranks: &str, suits: &str, num_decks: u32) -> DeckSettings {
        DeckSettings {
            num_decks,
            ranks: RankSource::Custom(ranks.to_string()),
            suits: SuitSource::Custom(suits.to_string()),
        }
    }

    #[test]
    fn observe_and_odds() {
        let mut tracker = Tracker::new(settings("2,3,4", "♠,♥", 1)).unwrap();
        assert!(tracker.last_observed().is_none());
        assert!(tracker.rank_odds().is_none());

        assert_eq!(tracker.observe("3", "♠").unwrap(), 1);
        assert_eq!(tracker.last_observed(), Some(&Slot::new("3", "♠")));

        let odds = tracker.rank_odds().unwrap();
        assert!((odds.higher - 40.0).abs() < EPS);
        assert!((odds.lower - 40.0).abs() < EPS);
        assert!((odds.equal - 20.0).abs() < EPS);

        let suits = tracker.suit_odds();
        assert!((suits.get("♠").unwrap() - 40.0).abs() < EPS);
        assert!((suits.get("♥").unwrap() - 60.0).abs() < EPS);
    }

    #[test]
    fn observe_unknown_card() {
        let mut tracker = Tracker::new(settings("2,3", "♠", 1)).unwrap();
        let version = tracker.version();

        assert!(matches!(
            tracker.observe("4", "♠"),
            Err(Error::UnknownSlot { .. })
        ));
        assert!(tracker.last_observed().is_none());
        assert_eq!(tracker.version(), version);
    }

    #[test]
    fn slot_cycles_back_to_unseen() {
        let mut tracker = Tracker::new(settings("2,3", "♠,♥", 2)).unwrap();
        assert_eq!(tracker.observe("2", "♥").unwrap(), 1);
        assert_eq!(tracker.observe("2", "♥").unwrap(), 2);
        assert_eq!(tracker.observe("2", "♥").unwrap(), 0);

        assert_eq!(tracker.total_seen(), 0);
        assert!(tracker.seen_by_rank().is_empty());

        // The marker is still set on the wrapped slot.
        assert_eq!(tracker.last_observed(), Some(&Slot::new("2", "♥")));
        let odds = tracker.rank_odds().unwrap();
        assert!((odds.equal - 50.0).abs() < EPS);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut tracker = Tracker::new(DeckSettings::default()).unwrap();
        tracker.observe("K", "♦").unwrap();
        tracker.observe("2", "♣").unwrap();

        tracker.reset();
        assert!(tracker.ledger().is_clear());
        assert!(tracker.last_observed().is_none());

        tracker.reset();
        assert!(tracker.ledger().is_clear());
        assert!(tracker.last_observed().is_none());
        assert_eq!(tracker.total_seen(), 0);
    }

    #[test]
    fn deck_count_change_keeps_counts() {
        let mut tracker = Tracker::new(settings("2,3", "♠,♥", 1)).unwrap();
        tracker.observe("3", "♥").unwrap();

        let discarded = tracker.configure(settings("2,3", "♠,♥", 2)).unwrap();
        assert!(!discarded);
        assert_eq!(tracker.count("3", "♥"), Some(1));
        assert_eq!(tracker.config().num_decks(), 2);
        assert_eq!(tracker.last_observed(), Some(&Slot::new("3", "♥")));

        // The new deck count is used for the next observation.
        assert_eq!(tracker.observe("3", "♥").unwrap(), 2);
    }

    #[test]
    fn slots_change_clears_state() {
        let mut tracker = Tracker::new(settings("2,3", "♠,♥", 1)).unwrap();
        tracker.observe("3", "♥").unwrap();
        let version = tracker.version();

        let discarded = tracker.configure(settings("2,3,4", "♠,♥", 1)).unwrap();
        assert!(discarded);
        assert!(tracker.ledger().is_clear());
        assert!(tracker.last_observed().is_none());
        assert_eq!(tracker.count("4", "♠"), Some(0));
        assert!(tracker.version() > version);

        let discarded = tracker.configure(settings("2,3,4", "♠", 1)).unwrap();
        assert!(discarded);
    }

    #[test]
    fn rank_order_change_keeps_counts() {
        let mut tracker = Tracker::new(settings("2,3,4", "♠,♥", 1)).unwrap();
        tracker.observe("2", "♠").unwrap();

        let discarded = tracker.configure(settings("4,3,2", "♠,♥", 1)).unwrap();
        assert!(!discarded);
        assert_eq!(tracker.count("2", "♠"), Some(1));

        // "2" is now the highest rank.
        let odds = tracker.rank_odds().unwrap();
        assert!((odds.higher - 0.0).abs() < EPS);
        assert!((odds.equal - 20.0).abs() < EPS);
        assert!((odds.lower - 80.0).abs() < EPS);
    }

    #[test]
    fn invalid_settings_keep_state() {
        let mut tracker = Tracker::new(settings("2,3", "♠,♥", 1)).unwrap();
        tracker.observe("2", "♠").unwrap();
        let version = tracker.version();

        let res = tracker.configure(settings("2,3", "♠,♥", 0));
        assert_eq!(res.unwrap_err(), Error::InvalidDeckCount(0));
        assert_eq!(tracker.count("2", "♠"), Some(1));
        assert_eq!(tracker.version(), version);
        assert_eq!(tracker.settings(), &settings("2,3", "♠,♥", 1));
    }

    #[test]
    fn deck_count_above_max() {
        let res = Tracker::new(settings("2,3", "S", u32::MAX));
        assert_eq!(res.unwrap_err(), Error::InvalidDeckCount(u32::MAX));

        let mut tracker = Tracker::new(settings("2,3", "S", MAX_DECKS)).unwrap();
        let res = tracker.configure(settings("2,3", "S", MAX_DECKS + 1));
        assert_eq!(res.unwrap_err(), Error::InvalidDeckCount(MAX_DECKS + 1));

        assert_eq!(tracker.observe("2", "S").unwrap(), 1);
        assert_eq!(tracker.config().num_decks(), MAX_DECKS);
    }

    #[test]
    fn empty_custom_lists() {
        let mut tracker = Tracker::new(settings("2,3", "S", 1)).unwrap();
        tracker.observe("2", "S").unwrap();

        // Empty text is an empty deck with no cards, not an error.
        let discarded = tracker.configure(settings(" , ", "S", 1)).unwrap();
        assert!(discarded);
        assert!(tracker.config().is_empty());
        assert_eq!(tracker.total_seen(), 0);
        assert!(tracker.rank_odds().is_none());
        assert!(tracker.suit_odds().iter().all(|(_, p)| p == 0.0));

        let discarded = tracker.configure(settings("2,3", "", 1)).unwrap();
        assert!(discarded);
        assert!(tracker.config().suits().is_empty());
        assert!(tracker.suit_odds().is_empty());
    }

    #[test]
    fn empty_range() {
        let settings = DeckSettings {
            ranks: RankSource::Range {
                start: "A".to_string(),
                end: "2".to_string(),
            },
            ..Default::default()
        };

        let mut tracker = Tracker::new(settings).unwrap();
        assert!(tracker.config().ranks().is_empty());
        assert!(tracker.observe("2", "♠").is_err());
        assert_eq!(tracker.total_seen(), 0);
        assert!(tracker.suit_odds().iter().all(|(_, p)| p == 0.0));
    }

    #[test]
    fn snapshot_summary() {
        let mut tracker = Tracker::new(settings("2,3,4", "♠,♥", 2)).unwrap();
        let snapshot = tracker.snapshot();
        assert!(snapshot.last_observed.is_none());
        assert!(snapshot.rank_odds.is_none());
        assert!(snapshot.suit_odds.is_none());
        assert_eq!(snapshot.total_seen, 0);

        tracker.observe("4", "♥").unwrap();
        tracker.observe("4", "♥").unwrap();
        tracker.observe("2", "♠").unwrap();

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.version, tracker.version());
        assert_eq!(snapshot.last_observed, Some(Slot::new("2", "♠")));
        assert_eq!(snapshot.total_seen, 3);
        assert_eq!(snapshot.suit_odds.unwrap().len(), 2);
        assert_eq!(
            snapshot.seen_by_rank,
            [
                RankSummary {
                    rank: "2".to_string(),
                    counts: vec![("♠".to_string(), 1), ("♥".to_string(), 0)],
                },
                RankSummary {
                    rank: "4".to_string(),
                    counts: vec![("♠".to_string(), 0), ("♥".to_string(), 2)],
                },
            ]
        );
    }
}
