// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hilo terminal odds tracker.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow};
use clap::Parser;

use hilo_core::{DeckSettings, RankSource, SuitSource, Tracker};

pub mod report;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of shuffled decks.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=i64::from(hilo_core::MAX_DECKS)))]
    decks: u32,
    /// The lowest rank of the standard ranks range.
    #[clap(long, default_value = "2")]
    start: String,
    /// The highest rank of the standard ranks range.
    #[clap(long, default_value = "A")]
    end: String,
    /// A comma separated custom ranks list, lowest first, overrides the range.
    #[clap(long, short)]
    ranks: Option<String>,
    /// A comma separated custom suits list.
    #[clap(long, short)]
    suits: Option<String>,
    /// A card seen before starting as RANK/SUIT, can be repeated.
    #[clap(long, short)]
    observe: Vec<report::CardArg>,
    /// Print the odds report and exit.
    #[clap(long)]
    report: bool,
}

impl Cli {
    fn settings(&self) -> DeckSettings {
        let ranks = match &self.ranks {
            Some(text) => RankSource::Custom(text.clone()),
            None => RankSource::Range {
                start: self.start.clone(),
                end: self.end.clone(),
            },
        };

        let suits = self
            .suits
            .clone()
            .map(SuitSource::Custom)
            .unwrap_or_default();

        DeckSettings {
            num_decks: self.decks,
            ranks,
            suits,
        }
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let mut tracker = Tracker::new(cli.settings())?;
    for card in &cli.observe {
        tracker
            .observe(&card.rank, &card.suit)
            .map_err(|e| anyhow!("Cannot observe {card}: {e}"))?;
    }

    if cli.report {
        for line in report::report_lines(&tracker.snapshot()) {
            println!("{line}");
        }

        return Ok(());
    }

    terminal::run(&mut tracker)
}
