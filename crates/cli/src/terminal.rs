// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io;

use hilo_core::{DeckConfig, MAX_DECKS, Tracker};

use crate::report;

/// A user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Moves the cursor by rows and columns.
    Move(isize, isize),
    /// Observes the card under the cursor.
    Observe,
    /// Clears all seen cards.
    Reset,
    /// Adds a deck.
    AddDeck,
    /// Removes a deck.
    RemoveDeck,
    /// Exits the terminal loop.
    Quit,
}

impl Action {
    /// Maps a key event to an action.
    pub fn from_key(key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Action::Move(0, -1),
            KeyCode::Right | KeyCode::Char('l') => Action::Move(0, 1),
            KeyCode::Up | KeyCode::Char('k') => Action::Move(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => Action::Move(1, 0),
            KeyCode::Char(' ') | KeyCode::Enter => Action::Observe,
            KeyCode::Char('r') => Action::Reset,
            KeyCode::Char('+') => Action::AddDeck,
            KeyCode::Char('-') => Action::RemoveDeck,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => return None,
        };

        Some(action)
    }
}

/// The grid cursor, a row for each suit and a column for each rank position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    /// The suit row.
    pub row: usize,
    /// The rank column.
    pub col: usize,
}

impl GridCursor {
    /// Moves the cursor keeping it inside the grid.
    pub fn move_by(&mut self, rows: isize, cols: isize, config: &DeckConfig) {
        self.row = self.row.saturating_add_signed(rows);
        self.col = self.col.saturating_add_signed(cols);
        self.clamp(config);
    }

    /// Keeps the cursor inside the grid after a deck change.
    pub fn clamp(&mut self, config: &DeckConfig) {
        self.row = self.row.min(config.suits().len().saturating_sub(1));
        self.col = self.col.min(config.sequence().len().saturating_sub(1));
    }
}

/// Applies an action to the tracker, returns a status message.
pub fn apply(tracker: &mut Tracker, cursor: &mut GridCursor, action: Action) -> Option<String> {
    match action {
        Action::Move(rows, cols) => {
            cursor.move_by(rows, cols, tracker.config());
            None
        }
        Action::Observe => {
            let config = tracker.config();
            let rank = config.sequence().get(cursor.col)?.clone();
            let suit = config.suits().get(cursor.row)?.clone();

            let status = match tracker.observe(&rank, &suit) {
                Ok(count) => format!("Observed {suit} {rank}, seen {count}"),
                Err(e) => e.to_string(),
            };

            Some(status)
        }
        Action::Reset => {
            tracker.reset();
            Some("Seen cards reset".to_string())
        }
        Action::AddDeck | Action::RemoveDeck => {
            let mut settings = tracker.settings().clone();
            settings.num_decks = if action == Action::AddDeck {
                (settings.num_decks + 1).min(MAX_DECKS)
            } else {
                settings.num_decks.saturating_sub(1).max(1)
            };

            let status = match tracker.configure(settings) {
                Ok(_) => format!("Number of decks {}", tracker.config().num_decks()),
                Err(e) => e.to_string(),
            };

            Some(status)
        }
        Action::Quit => None,
    }
}

/// Runs the terminal loop.
pub fn run(tracker: &mut Tracker) -> Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = event_loop(&mut stdout, tracker);

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

fn event_loop(w: &mut impl io::Write, tracker: &mut Tracker) -> Result<()> {
    let mut cursor = GridCursor::default();
    let mut status = String::new();

    loop {
        cursor.clamp(tracker.config());
        print_tracker(w, tracker, &cursor, &status)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        match Action::from_key(key) {
            Some(Action::Quit) => break,
            Some(action) => {
                if let Some(msg) = apply(tracker, &mut cursor, action) {
                    status = msg;
                }
            }
            None => {}
        }
    }

    Ok(())
}

fn print_tracker(
    w: &mut impl io::Write,
    tracker: &Tracker,
    grid_cursor: &GridCursor,
    status: &str,
) -> Result<()> {
    const CELL_WIDTH: u16 = 7;

    execute!(w, Clear(ClearType::All))?;

    let config = tracker.config();
    let header = format!(
        "Higher / Lower Odds Tracker  decks: {}  [arrows] move [space] observe [r] reset [+/-] decks [q] quit",
        config.num_decks()
    );
    queue!(
        w,
        cursor::MoveTo(0, 0),
        style::PrintStyledContent(header.as_str().bold())
    )?;

    let mut row = 2;
    if config.is_empty() {
        queue!(
            w,
            cursor::MoveTo(0, row),
            style::Print("No cards in the deck, check the deck settings.")
        )?;
        row += 1;
    }

    for (suit_idx, suit) in config.suits().iter().enumerate() {
        queue!(w, cursor::MoveTo(0, row), style::Print(format!("{suit:<3}")))?;

        for (col, rank) in config.sequence().iter().enumerate() {
            let count = tracker.count(rank, suit).unwrap_or_default();
            let count_text = if count > 0 {
                count.to_string()
            } else {
                String::new()
            };

            let text = format!("{rank:>3}:{count_text:<2}");
            let mut cell = text.as_str().stylize();
            if count > 0 {
                cell = cell.yellow();
            }

            if tracker
                .last_observed()
                .is_some_and(|s| &s.rank == rank && &s.suit == suit)
            {
                cell = cell.bold();
            }

            if grid_cursor.row == suit_idx && grid_cursor.col == col {
                cell = cell.reverse();
            }

            queue!(
                w,
                cursor::MoveTo(4 + col as u16 * CELL_WIDTH, row),
                style::PrintStyledContent(cell)
            )?;
        }

        row += 1;
    }

    row += 1;
    for line in report::report_lines(&tracker.snapshot()) {
        queue!(w, cursor::MoveTo(0, row), style::Print(line))?;
        row += 1;
    }

    row += 1;
    queue!(
        w,
        cursor::MoveTo(0, row),
        style::PrintStyledContent(status.dark_green())
    )?;

    w.flush()?;

    Ok(())
}
