// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hilo egui app implementation.
use anyhow::Result;
use eframe::egui::*;
use log::{error, info};

use hilo_core::{DeckSettings, Snapshot, Tracker};

use crate::{
    board_view::BoardView, odds_view::OddsView, settings_view::SettingsView,
    summary_view::SummaryView,
};

/// App configuration parameters.
#[derive(Debug, Default)]
pub struct Config {
    /// The initial deck settings.
    pub settings: DeckSettings,
}

/// The application state shared by all views.
#[derive(Debug)]
pub struct App {
    tracker: Tracker,
    snapshot: Snapshot,
    error: Option<String>,
}

/// Traits for UI views.
pub trait View {
    /// Process a view update.
    fn update(&mut self, ctx: &Context, app: &mut App);
}

/// The UI main frame.
pub struct AppFrame {
    app: App,
    views: Vec<Box<dyn View>>,
}

impl App {
    /// Creates the app state for the given settings.
    pub fn new(settings: DeckSettings) -> Result<Self> {
        let tracker = Tracker::new(settings)?;
        let snapshot = tracker.snapshot();

        Ok(Self {
            tracker,
            snapshot,
            error: None,
        })
    }

    /// The game tracker.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// The values to display, updated by [App::refresh].
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The last observe or settings error if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Observes a card.
    pub fn observe(&mut self, rank: &str, suit: &str) {
        if let Err(e) = self.tracker.observe(rank, suit) {
            error!("Observe error {e}");
            self.error = Some(e.to_string());
        }
    }

    /// Clears all seen cards and the last error.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.error = None;
    }

    /// Applies new deck settings, on error the previous settings are kept.
    pub fn configure(&mut self, settings: DeckSettings) {
        match self.tracker.configure(settings) {
            Ok(_) => self.error = None,
            Err(e) => {
                error!("Invalid settings {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Recomputes the snapshot if the tracker state has changed.
    pub fn refresh(&mut self) {
        if self.snapshot.version != self.tracker.version() {
            self.snapshot = self.tracker.snapshot();
        }
    }
}

impl AppFrame {
    /// The window size.
    pub const SIZE: Vec2 = vec2(1280.0, 720.0);

    /// Creates a new App instance.
    pub fn new(config: Config, cc: &eframe::CreationContext<'_>) -> Result<Self> {
        cc.egui_ctx.set_theme(Theme::Dark);

        info!("Creating new app with config: {config:?}");

        let settings_view = SettingsView::new(&config.settings);
        let app = App::new(config.settings)?;

        // The central panel must be added last.
        let views: Vec<Box<dyn View>> = vec![
            Box::new(settings_view),
            Box::new(OddsView),
            Box::new(SummaryView),
            Box::new(BoardView),
        ];

        Ok(AppFrame { app, views })
    }
}

impl eframe::App for AppFrame {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.app.refresh();

        for view in &mut self.views {
            view.update(ctx, &mut self.app);
        }
    }
}
