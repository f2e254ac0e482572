// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds side panel.
use eframe::egui::*;

use crate::gui::{App, View};

const TEXT_FONT: FontId = FontId::new(16.0, FontFamily::Monospace);
const TEXT_COLOR: Color32 = Color32::from_rgb(20, 150, 20);

/// Shows the next card odds for the last observed card.
pub struct OddsView;

impl View for OddsView {
    fn update(&mut self, ctx: &Context, app: &mut App) {
        let snapshot = app.snapshot();

        SidePanel::right("odds")
            .resizable(false)
            .min_width(240.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);

                let Some(slot) = &snapshot.last_observed else {
                    ui.label("Click a card to calculate odds.");
                    return;
                };

                ui.heading(format!("Last Clicked Card: {slot}"));
                ui.add_space(10.0);

                if let Some(odds) = snapshot.rank_odds {
                    odds_row(ui, "Higher", odds.higher);
                    odds_row(ui, "Lower", odds.lower);
                    odds_row(ui, "Equal", odds.equal);
                }

                if let Some(suit_odds) = &snapshot.suit_odds {
                    ui.add_space(10.0);
                    ui.heading("Suit Probabilities:");
                    for (suit, pct) in suit_odds.iter() {
                        odds_row(ui, suit, pct);
                    }
                }
            });
    }
}

fn odds_row(ui: &mut Ui, label: &str, pct: f64) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{label:<8}")).font(TEXT_FONT));
        ui.label(
            RichText::new(format!("{pct:>6.2}%"))
                .font(TEXT_FONT)
                .color(TEXT_COLOR),
        );
    });
}
