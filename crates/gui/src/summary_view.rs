// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seen cards summary panel.
use eframe::egui::*;

use hilo_core::RankSummary;

use crate::gui::{App, View};

/// Shows the total seen cards and the seen counts for each rank.
pub struct SummaryView;

impl View for SummaryView {
    fn update(&mut self, ctx: &Context, app: &mut App) {
        let snapshot = app.snapshot();

        TopBottomPanel::bottom("summary")
            .resizable(false)
            .min_height(80.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Seen Card Summary");
                ui.label(
                    RichText::new(format!("Total cards seen: {}", snapshot.total_seen)).strong(),
                );

                ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                    for summary in &snapshot.seen_by_rank {
                        ui.label(summary_line(summary));
                    }
                });
            });
    }
}

/// Formats a rank summary as `rank: suit=count, ...`.
pub fn summary_line(summary: &RankSummary) -> String {
    let counts = summary
        .counts
        .iter()
        .map(|(suit, count)| format!("{suit}={count}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!("- {}: {counts}", summary.rank)
}
