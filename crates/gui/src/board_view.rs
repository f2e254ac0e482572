// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards board view.
use eframe::egui::*;

use crate::gui::{App, View};

/// The cards grid, a row for each suit and a button for each rank.
pub struct BoardView;

impl BoardView {
    const CARD_SIZE: Vec2 = vec2(60.0, 50.0);
    const CORNER_RADIUS: f32 = 8.0;
    const COUNT_FONT: FontId = FontId::new(20.0, FontFamily::Proportional);
    const HIGHLIGHT: Color32 = Color32::from_rgb(240, 200, 40);
}

impl View for BoardView {
    fn update(&mut self, ctx: &Context, app: &mut App) {
        let mut clicked = None;

        CentralPanel::default().show(ctx, |ui| {
            let tracker = app.tracker();
            let config = tracker.config();

            if config.is_empty() {
                ui.label("No cards in the deck, check the deck settings.");
                return;
            }

            ScrollArea::both().show(ui, |ui| {
                for suit in config.suits() {
                    ui.heading(suit.as_str());

                    ui.horizontal(|ui| {
                        // Repeated ranks get a button for each position.
                        for (idx, rank) in config.sequence().iter().enumerate() {
                            let count = tracker.count(rank, suit).unwrap_or_default();
                            let is_last = tracker
                                .last_observed()
                                .is_some_and(|s| &s.rank == rank && &s.suit == suit);

                            ui.push_id((suit, idx), |ui| {
                                ui.vertical(|ui| {
                                    let btn = Button::new(rank.as_str());
                                    if ui.add_sized(Self::CARD_SIZE, btn).clicked() {
                                        clicked = Some((rank.clone(), suit.clone()));
                                    }

                                    paint_count(ui, count, is_last);
                                });
                            });
                        }
                    });

                    ui.add_space(6.0);
                }
            });
        });

        if let Some((rank, suit)) = clicked {
            app.observe(&rank, &suit);
            ctx.request_repaint();
        }
    }
}

fn paint_count(ui: &mut Ui, count: u32, is_last: bool) {
    let (rect, _) = ui.allocate_exact_size(BoardView::CARD_SIZE, Sense::hover());
    let painter = ui.painter();

    painter.rect_filled(rect, BoardView::CORNER_RADIUS, count_color(count));

    if is_last {
        painter.rect_stroke(
            rect,
            BoardView::CORNER_RADIUS,
            Stroke::new(3.0, BoardView::HIGHLIGHT),
            StrokeKind::Inside,
        );
    }

    if count > 0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            count.to_string(),
            BoardView::COUNT_FONT,
            Color32::BLACK,
        );
    }
}

/// The background color for a seen count.
///
/// Unseen cards are white, seen cards use a hue that moves by a tenth of the
/// color wheel for each count.
pub fn count_color(count: u32) -> Color32 {
    if count == 0 {
        return Color32::WHITE;
    }

    let hue = (count - 1) as f32 / 10.0;
    let [r, g, b] = ecolor::rgb_from_hsv((hue, 0.7, 0.9));
    Color32::from_rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
