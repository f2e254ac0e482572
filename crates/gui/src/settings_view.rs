// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck settings side panel.
use eframe::egui::*;

use hilo_core::{CARD_ORDER, DEFAULT_SUITS, DeckSettings, MAX_DECKS, RankSource, SuitSource};

use crate::gui::{App, View};

const TEXT_FONT: FontId = FontId::new(15.0, FontFamily::Proportional);

/// The deck settings controls.
#[derive(Debug)]
pub struct SettingsView {
    num_decks: u32,
    use_custom_deck: bool,
    custom_deck: String,
    start: usize,
    end: usize,
    use_custom_suits: bool,
    custom_suits: String,
    /// The settings last sent to the app.
    committed: DeckSettings,
}

impl SettingsView {
    /// Creates the controls state from the initial settings.
    pub fn new(settings: &DeckSettings) -> Self {
        let mut view = Self {
            num_decks: settings.num_decks.clamp(1, MAX_DECKS),
            use_custom_deck: false,
            custom_deck: CARD_ORDER.join(","),
            start: 0,
            end: CARD_ORDER.len() - 1,
            use_custom_suits: false,
            custom_suits: DEFAULT_SUITS.join(","),
            committed: settings.clone(),
        };

        match &settings.ranks {
            RankSource::Range { start, end } => {
                view.start = card_index(start).unwrap_or(view.start);
                view.end = card_index(end).unwrap_or(view.end);
            }
            RankSource::Custom(text) => {
                view.use_custom_deck = true;
                view.custom_deck = text.clone();
            }
        }

        if let SuitSource::Custom(text) = &settings.suits {
            view.use_custom_suits = true;
            view.custom_suits = text.clone();
        }

        view.committed = view.settings();
        view
    }

    /// The settings for the current controls state.
    pub fn settings(&self) -> DeckSettings {
        let ranks = if self.use_custom_deck {
            RankSource::Custom(self.custom_deck.clone())
        } else {
            RankSource::Range {
                start: CARD_ORDER[self.start].to_string(),
                end: CARD_ORDER[self.end].to_string(),
            }
        };

        let suits = if self.use_custom_suits {
            SuitSource::Custom(self.custom_suits.clone())
        } else {
            SuitSource::Standard
        };

        DeckSettings {
            num_decks: self.num_decks,
            ranks,
            suits,
        }
    }

    /// Returns the current settings if they differ from the last committed.
    fn commit(&mut self) -> Option<DeckSettings> {
        let settings = self.settings();
        if settings == self.committed {
            return None;
        }

        self.committed = settings.clone();
        Some(settings)
    }
}

impl View for SettingsView {
    fn update(&mut self, ctx: &Context, app: &mut App) {
        let mut changed = false;

        SidePanel::left("deck_settings")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Deck Settings");
                ui.separator();

                ui.label(RichText::new("Number of Decks").font(TEXT_FONT));
                changed |= ui
                    .add(Slider::new(&mut self.num_decks, 1..=MAX_DECKS))
                    .changed();
                ui.separator();

                changed |= ui
                    .checkbox(&mut self.use_custom_deck, "Use a custom deck")
                    .changed();

                if self.use_custom_deck {
                    ui.label("Custom Deck (comma-separated, e.g., 2,3,4,5,6,J,Q,K,A)");
                    // Text is applied on enter or when the field loses focus.
                    changed |= ui.text_edit_singleline(&mut self.custom_deck).lost_focus();
                } else {
                    changed |= rank_combo(ui, "Start Card", &mut self.start);
                    changed |= rank_combo(ui, "End Card", &mut self.end);
                }

                ui.separator();

                changed |= ui
                    .checkbox(&mut self.use_custom_suits, "Use custom suits")
                    .changed();

                if self.use_custom_suits {
                    ui.label("Custom Suits (comma-separated, e.g., ♠,♥,♦,♣ or S,H,D,C)");
                    changed |= ui.text_edit_singleline(&mut self.custom_suits).lost_focus();
                }

                ui.separator();

                if ui
                    .button(RichText::new("Reset Seen Cards").font(TEXT_FONT))
                    .clicked()
                {
                    app.reset();
                }

                if let Some(error) = app.error() {
                    ui.add_space(10.0);
                    ui.label(RichText::new(error).color(Color32::RED));
                }
            });

        if changed {
            if let Some(settings) = self.commit() {
                app.configure(settings);
            }
        }
    }
}

fn rank_combo(ui: &mut Ui, label: &str, selected: &mut usize) -> bool {
    let mut changed = false;

    ComboBox::from_label(label)
        .selected_text(CARD_ORDER[*selected])
        .show_ui(ui, |ui| {
            for (idx, rank) in CARD_ORDER.iter().enumerate() {
                changed |= ui.selectable_value(selected, idx, *rank).changed();
            }
        });

    changed
}

fn card_index(label: &str) -> Option<usize> {
    CARD_ORDER.iter().position(|r| r.eq_ignore_ascii_case(label.trim()))
}
