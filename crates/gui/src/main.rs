// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    use hilo_core::{DeckSettings, RankSource, SuitSource};

    #[derive(Debug, Parser)]
    struct Cli {
        /// The number of shuffled decks.
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=i64::from(hilo_core::MAX_DECKS)))]
        decks: u32,
        /// A comma separated custom ranks list, lowest first.
        #[arg(long, short)]
        ranks: Option<String>,
        /// A comma separated custom suits list.
        #[arg(long, short)]
        suits: Option<String>,
    }

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let init_size = hilo_gui::AppFrame::SIZE;
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(init_size)
            .with_min_inner_size([800.0, 480.0])
            .with_title("Higher / Lower Odds"),
        ..Default::default()
    };

    let cli = Cli::parse();

    let config = hilo_gui::Config {
        settings: DeckSettings {
            num_decks: cli.decks,
            ranks: cli.ranks.map(RankSource::Custom).unwrap_or_default(),
            suits: cli.suits.map(SuitSource::Custom).unwrap_or_default(),
        },
    };

    eframe::run_native(
        "hilo",
        native_options,
        Box::new(|cc| Ok(Box::new(hilo_gui::AppFrame::new(config, cc)?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("canvas")
            .expect("Failed to find canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("canvas was not a HtmlCanvasElement");

        let config = hilo_gui::Config::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                Default::default(),
                Box::new(|cc| Ok(Box::new(hilo_gui::AppFrame::new(config, cc)?))),
            )
            .await
            .expect("failed to start eframe");
    });
}
