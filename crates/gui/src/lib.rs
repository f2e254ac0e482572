// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hilo Higher or Lower odds tracker GUI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod board_view;
pub mod odds_view;
pub mod settings_view;
pub mod summary_view;

pub mod gui;
pub use gui::{App, AppFrame, Config, View};
