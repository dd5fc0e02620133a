mod app;
mod color;
mod config;
mod data;
mod series;
mod state;
mod ui;

use anyhow::{Result, anyhow};
use app::ClusterScatterApp;
use color::ClusterPalette;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_args(std::env::args().skip(1))?;

    // Any load error ends the run here, before a window exists.
    let mut state = AppState::new(config.clone(), ClusterPalette::reds());
    state.load(&config.data_path)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Cluster Scatter",
        options,
        Box::new(move |_cc| Ok(Box::new(ClusterScatterApp::new(state)))),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
