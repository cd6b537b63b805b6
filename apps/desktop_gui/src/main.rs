mod backend_bridge;
mod config;
mod controller;
mod ui;

use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::UserDirectoryApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let startup = config::load_startup_config();
    tracing::info!("user directory endpoint: {}", startup.api_base_url);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(startup.api_base_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("User Management")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([840.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "User Management",
        options,
        Box::new(|_cc| Ok(Box::new(UserDirectoryApp::new(cmd_tx, ui_rx)))),
    )
}
