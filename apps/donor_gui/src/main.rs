use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::anyhow;
use backend_bridge::commands::BackendCommand;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::{app::APP_TITLE, DonorFinderApp};

#[derive(Parser, Debug)]
#[command(name = "donor_gui", about = "Find available blood donors by group and city")]
struct Args {
    /// Overrides the user directory endpoint from file and environment.
    #[arg(long)]
    directory_url: Option<String>,
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(&args.config);
    if let Some(url) = args.directory_url.filter(|url| !url.trim().is_empty()) {
        settings.directory_url = url;
    }

    let env_filter =
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let endpoint = config::validate_directory_url(&settings.directory_url)?;
    tracing::info!(directory_url = %endpoint, "starting donor finder");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, endpoint.to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(DonorFinderApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("donor finder window failed: {err}"))
}
