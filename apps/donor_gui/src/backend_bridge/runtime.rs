//! Backend worker: owns the tokio runtime and the donor loader, and reports
//! fetch outcomes back to the UI thread.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use donor_core::DefaultDonorLoader;
use shared::error::FetchFailure;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    directory_url: String,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::DonorsLoaded(Err(FetchFailure::Transport(
                    format!("backend worker startup failure: {err}"),
                ))));
                return;
            }
        };

        runtime.block_on(async move {
            let mut loader = DefaultDonorLoader::for_endpoint(directory_url);
            tracing::info!(
                endpoint = loader.directory().endpoint(),
                "backend worker ready"
            );
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadDonors => {
                        let outcome = loader.fetch_donors().await;
                        if ui_tx.send(UiEvent::DonorsLoaded(outcome)).is_err() {
                            tracing::debug!("ui event channel closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
    })
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
