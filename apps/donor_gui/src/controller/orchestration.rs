//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use thiserror::Error;

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("UI command queue is full")]
    QueueFull,
    #[error("backend command processor disconnected (possible startup/runtime failure)")]
    Disconnected,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(DispatchError::QueueFull),
        Err(TrySendError::Disconnected(_)) => Err(DispatchError::Disconnected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn queues_command_when_backend_is_listening() {
        let (tx, rx) = bounded(1);
        assert_eq!(
            dispatch_backend_command(&tx, BackendCommand::LoadDonors),
            Ok(())
        );
        assert_eq!(rx.try_recv(), Ok(BackendCommand::LoadDonors));
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, BackendCommand::LoadDonors).expect("first send");
        assert_eq!(
            dispatch_backend_command(&tx, BackendCommand::LoadDonors),
            Err(DispatchError::QueueFull)
        );
    }

    #[test]
    fn reports_disconnected_backend() {
        let (tx, rx) = bounded(1);
        drop(rx);
        assert_eq!(
            dispatch_backend_command(&tx, BackendCommand::LoadDonors),
            Err(DispatchError::Disconnected)
        );
    }
}
