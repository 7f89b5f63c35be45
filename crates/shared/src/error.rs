use thiserror::Error;

/// Any failure to obtain donor data from the upstream directory.
///
/// The variants only shape the log line; every one of them leads to the
/// same outcome at the loader boundary.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("failed to reach user directory: {0}")]
    Transport(String),
    #[error("user directory returned status {status}")]
    Status { status: u16 },
    #[error("invalid user directory payload: {0}")]
    Decode(String),
}
