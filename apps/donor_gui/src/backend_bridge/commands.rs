//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    LoadDonors,
}

impl BackendCommand {
    pub fn name(self) -> &'static str {
        match self {
            BackendCommand::LoadDonors => "load_donors",
        }
    }
}
