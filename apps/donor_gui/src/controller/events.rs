//! Backend-to-UI events.

use shared::{domain::Donor, error::FetchFailure};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    DonorsLoaded(Result<Vec<Donor>, FetchFailure>),
}
