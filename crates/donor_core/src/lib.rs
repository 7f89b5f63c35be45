//! Donor data pipeline: directory fetch, donor mapping, filtered view, and
//! the local "request sent" mutation.

pub mod availability;
pub mod directory;
pub mod loader;
pub mod state;

pub use availability::{AvailabilitySource, RandomAvailability, AVAILABILITY_PROBABILITY};
pub use directory::{HttpUserDirectory, UserDirectory, DEFAULT_DIRECTORY_URL};
pub use loader::{DefaultDonorLoader, DonorLoader};
pub use state::{handle_request, DonorState, DonorSummary, LoadingGuard};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
