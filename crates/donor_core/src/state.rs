use std::ops::Deref;

use shared::{
    domain::{BloodGroupFilter, Donor, DonorId, FilterCriteria},
    error::FetchFailure,
};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DonorSummary {
    pub total: usize,
    pub available: usize,
}

/// The single owned UI state record: the donor collection, the loading flag,
/// and the current filter criteria.
///
/// The collection only changes through a load outcome (see [`LoadingGuard`])
/// or [`DonorState::handle_request`]. The filtered view is computed on every
/// read and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorState {
    donors: Vec<Donor>,
    loading: bool,
    pub criteria: FilterCriteria,
}

impl Default for DonorState {
    fn default() -> Self {
        Self::new()
    }
}

impl DonorState {
    /// Fresh session state. Starts out loading since the directory fetch is
    /// kicked off at startup.
    pub fn new() -> Self {
        Self {
            donors: Vec::new(),
            loading: true,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_blood_group(&mut self, filter: BloodGroupFilter) {
        debug!(blood_group = %filter, "blood group filter changed");
        self.criteria.blood_group = filter;
    }

    pub fn set_search_city(&mut self, search: impl Into<String>) {
        self.criteria.search_city = search.into();
    }

    /// Marks the state as loading until the returned guard is dropped.
    pub fn begin_load(&mut self) -> LoadingGuard<'_> {
        self.loading = true;
        LoadingGuard { state: self }
    }

    /// Applies a fetch outcome produced elsewhere (e.g. on a worker thread).
    pub fn apply_load_outcome(&mut self, outcome: Result<Vec<Donor>, FetchFailure>) {
        self.begin_load().settle(outcome);
    }

    pub fn filtered_donors(&self) -> Vec<&Donor> {
        self.donors
            .iter()
            .filter(|donor| self.criteria.matches(donor))
            .collect()
    }

    pub fn available_count(&self) -> usize {
        count_available(&self.filtered_donors())
    }

    pub fn summary(&self) -> DonorSummary {
        let filtered = self.filtered_donors();
        DonorSummary {
            total: filtered.len(),
            available: count_available(&filtered),
        }
    }

    /// Whether the empty-state message should be shown.
    pub fn shows_empty_state(&self) -> bool {
        !self.loading && self.filtered_donors().is_empty()
    }

    pub fn handle_request(&mut self, id: DonorId) {
        self.donors = handle_request(&self.donors, id);
    }
}

fn count_available(donors: &[&Donor]) -> usize {
    donors.iter().filter(|donor| donor.available).count()
}

/// Keeps `loading` set for its lifetime and clears it on drop, whatever path
/// the load takes out of scope.
pub struct LoadingGuard<'a> {
    state: &'a mut DonorState,
}

impl LoadingGuard<'_> {
    fn replace_donors(&mut self, donors: Vec<Donor>) {
        self.state.donors = donors;
    }

    /// Success replaces the collection; failure is logged and leaves it as is.
    pub fn settle(mut self, outcome: Result<Vec<Donor>, FetchFailure>) {
        match outcome {
            Ok(donors) => {
                info!(count = donors.len(), "loaded donors from directory");
                self.replace_donors(donors);
            }
            Err(err) => error!("Error fetching donors: {err}"),
        }
    }
}

impl Deref for LoadingGuard<'_> {
    type Target = DonorState;

    fn deref(&self) -> &Self::Target {
        &*self.state
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.loading = false;
    }
}

/// Returns a copy of `donors` with `request_sent` set on the donor matching
/// `id`. An unknown id yields an unchanged copy.
pub fn handle_request(donors: &[Donor], id: DonorId) -> Vec<Donor> {
    if !donors.iter().any(|donor| donor.id == id) {
        warn!(donor_id = id.0, "request for unknown donor ignored");
        return donors.to_vec();
    }

    debug!(donor_id = id.0, "marking donor request as sent");
    donors
        .iter()
        .map(|donor| {
            if donor.id == id {
                Donor {
                    request_sent: true,
                    ..donor.clone()
                }
            } else {
                donor.clone()
            }
        })
        .collect()
}
