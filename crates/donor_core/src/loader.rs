use rand::rngs::StdRng;
use shared::{
    domain::{BloodGroup, Donor},
    error::FetchFailure,
    protocol::DirectoryUser,
};

use crate::{
    availability::{AvailabilitySource, RandomAvailability},
    directory::{HttpUserDirectory, UserDirectory},
    state::DonorState,
};

pub type DefaultDonorLoader = DonorLoader<HttpUserDirectory, RandomAvailability<StdRng>>;

/// Fetches the user directory and turns each record into a [`Donor`].
pub struct DonorLoader<D, A> {
    directory: D,
    availability: A,
}

impl DefaultDonorLoader {
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self::new(
            HttpUserDirectory::new(endpoint),
            RandomAvailability::from_entropy(),
        )
    }
}

impl<D, A> DonorLoader<D, A>
where
    D: UserDirectory,
    A: AvailabilitySource,
{
    pub fn new(directory: D, availability: A) -> Self {
        Self {
            directory,
            availability,
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// One directory round trip, mapped to donors in upstream order.
    pub async fn fetch_donors(&mut self) -> Result<Vec<Donor>, FetchFailure> {
        let users = self.directory.fetch_users().await?;
        Ok(users
            .into_iter()
            .map(|user| self.donor_from_user(user))
            .collect())
    }

    /// Fetches and applies the outcome to `state`. `loading` is cleared on
    /// every exit path; a failure is logged and leaves the collection as is.
    pub async fn load(&mut self, state: &mut DonorState) {
        let guard = state.begin_load();
        let outcome = self.fetch_donors().await;
        guard.settle(outcome);
    }

    fn donor_from_user(&mut self, user: DirectoryUser) -> Donor {
        Donor {
            id: user.id,
            name: user.name,
            city: user.address.city,
            blood_group: BloodGroup::for_donor(user.id),
            available: self.availability.next_available(),
            request_sent: false,
        }
    }
}
