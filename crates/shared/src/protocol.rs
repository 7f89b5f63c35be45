use serde::{Deserialize, Serialize};

use crate::domain::DonorId;

/// Minimal shape of one record returned by the upstream user directory.
/// Any other fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: DonorId,
    pub name: String,
    pub address: DirectoryAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryAddress {
    pub city: String,
}
