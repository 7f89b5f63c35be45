use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(DonorId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodGroup {
    /// Fixed assignment order; `for_donor` indexes into it.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
    ];

    /// Deterministic group for a donor id: `ALL[id mod 8]`.
    pub fn for_donor(id: DonorId) -> Self {
        let index = id.0.rem_euclid(Self::ALL.len() as i64) as usize;
        Self::ALL[index]
    }

    pub fn label(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BloodGroupFilter {
    #[default]
    All,
    Only(BloodGroup),
}

impl BloodGroupFilter {
    pub const ALL_SENTINEL: &'static str = "All";

    pub fn matches(self, group: BloodGroup) -> bool {
        match self {
            BloodGroupFilter::All => true,
            BloodGroupFilter::Only(selected) => selected == group,
        }
    }

    /// Selector label; the sentinel reads "All Blood Groups" in the picker.
    pub fn label(self) -> &'static str {
        match self {
            BloodGroupFilter::All => "All Blood Groups",
            BloodGroupFilter::Only(group) => group.label(),
        }
    }

    /// Selector options in display order, sentinel first.
    pub fn options() -> impl Iterator<Item = BloodGroupFilter> {
        std::iter::once(BloodGroupFilter::All)
            .chain(BloodGroup::ALL.into_iter().map(BloodGroupFilter::Only))
    }
}

impl fmt::Display for BloodGroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloodGroupFilter::All => f.write_str(Self::ALL_SENTINEL),
            BloodGroupFilter::Only(group) => group.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    pub id: DonorId,
    pub name: String,
    pub city: String,
    pub blood_group: BloodGroup,
    pub available: bool,
    pub request_sent: bool,
}

impl Donor {
    /// Whether the "Request Help" control accepts a click.
    pub fn can_request(&self) -> bool {
        self.available && !self.request_sent
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not Available"
        }
    }

    pub fn request_label(&self) -> &'static str {
        if self.request_sent {
            "Request Sent"
        } else {
            "Request Help"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub blood_group: BloodGroupFilter,
    pub search_city: String,
}

impl FilterCriteria {
    pub fn matches(&self, donor: &Donor) -> bool {
        self.blood_group.matches(donor.blood_group) && self.matches_city(&donor.city)
    }

    fn matches_city(&self, city: &str) -> bool {
        city.to_lowercase().contains(&self.search_city.to_lowercase())
    }
}
