//! Public models for the fake migration service.
//!
//! These are transport-agnostic data structures. Every profile field is
//! optional: an absent value is a legitimate outcome that simulates a sparse
//! upstream record.

use chrono::{DateTime, NaiveDate, Utc};

/// A synthetic user profile as returned by the migration API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub user_id: Option<String>,
    pub display_name: Option<String>,
    pub sex: Option<Sex>,
    pub locale: Option<String>,
    pub full_name: Option<String>,
    pub mobile_phone: Option<String>,
    pub home_phone: Option<String>,
    pub photo: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub time_zone: Option<String>,
    /// Absent rather than empty when no address was generated.
    pub addresses: Option<Vec<Address>>,
}

/// Sex as reported by the upstream system.
///
/// `Invalid` models the malformed value upstream occasionally sends; it is
/// rendered as a shrug emoticon rather than one of the enum literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
    Undisclosed,
    Invalid,
}

impl Sex {
    /// Wire representation of [`Sex::Invalid`]: `¯\_(ツ)_/¯`.
    pub const INVALID_SENTINEL: &'static str = "\u{af}\\_(\u{30c4})_/\u{af}";

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Female => "FEMALE",
            Sex::Male => "MALE",
            Sex::Undisclosed => "UNDISCLOSED",
            Sex::Invalid => Self::INVALID_SENTINEL,
        }
    }
}

/// Postal address attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub address_type: Option<AddressType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Home,
    Delivery,
    Work,
}

impl AddressType {
    /// Candidate order used when picking address types for a profile.
    pub const ALL: [AddressType; 3] = [AddressType::Home, AddressType::Delivery, AddressType::Work];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AddressType::Home => "HOME",
            AddressType::Delivery => "DELIVERY",
            AddressType::Work => "WORK",
        }
    }
}
