use fake_migration_sdk::models::{Address, UserProfile};
use serde::{Deserialize, Serialize};

/// Wire format of `createdTime`: UTC with millisecond precision.
pub const CREATED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
/// Wire format of `birthday`.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// REST representation of a profile. Absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<AddressDto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

impl HealthDto {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }
}

impl From<UserProfile> for UserProfileDto {
    fn from(p: UserProfile) -> Self {
        Self {
            email: p.email,
            birthday: p.birthday.map(|d| d.format(BIRTHDAY_FORMAT).to_string()),
            user_id: p.user_id,
            display_name: p.display_name,
            sex: p.sex.map(|s| s.as_str().to_owned()),
            locale: p.locale,
            full_name: p.full_name,
            mobile_phone: p.mobile_phone,
            home_phone: p.home_phone,
            photo: p.photo,
            created_time: p
                .created_time
                .map(|t| t.format(CREATED_TIME_FORMAT).to_string()),
            time_zone: p.time_zone,
            addresses: p
                .addresses
                .map(|list| list.into_iter().map(AddressDto::from).collect()),
        }
    }
}

impl From<Address> for AddressDto {
    fn from(a: Address) -> Self {
        Self {
            street_address: a.street_address,
            postal_code: a.postal_code,
            country: a.country,
            locality: a.locality,
            region: a.region,
            address_type: a.address_type.map(|t| t.as_str().to_owned()),
        }
    }
}
