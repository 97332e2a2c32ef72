//! Address list generation for a profile.

use fake_migration_sdk::models::{Address, AddressType};
use rand::{Rng, RngCore};

use super::person::PersonSource;

/// Pick the address types for one profile.
///
/// The prefix length is drawn from `{0, 1}` only, so `DELIVERY` and `WORK`
/// never appear. Consumers were built against this behavior; keep it.
pub fn address_types(rng: &mut dyn RngCore) -> impl Iterator<Item = AddressType> + use<> {
    let len = rng.random_range(0..=1_usize);
    AddressType::ALL.into_iter().take(len)
}

/// Generate the address list; `None` when no address was selected.
pub fn generate_addresses(
    source: &dyn PersonSource,
    country: &str,
    rng: &mut dyn RngCore,
) -> Option<Vec<Address>> {
    let types: Vec<AddressType> = address_types(rng).collect();
    let addresses: Vec<Address> = types
        .into_iter()
        .map(|address_type| create_address(source, address_type, country, rng))
        .collect();

    if addresses.is_empty() {
        None
    } else {
        Some(addresses)
    }
}

fn create_address(
    source: &dyn PersonSource,
    address_type: AddressType,
    country: &str,
    rng: &mut dyn RngCore,
) -> Address {
    let fake = source.address(rng);
    Address {
        street_address: Some(format!("{} {}", fake.street, fake.street_number)),
        postal_code: Some(fake.postal_code),
        country: Some(country.to_owned()),
        locality: Some(fake.city.clone()),
        region: Some(fake.city),
        address_type: Some(address_type),
    }
}
