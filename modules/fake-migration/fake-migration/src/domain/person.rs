//! Source of realistic base values for generated profiles.

use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

/// Base values for one fake person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakePerson {
    pub full_name: String,
    pub username: String,
    pub national_id: String,
    pub birthday: NaiveDate,
    /// Hyphenated local format, e.g. `555-123-456`. Never `+`-prefixed.
    pub telephone: String,
    pub company_url: String,
}

/// Base values for one postal address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeAddress {
    pub street: String,
    pub street_number: String,
    pub postal_code: String,
    pub city: String,
}

/// Produces realistic names, phones, addresses and birthdates on demand.
///
/// The realism of the values is not part of the contract; the profile
/// generator only relies on the shapes documented on [`FakePerson`].
pub trait PersonSource: Send + Sync {
    fn person(&self, rng: &mut dyn RngCore) -> FakePerson;

    fn address(&self, rng: &mut dyn RngCore) -> FakeAddress;
}

/// [`PersonSource`] backed by static word lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogPersonSource;

const MIN_BIRTH_YEAR: i32 = 1940;
const MAX_BIRTH_YEAR: i32 = 2005;

impl CatalogPersonSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn pick(words: &'static [&'static str], rng: &mut dyn RngCore) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

fn birthday(rng: &mut dyn RngCore) -> NaiveDate {
    let year = rng.random_range(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR);
    let ordinal = rng.random_range(1..=365_u32);
    NaiveDate::from_yo_opt(year, ordinal).unwrap_or_default()
}

fn telephone(rng: &mut dyn RngCore) -> String {
    format!(
        "{:03}-{:03}-{:03}",
        rng.random_range(100..1000_u32),
        rng.random_range(0..1000_u32),
        rng.random_range(0..1000_u32)
    )
}

impl PersonSource for CatalogPersonSource {
    fn person(&self, rng: &mut dyn RngCore) -> FakePerson {
        let first = pick(FIRST_NAMES, rng);
        let last = pick(LAST_NAMES, rng);
        let initial = last
            .chars()
            .next()
            .map_or('x', |c| c.to_ascii_lowercase());
        let username = format!(
            "{}{initial}{:02}",
            first.to_ascii_lowercase(),
            rng.random_range(0..100_u32)
        );

        FakePerson {
            full_name: format!("{first} {last}"),
            username,
            national_id: format!("{:011}", rng.random_range(0..100_000_000_000_u64)),
            birthday: birthday(rng),
            telephone: telephone(rng),
            company_url: format!("http://www.{}.com", pick(COMPANIES, rng)),
        }
    }

    fn address(&self, rng: &mut dyn RngCore) -> FakeAddress {
        FakeAddress {
            street: pick(STREETS, rng).to_owned(),
            street_number: rng.random_range(1..1000_u32).to_string(),
            postal_code: format!("{:05}", rng.random_range(501..100_000_u32)),
            city: pick(CITIES, rng).to_owned(),
        }
    }
}

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alice", "Amelia", "Andrew", "Anna", "Benjamin", "Charlotte",
    "Chloe", "Daniel", "David", "Eleanor", "Elijah", "Emily", "Emma", "Ethan", "Grace", "Hannah",
    "Henry", "Isabella", "Jack", "Jacob", "James", "Jane", "John", "Julia", "Liam", "Lucas",
    "Madison", "Mason", "Mia", "Noah", "Olivia", "Owen", "Samuel", "Sophia", "Thomas", "William",
    "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Anderson", "Baker", "Brown", "Campbell", "Carter", "Clark", "Davis", "Doe",
    "Evans", "Garcia", "Green", "Hall", "Harris", "Hill", "Jackson", "Johnson", "Jones", "King",
    "Lee", "Lewis", "Martin", "Miller", "Mitchell", "Moore", "Nelson", "Parker", "Roberts",
    "Robinson", "Scott", "Smith", "Taylor", "Thomas", "Thompson", "Turner", "Walker", "White",
    "Williams", "Wright",
];

const STREETS: &[&str] = &[
    "Ash Street", "Birch Road", "Broadway", "Cedar Lane", "Cherry Street", "Church Street",
    "Elm Street", "Forest Avenue", "Highland Avenue", "Hillside Drive", "Lake Street",
    "Lincoln Avenue", "Main Street", "Maple Avenue", "Meadow Lane", "Mill Road", "Oak Street",
    "Park Avenue", "Pine Street", "River Road", "Spring Street", "Sunset Boulevard",
    "Walnut Street", "Washington Street", "Willow Lane",
];

const CITIES: &[&str] = &[
    "Arlington", "Ashland", "Bristol", "Burlington", "Clayton", "Clinton", "Dayton", "Dover",
    "Fairview", "Franklin", "Georgetown", "Greenville", "Hudson", "Jackson", "Kingston", "Lebanon",
    "Madison", "Marion", "Milford", "Newport", "Oxford", "Riverside", "Salem", "Springfield",
    "Winchester",
];

const COMPANIES: &[&str] = &[
    "acme", "globex", "initech", "umbrella", "hooli", "vandelay", "soylent", "stark", "wayne",
    "wonka", "tyrell", "cyberdyne", "massive", "oscorp", "gringotts",
];
