//! Weighted fake-profile generation.
//!
//! Every field is decided independently: a tag either forces a deterministic
//! override, or the field is drawn from its own distribution. No field looks
//! at another field's sampled value.

use std::sync::Arc;

use chrono::Utc;
use fake_migration_sdk::models::{Sex, UserProfile};
use rand::{Rng, RngCore};

use super::addresses::generate_addresses;
use super::catalog::Catalog;
use super::person::PersonSource;
use super::tags::{Tag, TagSet};

pub const INVALID_LOCALE: &str = "Not a locale, obviously";
pub const INVALID_TIME_ZONE: &str = "Not a timezone, obviously";

/// Percent of profiles that carry a locale.
const LOCALE_PERCENT: u32 = 21;
/// Percent of profiles that carry a timezone.
const TIME_ZONE_PERCENT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Prepended to the email when `modifyemail` is requested.
    pub modify_email_marker: String,
    /// Country of every generated address.
    pub country: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            modify_email_marker: "xxx".to_owned(),
            country: "USA".to_owned(),
        }
    }
}

pub struct ProfileGenerator {
    source: Arc<dyn PersonSource>,
    catalog: &'static Catalog,
    settings: GeneratorSettings,
}

impl ProfileGenerator {
    #[must_use]
    pub fn new(
        source: Arc<dyn PersonSource>,
        catalog: &'static Catalog,
        settings: GeneratorSettings,
    ) -> Self {
        Self {
            source,
            catalog,
            settings,
        }
    }

    /// Build one profile for `email` under the given scenario tags.
    ///
    /// The `notfound` tag is not interpreted here; callers short-circuit
    /// before asking for a profile.
    pub fn generate(&self, email: &str, tags: &TagSet, rng: &mut dyn RngCore) -> UserProfile {
        let person = self.source.person(rng);
        let phone = phone(&person.telephone, tags.contains(&Tag::InvalidPhone));

        UserProfile {
            email: Some(modify_email(
                email,
                &self.settings.modify_email_marker,
                tags.contains(&Tag::ModifyEmail),
            )),
            birthday: Some(person.birthday),
            user_id: Some(person.national_id),
            display_name: Some(person.username),
            sex: sex(tags.contains(&Tag::InvalidSex), rng),
            locale: locale(tags.contains(&Tag::InvalidLocale), self.catalog, rng),
            full_name: Some(person.full_name),
            mobile_phone: Some(phone.clone()),
            home_phone: Some(phone),
            photo: Some(person.company_url),
            created_time: Some(Utc::now()),
            time_zone: time_zone(tags.contains(&Tag::InvalidTimezone), self.catalog, rng),
            addresses: generate_addresses(self.source.as_ref(), &self.settings.country, rng),
        }
    }
}

fn percent(rng: &mut dyn RngCore) -> u32 {
    rng.random_range(0..100)
}

#[must_use]
pub fn modify_email(email: &str, marker: &str, modify: bool) -> String {
    if modify {
        format!("{marker}{email}")
    } else {
        email.to_owned()
    }
}

/// 25% each of female, male, undisclosed and absent.
pub fn sex(invalid: bool, rng: &mut dyn RngCore) -> Option<Sex> {
    if invalid {
        return Some(Sex::Invalid);
    }
    match percent(rng) {
        0..25 => Some(Sex::Female),
        25..50 => Some(Sex::Male),
        50..75 => Some(Sex::Undisclosed),
        _ => None,
    }
}

pub fn locale(invalid: bool, catalog: &Catalog, rng: &mut dyn RngCore) -> Option<String> {
    if invalid {
        return Some(INVALID_LOCALE.to_owned());
    }
    if percent(rng) < LOCALE_PERCENT {
        catalog.random_locale(rng).map(str::to_owned)
    } else {
        None
    }
}

pub fn time_zone(invalid: bool, catalog: &Catalog, rng: &mut dyn RngCore) -> Option<String> {
    if invalid {
        return Some(INVALID_TIME_ZONE.to_owned());
    }
    if percent(rng) < TIME_ZONE_PERCENT {
        catalog.random_time_zone(rng).map(str::to_owned)
    } else {
        None
    }
}

/// Canonical form is `+` followed by the number without hyphens; the
/// `invalidphone` scenario returns the raw hyphenated value instead.
#[must_use]
pub fn phone(raw: &str, invalid: bool) -> String {
    if invalid {
        raw.to_owned()
    } else {
        format!("+{}", raw.replace('-', ""))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::person::{CatalogPersonSource, FakeAddress, FakePerson};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FixedPersonSource;

    impl PersonSource for FixedPersonSource {
        fn person(&self, _rng: &mut dyn RngCore) -> FakePerson {
            FakePerson {
                full_name: "Jane Doe".to_owned(),
                username: "janed42".to_owned(),
                national_id: "12345678901".to_owned(),
                birthday: NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
                telephone: "555-123-456".to_owned(),
                company_url: "http://www.acme.com".to_owned(),
            }
        }

        fn address(&self, _rng: &mut dyn RngCore) -> FakeAddress {
            FakeAddress {
                street: "Main Street".to_owned(),
                street_number: "12".to_owned(),
                postal_code: "01234".to_owned(),
                city: "Springfield".to_owned(),
            }
        }
    }

    fn generator(source: Arc<dyn PersonSource>) -> ProfileGenerator {
        ProfileGenerator::new(source, Catalog::builtin(), GeneratorSettings::default())
    }

    #[test]
    fn invalid_sex_dominates_every_seed() {
        let generator = generator(Arc::new(CatalogPersonSource));
        let tags = TagSet::parse("u+invalidsex@x.com");
        for seed in 0..200 {
            let profile = generator.generate("u@x.com", &tags, &mut StdRng::seed_from_u64(seed));
            assert_eq!(profile.sex, Some(Sex::Invalid));
        }
    }

    #[test]
    fn invalid_locale_and_timezone_use_sentinels() {
        let generator = generator(Arc::new(CatalogPersonSource));
        let tags = TagSet::parse("u+invalidlocale-invalidtimezone@x.com");
        for seed in 0..50 {
            let profile = generator.generate("u@x.com", &tags, &mut StdRng::seed_from_u64(seed));
            assert_eq!(profile.locale.as_deref(), Some(INVALID_LOCALE));
            assert_eq!(profile.time_zone.as_deref(), Some(INVALID_TIME_ZONE));
        }
    }

    #[test]
    fn phones_mirror_and_are_normalized() {
        let generator = generator(Arc::new(FixedPersonSource));
        let mut rng = StdRng::seed_from_u64(0);

        let profile = generator.generate("u@x.com", &TagSet::default(), &mut rng);
        assert_eq!(profile.mobile_phone.as_deref(), Some("+555123456"));
        assert_eq!(profile.mobile_phone, profile.home_phone);

        let tags = TagSet::parse("u+invalidphone@x.com");
        let profile = generator.generate("u+invalidphone@x.com", &tags, &mut rng);
        assert_eq!(profile.mobile_phone.as_deref(), Some("555-123-456"));
        assert_eq!(profile.mobile_phone, profile.home_phone);
    }

    #[test]
    fn phones_from_catalog_source_follow_the_same_rules() {
        let generator = generator(Arc::new(CatalogPersonSource));
        let invalid = TagSet::parse("u+invalidphone@x.com");
        for seed in 0..100 {
            let profile =
                generator.generate("u@x.com", &TagSet::default(), &mut StdRng::seed_from_u64(seed));
            let phone = profile.mobile_phone.unwrap();
            assert!(phone.starts_with('+'));
            assert!(!phone.contains('-'));
            assert_eq!(profile.home_phone.as_deref(), Some(phone.as_str()));

            let profile = generator.generate("u@x.com", &invalid, &mut StdRng::seed_from_u64(seed));
            let phone = profile.mobile_phone.unwrap();
            assert!(!phone.starts_with('+'));
            assert!(phone.contains('-'));
            assert_eq!(profile.home_phone.as_deref(), Some(phone.as_str()));
        }
    }

    #[test]
    fn modify_email_prefixes_marker() {
        let generator = generator(Arc::new(FixedPersonSource));
        let email = "a.b+modifyemail@ex.com";
        let profile = generator.generate(
            email,
            &TagSet::parse(email),
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(profile.email.as_deref(), Some("xxxa.b+modifyemail@ex.com"));

        let profile = generator.generate(
            "a.b@ex.com",
            &TagSet::default(),
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(profile.email.as_deref(), Some("a.b@ex.com"));
    }

    #[test]
    fn custom_marker_and_country_are_used() {
        let generator = ProfileGenerator::new(
            Arc::new(FixedPersonSource),
            Catalog::builtin(),
            GeneratorSettings {
                modify_email_marker: "changed.".to_owned(),
                country: "NOR".to_owned(),
            },
        );
        let tags = TagSet::parse("u+modifyemail@x.com");
        let mut rng = StdRng::seed_from_u64(5);
        let mut saw_address = false;
        for _ in 0..50 {
            let profile = generator.generate("u+modifyemail@x.com", &tags, &mut rng);
            assert_eq!(profile.email.as_deref(), Some("changed.u+modifyemail@x.com"));
            if let Some(addresses) = profile.addresses {
                assert_eq!(addresses[0].country.as_deref(), Some("NOR"));
                saw_address = true;
            }
        }
        assert!(saw_address);
    }

    #[test]
    fn passthrough_fields_come_from_the_person_source() {
        let generator = generator(Arc::new(FixedPersonSource));
        let profile = generator.generate("u@x.com", &TagSet::default(), &mut StdRng::seed_from_u64(2));

        assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.display_name.as_deref(), Some("janed42"));
        assert_eq!(profile.user_id.as_deref(), Some("12345678901"));
        assert_eq!(profile.birthday, NaiveDate::from_ymd_opt(1985, 4, 12));
        assert_eq!(profile.photo.as_deref(), Some("http://www.acme.com"));
        assert!(profile.created_time.is_some());
    }

    #[test]
    fn sex_distribution_covers_all_outcomes() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = [0_u32; 4];
        for _ in 0..4000 {
            let slot = match sex(false, &mut rng) {
                Some(Sex::Female) => 0,
                Some(Sex::Male) => 1,
                Some(Sex::Undisclosed) => 2,
                None => 3,
                Some(Sex::Invalid) => panic!("invalid sex without the tag"),
            };
            counts[slot] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "skewed distribution: {counts:?}");
        }
    }

    #[test]
    fn locale_is_mostly_absent() {
        let mut rng = StdRng::seed_from_u64(77);
        let catalog = Catalog::builtin();
        let present = (0..4000)
            .filter(|_| locale(false, catalog, &mut rng).is_some())
            .count();
        // 21% expected
        assert!((640..1050).contains(&present), "present = {present}");
    }

    #[test]
    fn time_zone_is_present_about_half_the_time() {
        let mut rng = StdRng::seed_from_u64(78);
        let catalog = Catalog::builtin();
        let present = (0..4000)
            .filter(|_| time_zone(false, catalog, &mut rng).is_some())
            .count();
        assert!((1800..2200).contains(&present), "present = {present}");
    }

    #[test]
    fn phone_normalization() {
        assert_eq!(phone("555-123-456", false), "+555123456");
        assert_eq!(phone("555-123-456", true), "555-123-456");
        assert_eq!(phone("555123456", false), "+555123456");
    }
}
