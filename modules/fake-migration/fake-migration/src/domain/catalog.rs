//! Read-only catalogs of locale and timezone identifiers.

use rand::RngCore;
use rand::seq::IndexedRandom;

/// Identifier catalogs shared by every request.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub locales: &'static [&'static str],
    pub time_zones: &'static [&'static str],
}

static BUILTIN: Catalog = Catalog {
    locales: LOCALES,
    time_zones: TIME_ZONES,
};

impl Catalog {
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Uniformly random locale, or `None` for an empty catalog.
    pub fn random_locale(&self, rng: &mut dyn RngCore) -> Option<&'static str> {
        self.locales.choose(rng).copied()
    }

    /// Uniformly random timezone id, or `None` for an empty catalog.
    pub fn random_time_zone(&self, rng: &mut dyn RngCore) -> Option<&'static str> {
        self.time_zones.choose(rng).copied()
    }
}

const LOCALES: &[&str] = &[
    "ar", "ar_AE", "ar_EG", "ar_SA", "be_BY", "bg_BG", "ca_ES", "cs_CZ", "da_DK", "de", "de_AT",
    "de_CH", "de_DE", "de_LU", "el_GR", "en", "en_AU", "en_CA", "en_GB", "en_IE", "en_IN", "en_NZ",
    "en_US", "en_ZA", "es", "es_AR", "es_CL", "es_CO", "es_ES", "es_MX", "es_US", "et_EE", "fi_FI",
    "fr", "fr_BE", "fr_CA", "fr_CH", "fr_FR", "ga_IE", "hi_IN", "hr_HR", "hu_HU", "in_ID", "is_IS",
    "it", "it_CH", "it_IT", "iw_IL", "ja_JP", "ko_KR", "lt_LT", "lv_LV", "mk_MK", "ms_MY", "mt_MT",
    "nl", "nl_BE", "nl_NL", "no_NO", "nb_NO", "nn_NO", "pl_PL", "pt", "pt_BR", "pt_PT", "ro_RO",
    "ru_RU", "sk_SK", "sl_SI", "sq_AL", "sr_RS", "sv", "sv_SE", "th_TH", "tr_TR", "uk_UA",
    "vi_VN", "zh", "zh_CN", "zh_HK", "zh_SG", "zh_TW",
];

const TIME_ZONES: &[&str] = &[
    "Africa/Abidjan",
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "Africa/Nairobi",
    "America/Anchorage",
    "America/Argentina/Buenos_Aires",
    "America/Bogota",
    "America/Chicago",
    "America/Denver",
    "America/Halifax",
    "America/Los_Angeles",
    "America/Mexico_City",
    "America/New_York",
    "America/Phoenix",
    "America/Santiago",
    "America/Sao_Paulo",
    "America/St_Johns",
    "America/Toronto",
    "Asia/Bangkok",
    "Asia/Dubai",
    "Asia/Hong_Kong",
    "Asia/Jakarta",
    "Asia/Jerusalem",
    "Asia/Kathmandu",
    "Asia/Kolkata",
    "Asia/Manila",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Singapore",
    "Asia/Tehran",
    "Asia/Tokyo",
    "Atlantic/Azores",
    "Atlantic/Reykjavik",
    "Australia/Adelaide",
    "Australia/Brisbane",
    "Australia/Perth",
    "Australia/Sydney",
    "Europe/Amsterdam",
    "Europe/Athens",
    "Europe/Berlin",
    "Europe/Copenhagen",
    "Europe/Dublin",
    "Europe/Helsinki",
    "Europe/Istanbul",
    "Europe/Lisbon",
    "Europe/London",
    "Europe/Madrid",
    "Europe/Moscow",
    "Europe/Oslo",
    "Europe/Paris",
    "Europe/Rome",
    "Europe/Stockholm",
    "Europe/Warsaw",
    "Europe/Zurich",
    "Pacific/Auckland",
    "Pacific/Honolulu",
    "Pacific/Tongatapu",
    "UTC",
];
