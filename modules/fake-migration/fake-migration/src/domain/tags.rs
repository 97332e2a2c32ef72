//! Scenario tags carried in the sub-address of an email.
//!
//! `jane.doe+delay2500-invalidtimezone@example.com` selects two scenarios:
//! a 2.5 s delay and an invalid timezone. Only the first `+` of the local
//! part starts the tag blob; tokens inside it are separated by `-`.

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

const DELAY_PREFIX: &str = "delay";

/// One token of the tag blob, classified against the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    NotFound,
    InvalidLocale,
    InvalidPhone,
    InvalidSex,
    InvalidTimezone,
    ModifyEmail,
    /// `delay<N>`: hold the response for `N` milliseconds. Keeps the digits
    /// as sent, so `delay1` and `delay01` are distinct tags.
    Delay(String),
    /// Anything outside the vocabulary. Matched by no rule.
    Unknown(String),
}

impl Tag {
    /// Classify a raw token. Matching is exact: no trimming, no case folding.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "notfound" => Self::NotFound,
            "invalidlocale" => Self::InvalidLocale,
            "invalidphone" => Self::InvalidPhone,
            "invalidsex" => Self::InvalidSex,
            "invalidtimezone" => Self::InvalidTimezone,
            "modifyemail" => Self::ModifyEmail,
            _ => delay_digits(raw).map_or_else(
                || Self::Unknown(raw.to_owned()),
                |digits| Self::Delay(digits.to_owned()),
            ),
        }
    }
}

fn delay_digits(raw: &str) -> Option<&str> {
    let digits = raw.strip_prefix(DELAY_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

/// Milliseconds of an all-digit literal; saturates instead of overflowing.
fn saturating_millis(digits: &str) -> u64 {
    digits.bytes().fold(0_u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("notfound"),
            Self::InvalidLocale => f.write_str("invalidlocale"),
            Self::InvalidPhone => f.write_str("invalidphone"),
            Self::InvalidSex => f.write_str("invalidsex"),
            Self::InvalidTimezone => f.write_str("invalidtimezone"),
            Self::ModifyEmail => f.write_str("modifyemail"),
            Self::Delay(digits) => write!(f, "{DELAY_PREFIX}{digits}"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// The set of tags extracted from one request. Duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: BTreeSet<Tag>,
}

impl TagSet {
    /// Extract the tag set from an email address.
    #[must_use]
    pub fn parse(email: &str) -> Self {
        let local = email.split_once('@').map_or(email, |(local, _)| local);
        match local.split_once('+') {
            Some((_, blob)) => blob.split('-').map(Tag::parse).collect(),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.contains(&Tag::NotFound)
    }

    /// The requested delay, if exactly one `delay<N>` tag is present.
    ///
    /// Two or more distinct delay tokens cancel each other out. A literal
    /// too large for `u64` milliseconds saturates.
    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        let mut delays = self.tags.iter().filter_map(|tag| match tag {
            Tag::Delay(digits) => Some(digits.as_str()),
            _ => None,
        });
        let first = delays.next()?;
        if delays.next().is_some() {
            return None;
        }
        Some(Duration::from_millis(saturating_millis(first)))
    }

    /// Tokens that matched nothing in the vocabulary.
    pub fn unknown(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().filter_map(|tag| match tag {
            Tag::Unknown(raw) => Some(raw.as_str()),
            _ => None,
        })
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tag in &self.tags {
            if !first {
                f.write_str("-")?;
            }
            write!(f, "{tag}")?;
            first = false;
        }
        Ok(())
    }
}

/// Extract the scenario tags from `email`.
#[must_use]
pub fn parse_tags(email: &str) -> TagSet {
    TagSet::parse(email)
}
