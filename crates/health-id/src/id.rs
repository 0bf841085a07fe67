use crate::{HealthIdError, HealthIdResult};
use std::{fmt, str::FromStr};

/// Required group lengths of the canonical form, in order.
const GROUP_LENGTHS: [usize; 4] = [4, 4, 4, 2];

/// Total length of the canonical form: 14 group characters plus 3 hyphens.
const CANONICAL_LEN: usize = 17;

/// A health ID in canonical grouped form, e.g. `1234-5678-9012-34`.
///
/// The wrapper guarantees the grouping shape (four hyphen-separated groups
/// of lengths 4-4-4-2). Group content is not restricted to digits; a
/// payload already in grouped shape passes through unchanged even when it
/// carries checksum letters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HealthId(String);

impl HealthId {
    /// Parses a string already in canonical form.
    ///
    /// Returns an error if the input is not exactly four hyphen-separated
    /// groups of lengths 4, 4, 4 and 2. Use [`crate::recover_health_id`] for
    /// free-form input that may merely contain an ID.
    pub fn parse(input: &str) -> HealthIdResult<Self> {
        if Self::is_canonical(input) {
            Ok(Self(input.to_owned()))
        } else {
            Err(HealthIdError::InvalidInput(format!(
                "health ID must be four hyphen-separated groups of lengths 4-4-4-2, got: '{input}'"
            )))
        }
    }

    /// Returns true if the input is in canonical grouped form.
    ///
    /// Lengths are counted in characters, not bytes, so multi-byte input
    /// cannot slip through on byte-length coincidences.
    pub fn is_canonical(input: &str) -> bool {
        input.chars().count() == CANONICAL_LEN
            && input
                .split('-')
                .map(|group| group.chars().count())
                .eq(GROUP_LENGTHS)
    }

    /// Builds a health ID from an ungrouped 14-digit run.
    ///
    /// This is the inverse of [`Self::digits`] for all-digit IDs: the run is
    /// regrouped as 4-4-4-2. Unlike [`Self::parse`], the input here must be
    /// strictly decimal digits, since without hyphens there is no other
    /// evidence the text is an ID at all.
    pub fn from_digits(digits: &str) -> HealthIdResult<Self> {
        if digits.len() != 14 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HealthIdError::InvalidInput(format!(
                "expected exactly 14 decimal digits, got: '{digits}'"
            )));
        }
        Ok(Self(format!(
            "{}-{}-{}-{}",
            &digits[..4],
            &digits[4..8],
            &digits[8..12],
            &digits[12..]
        )))
    }

    /// Returns the canonical grouped form as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 14 group characters with the hyphens stripped.
    ///
    /// This is the form embedded in compact QR payloads.
    pub fn digits(&self) -> String {
        self.0.replace('-', "")
    }
}

impl fmt::Display for HealthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HealthId {
    type Err = HealthIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for HealthId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HealthId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HealthId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HealthId::parse(&s).map_err(serde::de::Error::custom)
    }
}
