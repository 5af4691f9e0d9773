//! Parse result

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Street, house number and affix recognized in one address fragment.
///
/// An affix only exists together with a house number, and an empty affix is
/// stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "LocationFields"))]
pub struct Location {
    street: String,
    house_number: Option<u32>,
    affix: Option<String>,
}

/// Deserialized form; turned into a [`Location`] through [`Location::new`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct LocationFields {
    street: String,
    #[serde(default)]
    house_number: Option<u32>,
    #[serde(default)]
    affix: Option<String>,
}

#[cfg(feature = "serde")]
impl From<LocationFields> for Location {
    fn from(fields: LocationFields) -> Self {
        Location::new(fields.street, fields.house_number, fields.affix)
    }
}

impl Location {
    /// Creates a location, normalizing the affix.
    ///
    /// The affix is trimmed; a blank affix, or any affix without a house
    /// number, is dropped.
    pub fn new(
        street: impl Into<String>,
        house_number: Option<u32>,
        affix: Option<impl Into<String>>,
    ) -> Self {
        let affix = match house_number {
            Some(_) => affix
                .map(Into::into)
                .map(|a: String| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            None => None,
        };
        Self {
            street: street.into().trim().to_string(),
            house_number,
            affix,
        }
    }

    /// A location that only names a street
    pub fn street_only(street: impl Into<String>) -> Self {
        Self::new(street, None, None::<String>)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn house_number(&self) -> Option<u32> {
        self.house_number
    }

    pub fn affix(&self) -> Option<&str> {
        self.affix.as_deref()
    }

    /// Whether a house number was recognized
    pub fn has_house_number(&self) -> bool {
        self.house_number.is_some()
    }

    /// Splits the location into its parts.
    pub fn into_parts(self) -> (String, Option<u32>, Option<String>) {
        (self.street, self.house_number, self.affix)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.street)?;
        if let Some(number) = self.house_number {
            write!(f, " {}", number)?;
        }
        if let Some(ref affix) = self.affix {
            write!(f, " {}", affix)?;
        }
        Ok(())
    }
}
