//! House number and affix extraction
//!
//! A house designation is what follows the street name, e.g. `"Nr. 25 - 27 b"`
//! or `", 3"`. The grammar is deliberately small:
//!
//! ```text
//! [","] [" "] ["Nr" ["."]] {" "} digit {digit} affix
//! ```
//!
//! The affix is the rest of the text, trimmed, kept verbatim.

/// Upper bound on the digits that are turned into a house number.
///
/// Longer digit runs are still consumed as a whole, but only their first
/// `MAX_HOUSE_NUMBER_DIGITS` characters are converted, which keeps the value
/// far away from `u32::MAX`.
pub const MAX_HOUSE_NUMBER_DIGITS: usize = 6;

/// Outcome of running an [`Extractor`] on a house designation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The designation matched. Both parts are `None` for an empty designation.
    Found {
        house_number: Option<u32>,
        affix: Option<String>,
    },
    /// No house number where the grammar expects one
    NotFound,
}

impl Extraction {
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found { .. })
    }
}

/// Splits a house designation into house number and affix.
///
/// Implemented for [`StandardExtractor`] and for any
/// `Fn(&str) -> Extraction`, so a divider can be handed a plain function.
pub trait Extractor: Send + Sync {
    fn extract(&self, designation: &str) -> Extraction;
}

impl<F> Extractor for F
where
    F: Fn(&str) -> Extraction + Send + Sync,
{
    fn extract(&self, designation: &str) -> Extraction {
        self(designation)
    }
}

/// Whether a house number of 0 counts as a house number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HouseNumberPolicy {
    /// "Nr.0" yields house number 0
    #[default]
    AllowZero,
    /// A 0 is treated like a missing number
    PositiveOnly,
}

/// The built-in house designation grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardExtractor {
    policy: HouseNumberPolicy,
}

impl StandardExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: HouseNumberPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> HouseNumberPolicy {
        self.policy
    }
}

impl Extractor for StandardExtractor {
    fn extract(&self, designation: &str) -> Extraction {
        if designation.trim().is_empty() {
            return Extraction::Found {
                house_number: None,
                affix: None,
            };
        }

        let rest = designation.strip_prefix(',').unwrap_or(designation);
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        let rest = match rest.strip_prefix("Nr") {
            Some(after) => after.strip_prefix('.').unwrap_or(after),
            None => rest,
        };
        let rest = rest.trim_start_matches(' ');

        let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digit_count == 0 {
            return Extraction::NotFound;
        }
        let (digits, tail) = rest.split_at(digit_count);

        let house_number = match digits[..digit_count.min(MAX_HOUSE_NUMBER_DIGITS)].parse::<u32>() {
            Ok(number) => number,
            Err(_) => return Extraction::NotFound,
        };
        if house_number == 0 && self.policy == HouseNumberPolicy::PositiveOnly {
            return Extraction::NotFound;
        }

        let affix = tail.trim();
        Extraction::Found {
            house_number: Some(house_number),
            affix: (!affix.is_empty()).then(|| affix.to_string()),
        }
    }
}
