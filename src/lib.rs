//! # streetdivider
//!
//! Splits a free-text German address fragment into street name, house
//! number and house number affix.
//!
//! ## Features
//!
//! - Handles streets whose name carries a number ("Bundesstraße 2",
//!   "Straße des 17. Juni", the Mannheim squares "D 4") through a dictionary
//!   of such streets
//! - Tolerant to spelling variants: "Straße"/"Str.", umlauts, spacing and
//!   separators inside number ranges
//! - Keeps numeric street names ("1 Maja") in one piece
//! - House number affixes are kept verbatim ("25 - 27", "1/3", "a-d")
//! - Never fails: anything without a recognizable house number comes back as
//!   a street
//!
//! ## Quick start
//!
//! ```rust
//! use streetdivider::StreetDivider;
//!
//! let divider = StreetDivider::new();
//!
//! let location = divider.parse("Bundesstraße 1 25 1/3");
//! assert_eq!(location.street(), "Bundesstraße 1");
//! assert_eq!(location.house_number(), Some(25));
//! assert_eq!(location.affix(), Some("1/3"));
//!
//! let location = divider.parse("Heideweg 32 - 5");
//! assert_eq!(location.street(), "Heideweg");
//! assert_eq!(location.house_number(), Some(32));
//! assert_eq!(location.affix(), Some("- 5"));
//!
//! // own list of special streets
//! let divider = StreetDivider::with_words(["B 4"]);
//! let location = divider.parse("B 4 10–10a");
//! assert_eq!(location.street(), "B 4");
//! assert_eq!(location.house_number(), Some(10));
//! ```

mod data;
mod dictionary;
mod divider;
mod error;
mod extract;
mod location;
mod normalize;
mod split;

pub use data::{parse_word_list, read_word_list, special_streets};
pub use dictionary::Dictionary;
pub use divider::StreetDivider;
pub use error::{DividerError, Result};
pub use extract::{
    Extraction, Extractor, HouseNumberPolicy, StandardExtractor, MAX_HOUSE_NUMBER_DIGITS,
};
pub use location::Location;
pub use normalize::{canonicalize, trim_trailing_decoration, DIGIT_RUN_JOINER};
pub use split::{DigitSplitter, FirstDigitSplitter, Splitter};

/// Convenience function: parse with the global divider
///
/// ```rust
/// let location = streetdivider::parse("D 4, 3");
/// assert_eq!(location.street(), "D 4");
/// assert_eq!(location.house_number(), Some(3));
/// ```
pub fn parse(address: &str) -> Location {
    StreetDivider::global().parse(address)
}

/// Convenience function: parse a batch with the global divider
pub fn parse_batch(addresses: &[&str]) -> Vec<Location> {
    StreetDivider::global().parse_batch(addresses)
}
