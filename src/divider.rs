//! Street/house number divider

use crate::data::{read_word_list, special_streets};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::extract::{Extraction, Extractor, StandardExtractor};
use crate::location::Location;
use crate::normalize::{canonicalize, is_significant, trim_trailing_decoration};
use crate::split::{DigitSplitter, Splitter};
use once_cell::sync::Lazy;
use std::path::Path;

/// Global divider over the bundled street list
static GLOBAL_DIVIDER: Lazy<StreetDivider> = Lazy::new(StreetDivider::new);

/// Splits address fragments into street, house number and affix.
///
/// The divider first looks for the longest prefix of the input that is a
/// known digit-bearing street, then falls back to splitting at a digit.
/// It owns an immutable [`Dictionary`] and keeps no per-call state, so one
/// instance can serve any number of threads.
pub struct StreetDivider {
    dictionary: Dictionary,
    splitter: Box<dyn Splitter>,
    extractor: Box<dyn Extractor>,
}

impl StreetDivider {
    /// Creates a divider over the bundled special street list.
    pub fn new() -> Self {
        Self::with_words(special_streets())
    }

    /// Creates a divider over the given raw street names.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_dictionary(Dictionary::new(words))
    }

    /// Creates a divider over an existing dictionary.
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            splitter: Box::new(DigitSplitter),
            extractor: Box::new(StandardExtractor::default()),
        }
    }

    /// Reads a word list file and builds a divider from it.
    ///
    /// Every line must contain at least one letter or digit.
    pub fn from_word_list_file(path: impl AsRef<Path>) -> Result<Self> {
        let words = read_word_list(path)?;
        let dictionary = Dictionary::try_new(&words)?;
        Ok(Self::from_dictionary(dictionary))
    }

    /// Replaces the digit-position fallback.
    pub fn with_splitter(mut self, splitter: impl Splitter + 'static) -> Self {
        self.splitter = Box::new(splitter);
        self
    }

    /// Replaces the house designation grammar.
    pub fn with_extractor(mut self, extractor: impl Extractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    /// Returns the global divider instance.
    pub fn global() -> &'static StreetDivider {
        &GLOBAL_DIVIDER
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Whether `street` is one of the known digit-bearing streets.
    pub fn is_special_street(&self, street: &str) -> bool {
        self.dictionary.contains_street(street)
    }

    /// Parses one address fragment.
    ///
    /// Never fails: input without a recognizable house number comes back as
    /// a street-only location. Empty input yields an empty street.
    ///
    /// # Example
    /// ```rust
    /// use streetdivider::StreetDivider;
    ///
    /// let divider = StreetDivider::new();
    /// let location = divider.parse("Bundesstraße 2 Nr. 25a");
    /// assert_eq!(location.street(), "Bundesstraße 2");
    /// assert_eq!(location.house_number(), Some(25));
    /// assert_eq!(location.affix(), Some("a"));
    /// ```
    pub fn parse(&self, input: &str) -> Location {
        let input = input.trim();
        if input.is_empty() {
            return Location::default();
        }

        if let Some(location) = self.parse_with_dictionary(input) {
            return location;
        }

        self.parse_with_splitter(input)
    }

    /// Parses a batch of address fragments.
    pub fn parse_batch(&self, inputs: &[&str]) -> Vec<Location> {
        inputs.iter().map(|input| self.parse(input)).collect()
    }

    /// Longest prefix of `input` whose canonical form is in the dictionary,
    /// together with the text after it.
    ///
    /// Canonicalization is not prefix-stable, so every probed prefix is
    /// canonicalized on its own. Two things keep the number of probes bounded
    /// by the dictionary instead of the input:
    ///
    /// - separators after the last letter or digit never change the canonical
    ///   form, so each run of them is probed once, through the prefix ending
    ///   at the preceding letter or digit, and the match is then extended over
    ///   the whole run;
    /// - a prefix with more than twice `max_key_chars` letters and digits has
    ///   a longer canonical form than any key, since only the "straße" rule
    ///   shrinks text and it at most halves it.
    fn find_dictionary_prefix<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        let max_significant = 2 * self.dictionary.max_key_chars();
        let mut significant = input.chars().filter(|&ch| is_significant(ch)).count();
        // end of the longest prefix sharing the canonical form probed next
        let mut run_end = input.len();

        for (start, ch) in input.char_indices().rev() {
            if !is_significant(ch) {
                continue;
            }
            if significant <= max_significant {
                let end = start + ch.len_utf8();
                if self.dictionary.contains(&canonicalize(&input[..end])) {
                    return Some(input.split_at(run_end));
                }
            }
            significant -= 1;
            run_end = start;
        }

        None
    }

    fn parse_with_dictionary(&self, input: &str) -> Option<Location> {
        let (street, remainder) = self.find_dictionary_prefix(input)?;

        // "B4" must not match inside "B45"
        if ends_with_digit(street) && starts_with_digit(remainder) {
            tracing::debug!(street, remainder, "dictionary match rejected inside digit run");
            return None;
        }
        tracing::debug!(street, remainder, "dictionary match");

        let location = match self.extractor.extract(remainder) {
            Extraction::Found {
                house_number,
                affix,
            } => Location::new(trim_trailing_decoration(street), house_number, affix),
            Extraction::NotFound => {
                tracing::debug!(remainder, "no house number after dictionary street");
                Location::street_only(input)
            }
        };
        Some(location)
    }

    fn parse_with_splitter(&self, input: &str) -> Location {
        let Some((street, designation)) = self.splitter.split(input) else {
            return whole_input_as_street(input);
        };

        let street = trim_trailing_decoration(street);
        if street.is_empty() || designation.is_empty() {
            return whole_input_as_street(input);
        }

        match self.extractor.extract(designation) {
            Extraction::Found {
                house_number,
                affix,
            } => Location::new(street, house_number, affix),
            Extraction::NotFound => {
                tracing::debug!(designation, "no house number in designation");
                Location::street_only(input)
            }
        }
    }
}

impl Default for StreetDivider {
    fn default() -> Self {
        Self::new()
    }
}

fn whole_input_as_street(input: &str) -> Location {
    let street = trim_trailing_decoration(input);
    if street.is_empty() {
        Location::street_only(input)
    } else {
        Location::street_only(street)
    }
}

fn ends_with_digit(s: &str) -> bool {
    s.chars().next_back().is_some_and(|ch| ch.is_ascii_digit())
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|ch| ch.is_ascii_digit())
}
