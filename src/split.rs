//! Digit-position splitting, used when the dictionary gives no answer

/// Splits an address into street and house designation without any
/// knowledge of street names.
///
/// Returns `None` when there is no house designation. Both returned parts
/// are trimmed slices of `input`.
pub trait Splitter: Send + Sync {
    fn split<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)>;
}

impl<F> Splitter for F
where
    F: for<'a> Fn(&'a str) -> Option<(&'a str, &'a str)> + Send + Sync,
{
    fn split<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        self(input)
    }
}

/// Splits before the first digit that follows the leading digit run.
///
/// Skipping the leading run keeps street names that start with a number,
/// such as "1 Maja" or "17er Weg", in one piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitSplitter;

impl Splitter for DigitSplitter {
    fn split<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        let leading = input.len() - input.trim_start_matches(|ch: char| ch.is_ascii_digit()).len();
        let offset = input[leading..].find(|ch: char| ch.is_ascii_digit())?;
        Some(split_at_trimmed(input, leading + offset))
    }
}

/// Splits before the very first digit.
///
/// Numeric street names end up with an empty street, which makes the
/// divider keep the whole input as street.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstDigitSplitter;

impl Splitter for FirstDigitSplitter {
    fn split<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        let index = input.find(|ch: char| ch.is_ascii_digit())?;
        Some(split_at_trimmed(input, index))
    }
}

fn split_at_trimmed(input: &str, index: usize) -> (&str, &str) {
    let (street, designation) = input.split_at(index);
    (street.trim(), designation.trim())
}
