//! Canonicalization of street names into comparison keys
//!
//! A canonical key is what the dictionary stores and what the divider probes
//! with. It is never shown to the user: the human-facing street value only
//! goes through [`trim_trailing_decoration`].

/// Character placed between two digit runs that were separated by
/// punctuation or whitespace, so that "25-27" and "25 / 27" compare equal.
pub const DIGIT_RUN_JOINER: char = '_';

/// Tail of the long street suffix; the leading `s`/`S` is matched separately
/// so its case can be preserved.
const STRASSE_TAIL: &str = "traße";

/// Abbreviated replacement tail, appended after the preserved leading letter.
const STR_TAIL: &str = "tr.";

/// Builds the canonical comparison key of a street name.
///
/// The steps run in a fixed order: the suffix rule depends on the literal
/// "ß", which letter folding would destroy.
///
/// ```rust
/// use streetdivider::canonicalize;
///
/// assert_eq!(canonicalize("Bundesstraße 2"), "bundesstr2");
/// assert_eq!(canonicalize("Heideweg 25 - 27"), "heideweg25_27");
/// ```
pub fn canonicalize(s: &str) -> String {
    let standardized = standardize_street_suffix(s);
    let folded = fold_letters(&standardized);
    encode_special_chars(&folded)
}

/// Replaces "straße"/"Straße" by "str."/"Str." wherever the word is followed
/// by a non-letter or ends the string.
pub fn standardize_street_suffix(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(ch) = rest.chars().next() {
        if ch == 's' || ch == 'S' {
            // 's' and 'S' are single bytes
            if let Some(tail) = rest[1..].strip_prefix(STRASSE_TAIL) {
                let ends_word = tail.chars().next().is_none_or(|next| !next.is_alphabetic());
                if ends_word {
                    result.push(ch);
                    result.push_str(STR_TAIL);
                    rest = tail;
                    continue;
                }
            }
        }
        result.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    result
}

/// Lower-cases everything and folds accented Latin letters to ASCII.
///
/// Characters that are neither letters nor digits are kept at this stage.
pub fn fold_letters(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars().flat_map(char::to_lowercase) {
        match fold_char(ch) {
            Some(folded) => result.push_str(folded),
            None => result.push(ch),
        }
    }
    result
}

fn fold_char(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'å' => "a",
        'æ' | 'ä' => "ae",
        'ç' => "c",
        'ë' | 'ê' | 'é' | 'è' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ø' => "o",
        'ö' => "oe",
        'ù' | 'ú' | 'û' => "u",
        'ü' => "ue",
        'þ' => "p",
        'ý' => "y",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}

/// Letters and ASCII digits: the characters that survive into a canonical
/// key. Every other character is a separator.
pub(crate) fn is_significant(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_ascii_digit()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Default,
    InDigitRun,
    AfterDigitRunSpecial,
}

/// Drops everything that is neither a letter nor an ASCII digit, except that
/// a run of such characters between two digit runs becomes a single
/// [`DIGIT_RUN_JOINER`].
pub fn encode_special_chars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut state = ScanState::Default;

    for ch in s.chars() {
        state = if ch.is_ascii_digit() {
            if state == ScanState::AfterDigitRunSpecial {
                result.push(DIGIT_RUN_JOINER);
            }
            result.push(ch);
            ScanState::InDigitRun
        } else if ch.is_alphabetic() {
            result.push(ch);
            ScanState::Default
        } else if state == ScanState::Default {
            ScanState::Default
        } else {
            ScanState::AfterDigitRunSpecial
        };
    }

    result
}

/// Strips trailing characters other than letters, digits and ".", then
/// reduces a trailing ".." to a single dot.
///
/// ```rust
/// use streetdivider::trim_trailing_decoration;
///
/// assert_eq!(trim_trailing_decoration("D 4, "), "D 4");
/// assert_eq!(trim_trailing_decoration("Gartenstr..;"), "Gartenstr.");
/// ```
pub fn trim_trailing_decoration(s: &str) -> &str {
    let trimmed = s.trim_end_matches(|ch: char| !(is_significant(ch) || ch == '.'));
    match trimmed.strip_suffix("..") {
        Some(head) => &trimmed[..head.len() + 1],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_at_end_and_before_separator() {
        assert_eq!(standardize_street_suffix("Kultstraße"), "Kultstr.");
        assert_eq!(standardize_street_suffix("Kultstraße 3"), "Kultstr. 3");
        assert_eq!(standardize_street_suffix("straße73"), "str.73");
        assert_eq!(standardize_street_suffix("Straße des 17. Juni"), "Str. des 17. Juni");
    }

    #[test]
    fn test_suffix_inside_word_untouched() {
        assert_eq!(standardize_street_suffix("Straßenbahnweg 4"), "Straßenbahnweg 4");
        assert_eq!(standardize_street_suffix("straßedes17juni"), "straßedes17juni");
        // only the leading letter is case-insensitive
        assert_eq!(standardize_street_suffix("STRASSE 5"), "STRASSE 5");
        assert_eq!(standardize_street_suffix("StRaße 5"), "StRaße 5");
    }

    #[test]
    fn test_suffix_with_multibyte_neighbours() {
        assert_eq!(
            standardize_street_suffix("Müllerstraße/Ölweg"),
            "Müllerstr./Ölweg"
        );
        assert_eq!(standardize_street_suffix("ßstraße"), "ßstr.");
        assert_eq!(standardize_street_suffix(""), "");
    }

    #[test]
    fn test_fold_letters() {
        assert_eq!(fold_letters("Allertshäuser"), "allertshaeuser");
        assert_eq!(fold_letters("ÖLMÜHLE"), "oelmuehle");
        assert_eq!(fold_letters("Fußweg"), "fussweg");
        assert_eq!(fold_letters("Crème Brûlée"), "creme brulee");
        assert_eq!(fold_letters("Æbeltoft Ñandú"), "aebeltoft nandu");
        assert_eq!(fold_letters("Þórý"), "pory");
        // separators survive this stage
        assert_eq!(fold_letters("A-1, b"), "a-1, b");
    }

    #[test]
    fn test_encode_joins_digit_runs() {
        assert_eq!(encode_special_chars("25-27"), "25_27");
        assert_eq!(encode_special_chars("25 - 27"), "25_27");
        assert_eq!(encode_special_chars("25 / 27 b"), "25_27b");
        assert_eq!(encode_special_chars("1/3"), "1_3");
    }

    #[test]
    fn test_encode_drops_other_specials() {
        assert_eq!(encode_special_chars("bundesstr. 2"), "bundesstr2");
        assert_eq!(encode_special_chars("d 4, nr. 3"), "d4nr3");
        // a letter between digit runs resets the scan
        assert_eq!(encode_special_chars("2 a 3"), "2a3");
        assert_eq!(encode_special_chars("2- a-3"), "2a3");
        assert_eq!(encode_special_chars("- ,;"), "");
        assert_eq!(encode_special_chars("25 -"), "25");
    }

    #[test]
    fn test_canonicalize_pipeline() {
        assert_eq!(canonicalize("Bundesstraße 1"), "bundesstr1");
        assert_eq!(canonicalize("bundesstraße1"), "bundesstr1");
        assert_eq!(canonicalize("Straße 73"), "str73");
        assert_eq!(canonicalize("Straße des 17. Juni"), "strdes17juni");
        assert_eq!(canonicalize("1 Maja"), "1maja");
        assert_eq!(canonicalize("B 4 10–10a"), "b4_10_10a");
        assert_eq!(canonicalize("Allertshäuser Straße 25a"), "allertshaeuserstr25a");
    }

    #[test]
    fn test_canonicalize_is_not_prefix_stable() {
        let whole = canonicalize("25-27");
        let prefix = canonicalize("25-");
        assert_eq!(whole, "25_27");
        assert_eq!(prefix, "25");
        assert_ne!(&whole[..3], prefix);
    }

    #[test]
    fn test_trim_trailing_decoration() {
        assert_eq!(trim_trailing_decoration("Gartenstr."), "Gartenstr.");
        assert_eq!(trim_trailing_decoration("Gartenstr.."), "Gartenstr.");
        assert_eq!(trim_trailing_decoration("Heideweg -/ "), "Heideweg");
        assert_eq!(trim_trailing_decoration("Str. -."), "Str. -.");
        assert_eq!(trim_trailing_decoration("---"), "");
        // only ASCII digits count as digits
        assert_eq!(trim_trailing_decoration("Heideweg ²"), "Heideweg");
        assert_eq!(trim_trailing_decoration("Heideweg 4²"), "Heideweg 4");
        assert_eq!(trim_trailing_decoration(""), "");
    }
}
