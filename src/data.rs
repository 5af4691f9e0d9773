//! Word lists of special streets

use crate::error::{DividerError, Result};
use std::fs;
use std::path::Path;

/// Bundled list of digit-bearing street names (compiled in)
const SPECIAL_STREETS_DATA: &str = include_str!("../data/special_streets.txt");

/// The bundled special streets.
pub fn special_streets() -> Vec<String> {
    parse_word_list(SPECIAL_STREETS_DATA)
}

/// Splits a word list into entries.
///
/// Accepts CRLF, LF and CR line endings. Lines are trimmed; blank lines and
/// lines starting with `#` are dropped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.split(|ch: char| ch == '\r' || ch == '\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads a word list file, one street per line.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DividerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&text);
    if words.is_empty() {
        return Err(DividerError::EmptyWordList(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), entries = words.len(), "loaded word list");

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "streetdivider-{}-{}.txt",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_special_streets() {
        let streets = special_streets();
        assert!(streets.len() > 100);
        assert!(streets.iter().any(|s| s == "Bundesstraße 2"));
        assert!(streets.iter().any(|s| s == "Straße des 17. Juni"));
        assert!(streets.iter().any(|s| s == "1 Maja"));
        assert!(streets.iter().all(|s| !s.starts_with('#')));
    }

    #[test]
    fn test_parse_word_list_line_endings() {
        let expected = vec!["A1".to_string(), "B2".to_string(), "C3".to_string()];
        assert_eq!(parse_word_list("A1\nB2\nC3"), expected);
        assert_eq!(parse_word_list("A1\r\nB2\r\nC3\r\n"), expected);
        assert_eq!(parse_word_list("A1\rB2\rC3"), expected);
        assert_eq!(parse_word_list("A1\r\nB2\nC3\r"), expected);
    }

    #[test]
    fn test_parse_word_list_skips_blank_and_comments() {
        let words = parse_word_list("# header\n\n  Straße 73  \n   \n# note\nL10\n");
        assert_eq!(words, vec!["Straße 73".to_string(), "L10".to_string()]);
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn test_read_word_list() {
        let path = temp_file("read", "Bundesstraße 1\r\nStraße 6\r\n");
        let words = read_word_list(&path).unwrap();
        assert_eq!(words, vec!["Bundesstraße 1".to_string(), "Straße 6".to_string()]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_word_list_errors() {
        let missing = std::env::temp_dir().join("streetdivider-does-not-exist.txt");
        assert!(matches!(
            read_word_list(&missing),
            Err(DividerError::Io { .. })
        ));

        let path = temp_file("empty", "# nothing here\n\n");
        assert!(matches!(
            read_word_list(&path),
            Err(DividerError::EmptyWordList(_))
        ));
        fs::remove_file(path).unwrap();
    }
}
