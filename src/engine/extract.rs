// ============================================================
// Layer 5 — Number & Word Extraction
// ============================================================
// Word problems state their operands as plain digit runs:
//   "Ava brews 12 potions and shares them among 4 friends"
//     → [12, 4]
//
// Only whole-word runs count, so "3rd" or "x2" contribute
// nothing. There is no sign or decimal handling: "3.5"
// yields [3, 5], exactly as a reader scanning for digits would.

use once_cell::sync::Lazy;
use regex::Regex;

static WHOLE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]+\b").expect("whole-number pattern is valid"));

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"));

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Every whole-word integer in `text`, in reading order.
///
/// Digit runs too long for an i64 are skipped.
pub fn extract_numbers(text: &str) -> Vec<i64> {
    WHOLE_NUMBER
        .find_iter(text)
        .filter_map(|m| match m.as_str().parse::<i64>() {
            Ok(n)  => Some(n),
            Err(e) => {
                tracing::debug!("Skipping number '{}': {e}", m.as_str());
                None
            }
        })
        .collect()
}

/// The first run of digits anywhere in `text`, word boundary or not.
/// "B) 12potions" → Some("12")
pub fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN.find(text).map(|m| m.as_str())
}

/// Number of word tokens in `text`.
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_in_reading_order() {
        assert_eq!(
            extract_numbers("Ava brews 12 potions and shares them among 4 friends"),
            vec![12, 4]
        );
    }

    #[test]
    fn test_ignores_digits_glued_to_letters() {
        assert_eq!(extract_numbers("the 3rd jar holds x2 or 7"), vec![7]);
    }

    #[test]
    fn test_decimal_splits_into_two() {
        assert_eq!(extract_numbers("3.5 grams"), vec![3, 5]);
    }

    #[test]
    fn test_overflowing_run_is_skipped() {
        assert_eq!(extract_numbers("99999999999999999999999 and 2"), vec![2]);
    }

    #[test]
    fn test_first_digit_run() {
        assert_eq!(first_digit_run("C. 19drops"), Some("19"));
        assert_eq!(first_digit_run("none"), None);
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("How many potions, in all?"), 5);
        assert_eq!(count_words(""), 0);
    }
}
