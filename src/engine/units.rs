// ============================================================
// Layer 5 — Unit Detection
// ============================================================
// Distractors must read like the correct answer: if the answer
// is "12 potions", every option ends in " potions".
//
// Two detection strategies exist:
//
//   Vocabulary — first known unit word found anywhere in the
//                lowercased answer ("12 potions" → "potions")
//
//   FirstWord  — first whitespace token that has no digits,
//                is longer than two characters and is not a
//                stop word ("12 magic drops" → "magic")
//
// A run uses ONE strategy for every value it formats, so the
// correct answer and its distractors always share a suffix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const UNIT_VOCABULARY: [&str; 8] = [
    "grams", "meters", "feathers", "potions", "bottles", "ingredients", "drops", "parts",
];

const STOP_WORDS: [&str; 9] = [
    "crystal", "vials", "phoenix", "healing", "the", "a", "an", "is", "are",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStrategy {
    #[default]
    Vocabulary,
    FirstWord,
}

impl UnitStrategy {
    /// The unit word of `answer`, lowercased, if one is found.
    pub fn detect(&self, answer: &str) -> Option<String> {
        match self {
            Self::Vocabulary => {
                let lower = answer.to_lowercase();
                UNIT_VOCABULARY
                    .iter()
                    .find(|unit| lower.contains(*unit))
                    .map(|unit| unit.to_string())
            }
            Self::FirstWord => answer
                .split_whitespace()
                .find(|word| {
                    !word.chars().any(|c| c.is_ascii_digit())
                        && !STOP_WORDS.contains(word)
                        && word.chars().count() > 2
                })
                .map(|word| word.to_lowercase()),
        }
    }
}

impl fmt::Display for UnitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vocabulary => write!(f, "vocabulary"),
            Self::FirstWord  => write!(f, "first_word"),
        }
    }
}

impl FromStr for UnitStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vocabulary"                => Ok(Self::Vocabulary),
            "first_word" | "first-word" => Ok(Self::FirstWord),
            other => Err(format!(
                "unknown unit strategy '{other}' (expected 'vocabulary' or 'first_word')"
            )),
        }
    }
}

/// Render `value` with an optional unit: 12 + Some("drops") → "12 drops"
pub fn format_value(value: i64, unit: Option<&str>) -> String {
    match unit {
        Some(unit) => format!("{value} {unit}"),
        None       => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_finds_known_unit() {
        assert_eq!(UnitStrategy::Vocabulary.detect("12 Potions"), Some("potions".into()));
        assert_eq!(UnitStrategy::Vocabulary.detect("12 magic drops"), Some("drops".into()));
    }

    #[test]
    fn test_vocabulary_miss() {
        assert_eq!(UnitStrategy::Vocabulary.detect("12 cats"), None);
    }

    #[test]
    fn test_first_word_skips_stop_words_and_short_words() {
        assert_eq!(UnitStrategy::FirstWord.detect("12 of the Cats"), Some("cats".into()));
        assert_eq!(UnitStrategy::FirstWord.detect("7 healing vials"), None);
    }

    #[test]
    fn test_first_word_skips_tokens_with_digits() {
        assert_eq!(UnitStrategy::FirstWord.detect("12kg 40"), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(12, Some("drops")), "12 drops");
        assert_eq!(format_value(12, None), "12");
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("first-word".parse::<UnitStrategy>(), Ok(UnitStrategy::FirstWord));
        assert!("metric".parse::<UnitStrategy>().is_err());
    }
}
