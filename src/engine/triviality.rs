// ============================================================
// Layer 5 — Triviality Detector
// ============================================================
// A choice set is "trivial" when its numbers huddle together
// so closely that a student can guess by proximity:
//
//   ["5 potions", "6 potions", "7 potions"]  → trivial
//   ["3 drops", "19 drops", "52 drops"]      → fine
//
// Rule: with at least three numeric choices, sorted, every
// adjacent gap is ≤ 2 AND the whole range is ≤ 6.
//
// The detector fails CLOSED: if any choice number cannot be
// parsed, the set is reported as not trivial and the choices
// are left alone.

use crate::engine::extract::first_digit_run;

/// Largest adjacent gap still considered "too close"
const MAX_TRIVIAL_GAP: i64 = 2;

/// Largest overall spread still considered "too close"
const MAX_TRIVIAL_RANGE: i64 = 6;

/// True when `choices` need better distractors.
pub fn is_trivial<S: AsRef<str>>(choices: &[S]) -> bool {
    let mut values = Vec::with_capacity(choices.len());

    for choice in choices {
        if let Some(run) = first_digit_run(choice.as_ref()) {
            match run.parse::<i64>() {
                Ok(v)  => values.push(v),
                Err(_) => return false,
            }
        }
    }

    if values.len() < 3 {
        return false;
    }

    values.sort_unstable();

    let tight_gaps = values
        .windows(2)
        .all(|pair| pair[1] - pair[0] <= MAX_TRIVIAL_GAP);

    // values is sorted and non-empty here
    let range = values[values.len() - 1] - values[0];

    tight_gaps && range <= MAX_TRIVIAL_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_choices_are_trivial() {
        assert!(is_trivial(&["5 potions", "6 potions", "7 potions"]));
    }

    #[test]
    fn test_spread_choices_are_not_trivial() {
        assert!(!is_trivial(&["3 drops", "19 drops", "52 drops"]));
    }

    #[test]
    fn test_order_does_not_matter() {
        assert!(is_trivial(&["D. 9", "A. 7", "C. 8", "B. 10"]));
    }

    #[test]
    fn test_small_gaps_but_wide_range() {
        // gaps of 2 everywhere but range 8
        assert!(!is_trivial(&["1", "3", "5", "7", "9"]));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        // every gap exactly 2, range exactly 6
        assert!(is_trivial(&["1", "3", "5", "7"]));
    }

    #[test]
    fn test_gap_of_three_breaks_triviality() {
        // range 6 is fine, but 4 → 7 is a gap of 3
        assert!(!is_trivial(&["1", "2", "4", "7"]));
    }

    #[test]
    fn test_one_wide_gap() {
        assert!(!is_trivial(&["5", "6", "10"]));
    }

    #[test]
    fn test_needs_three_numeric_choices() {
        assert!(!is_trivial(&["5 potions", "6 potions", "many potions"]));
        assert!(!is_trivial::<&str>(&[]));
    }

    #[test]
    fn test_unparsable_number_fails_closed() {
        assert!(!is_trivial(&["5", "6", "7", "99999999999999999999999"]));
    }
}
