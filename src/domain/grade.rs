// ============================================================
// Layer 3 — Grade Tables
// ============================================================
// Two read-only lookup tables keyed by school grade:
//
//   Ceiling: the largest number a grade is expected to handle
//     1 → 20, 2 → 100, 3 → 1 000, 4 → 10 000, 5 → 100 000,
//     6 (and anything unknown) → unbounded
//
//   Domains: which standard domains belong to a grade
//     1–2 → OA NBT MD G
//     3–5 → OA NBT NF MD G
//     6   → RP EE G SP NS
//
// The ceiling bounds both validation (numbers in the stem)
// and generation (distractor values).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on numbers for one grade. `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCeiling(Option<i64>);

impl GradeCeiling {
    pub fn for_grade(grade: u8) -> Self {
        match grade {
            1 => Self(Some(20)),
            2 => Self(Some(100)),
            3 => Self(Some(1_000)),
            4 => Self(Some(10_000)),
            5 => Self(Some(100_000)),
            _ => Self(None),
        }
    }

    /// The numeric limit, or None when the grade is unbounded
    pub fn limit(&self) -> Option<i64> {
        self.0
    }

    /// True when `value` does not exceed the ceiling (inclusive bound)
    pub fn admits(&self, value: i64) -> bool {
        match self.0 {
            Some(limit) => value <= limit,
            None        => true,
        }
    }
}

impl fmt::Display for GradeCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(limit) => write!(f, "{limit}"),
            None        => write!(f, "unbounded"),
        }
    }
}

/// Standard domains accepted for a grade. Unknown grades accept none.
pub fn valid_domains(grade: u8) -> &'static [&'static str] {
    match grade {
        1 | 2     => &["OA", "NBT", "MD", "G"],
        3 | 4 | 5 => &["OA", "NBT", "NF", "MD", "G"],
        6         => &["RP", "EE", "G", "SP", "NS"],
        _         => &[],
    }
}
