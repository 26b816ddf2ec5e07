// ============================================================
// Layer 3 — Problem Domain Types
// ============================================================
// A word problem reduced to what the math engine needs:
//   - the question text (for keyword cues)
//   - the integers found in it, in reading order
//   - the grade (which fixes the numeric ceiling)
//   - the stated correct answer, e.g. "12 potions"
//
// Example:
//   text:    "Mia adds 3 drops, then 4 drops, then 5 drops. How many in total?"
//   numbers: [3, 4, 5]
//   answer:  "12 drops"
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::grade::GradeCeiling;
use crate::engine::extract::extract_numbers;

/// The four operations the classifier can infer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Addition       => write!(f, "addition"),
            Self::Subtraction    => write!(f, "subtraction"),
            Self::Multiplication => write!(f, "multiplication"),
            Self::Division       => write!(f, "division"),
        }
    }
}

/// An immutable word problem handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// The question stem as written
    pub text: String,

    /// Whole-word integers from `text`, in reading order
    pub numbers: Vec<i64>,

    /// School grade, 1–6
    pub grade: u8,

    /// The stated correct answer, value plus optional unit phrase
    pub correct_answer: String,
}

impl Problem {
    /// Build a Problem, extracting the numbers from the text.
    ///
    /// Example:
    ///   let p = Problem::new("Add 3 and 4", 1, "7 drops");
    ///   assert_eq!(p.numbers, vec![3, 4]);
    pub fn new(
        text:           impl Into<String>,
        grade:          u8,
        correct_answer: impl Into<String>,
    ) -> Self {
        let text    = text.into();
        let numbers = extract_numbers(&text);
        Self {
            text,
            numbers,
            grade,
            correct_answer: correct_answer.into(),
        }
    }

    /// The leading integer of the correct answer, if it has one
    pub fn correct_value(&self) -> Option<i64> {
        extract_numbers(&self.correct_answer).first().copied()
    }

    /// The numeric ceiling for this problem's grade
    pub fn ceiling(&self) -> GradeCeiling {
        GradeCeiling::for_grade(self.grade)
    }
}
