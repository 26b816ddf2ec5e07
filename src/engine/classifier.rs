// ============================================================
// Layer 5 — Operation Classifier
// ============================================================
// Infers which operation a word problem intends from keyword
// cues, then computes the expected answer from the extracted
// numbers. This is a bounded heuristic, not a solver.
//
// Cue lists overlap ("total" and "needed" appear under both
// addition and multiplication), so the lists are checked in a
// fixed order and the first list with a hit wins:
//
//   "how many more" → subtraction, before any list
//   addition → subtraction → multiplication → division
//
// The comparison phrase goes first because its "more" would
// otherwise fire the addition list.
//
// How each operation computes its value:
//   addition       → sum of ALL numbers
//   subtraction    → max − min for "how many more" framings,
//                    otherwise first − second
//   multiplication → first × second
//   division       → first ÷ second (floor), second must be ≠ 0
//
// Cues are plain lowercase substrings: "add" also fires on
// "address". That is accepted imprecision.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::problem::Operation;

/// Asks for the gap between two amounts; outranks every cue list
const COMPARISON_CUE: &str = "how many more";

/// Cue lists in precedence order. First match wins.
const OPERATION_CUES: [(Operation, &[&str]); 4] = [
    (
        Operation::Addition,
        &["add", "adds", "plus", "total", "together", "sum", "altogether", "combined", "more"],
    ),
    (
        Operation::Subtraction,
        &["subtract", "minus", "left", "remaining", "difference", "fewer", "less", "need", "needs"],
    ),
    (
        Operation::Multiplication,
        &["multiply", "times", "each", "per", "groups of", "needed", "total"],
    ),
    (
        Operation::Division,
        &["divide", "split", "equally", "share", "groups", "each group", "evenly", "among", "brew", "make"],
    ),
];

/// A successful classification: the operation and its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computation {
    pub operation: Operation,
    pub value:     i64,
}

/// Why no value could be computed. The Display strings are the
/// diagnostic reasons recorded by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifyFailure {
    #[error("insufficient_numbers")]
    InsufficientNumbers,

    #[error("operation_unclear")]
    OperationUnclear,

    #[error("division_by_zero")]
    DivisionByZero,

    #[error("overflow in {0}")]
    Overflow(Operation),
}

pub type ClassificationResult = Result<Computation, ClassifyFailure>;

/// The operation whose cue list first matches `text`, if any.
/// `text` may be in any case.
pub fn detect_operation(text: &str) -> Option<Operation> {
    let lower = text.to_lowercase();
    if lower.contains(COMPARISON_CUE) {
        return Some(Operation::Subtraction);
    }
    OPERATION_CUES
        .iter()
        .find(|(_, cues)| cues.iter().any(|cue| lower.contains(cue)))
        .map(|(op, _)| *op)
}

/// Classify a problem and compute the expected answer.
///
/// Never panics: every way of not producing a value is a
/// `ClassifyFailure`.
pub fn classify(text: &str, numbers: &[i64]) -> ClassificationResult {
    if numbers.len() < 2 {
        return Err(ClassifyFailure::InsufficientNumbers);
    }

    let operation = detect_operation(text).ok_or(ClassifyFailure::OperationUnclear)?;
    let (a, b)    = (numbers[0], numbers[1]);

    let value = match operation {
        Operation::Addition => numbers
            .iter()
            .try_fold(0i64, |acc, n| acc.checked_add(*n)),

        Operation::Subtraction => {
            if asks_for_difference(text) {
                // Both bounds exist because numbers.len() >= 2
                let max = numbers.iter().max().copied().unwrap_or(a);
                let min = numbers.iter().min().copied().unwrap_or(b);
                max.checked_sub(min)
            } else {
                a.checked_sub(b)
            }
        }

        Operation::Multiplication => a.checked_mul(b),

        Operation::Division => {
            if b == 0 {
                return Err(ClassifyFailure::DivisionByZero);
            }
            floor_div(a, b)
        }
    };

    value
        .map(|value| Computation { operation, value })
        .ok_or(ClassifyFailure::Overflow(operation))
}

/// "How many more …?" and "how many … need …?" ask for the gap
/// between two amounts regardless of which is mentioned first.
fn asks_for_difference(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains(COMPARISON_CUE) || (lower.contains("how many") && lower.contains("need"))
}

/// Floor division, None on a zero divisor or overflow.
pub(crate) fn floor_div(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        return None;
    }
    let q = a.checked_div(b)?;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}
