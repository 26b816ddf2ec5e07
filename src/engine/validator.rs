// ============================================================
// Layer 5 — Math Validator
// ============================================================
// Checks a question's stated answer against the classifier.
//
// The validator fails OPEN: when the classifier cannot compute
// a value, or the answer has no number in it, the question is
// treated as valid. Only a definite disagreement between the
// stated number and the computed one is a failure.

use std::fmt;

use crate::domain::problem::Operation;
use crate::engine::classifier::{classify, ClassifyFailure};
use crate::engine::extract::extract_numbers;

/// Outcome of validating one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The stated answer equals the computed value
    Correct(Operation),

    /// Nothing to compare against; passes
    Unverifiable(Unverifiable),

    /// The stated answer disagrees with the computed value
    Mismatch {
        operation: Operation,
        operands:  Vec<i64>,
        expected:  i64,
        actual:    i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unverifiable {
    Classification(ClassifyFailure),
    NoAnswerNumber,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Mismatch { .. })
    }

    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct(op) => write!(f, "Math correct: {op}"),
            Self::Unverifiable(Unverifiable::Classification(why)) => {
                write!(f, "Cannot validate: {why}")
            }
            Self::Unverifiable(Unverifiable::NoAnswerNumber) => {
                write!(f, "No number in correct answer - assuming valid")
            }
            Self::Mismatch { operation, operands, expected, actual } => write!(
                f,
                "Math error: {operation} of {operands:?} should be {expected}, got {actual}"
            ),
        }
    }
}

/// Validate `correct_answer` against the operation inferred from `problem_text`.
pub fn validate(problem_text: &str, correct_answer: &str) -> Verdict {
    let numbers = extract_numbers(problem_text);

    let computed = match classify(problem_text, &numbers) {
        Ok(c)    => c,
        Err(why) => return Verdict::Unverifiable(Unverifiable::Classification(why)),
    };

    let Some(actual) = extract_numbers(correct_answer).first().copied() else {
        return Verdict::Unverifiable(Unverifiable::NoAnswerNumber);
    };

    if actual == computed.value {
        Verdict::Correct(computed.operation)
    } else {
        Verdict::Mismatch {
            operation: computed.operation,
            operands:  numbers,
            expected:  computed.value,
            actual,
        }
    }
}
