// ============================================================
// Layer 5 — Distractor Synthesizer
// ============================================================
// Builds three wrong-but-plausible answers for a word problem.
// Each distractor models a real student mistake:
//
//   Inferred op     Candidates
//   ─────────────   ───────────────────────────────────────────
//   addition        |a−b|, a×b, a÷b, correct±1, a, b
//   subtraction     a+b, a×b, a÷b, b−a, correct±1
//   multiplication  a+b, |a−b|, a÷b, correct+a, correct−a, a
//   division        a+b, |a−b|, a×b, a, b, correct+1
//
//   (a, b = first two numbers of the problem; the table only
//    applies when the problem has at least two numbers)
//
// Every problem also gets the grade-agnostic perturbations
// correct±2, correct×2 and correct÷2 (when correct > 2).
//
// Pipeline:
//   1. candidate pool  = table ∪ perturbations
//   2. filter          = keep v > 0, v ≠ correct, v ≤ ceiling
//   3. backfill        = random nearby offsets until 3 exist
//   4. select          = wrong-operation results first
//   5. format          = append the answer's unit word
//
// Ordering convention: the pool is a BTreeSet, so candidates
// are visited in ascending value order. Selection takes the
// wrong-operation results (a+b, |a−b|, a×b, a÷b) first, in
// ascending order, then the remaining candidates, ascending.
// With a seeded RNG the whole output is reproducible.
//
// Division is floor division. A zero divisor or an i64
// overflow silently drops that candidate.
//
// Reference: Rust Book §8 (Collections), rand crate documentation

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::domain::grade::GradeCeiling;
use crate::domain::problem::{Operation, Problem};
use crate::domain::question::CHOICE_LABELS;
use crate::engine::classifier::{classify, floor_div};
use crate::engine::units::{format_value, UnitStrategy};

/// How many distractors every set carries
pub const DISTRACTOR_COUNT: usize = 3;

/// Nearby offsets used when the error patterns run dry
const BACKFILL_OFFSETS: [i64; 7] = [-5, -3, -2, 2, 3, 5, 7];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("no number in correct answer")]
    NoAnswerNumber,

    #[error("cannot find 3 distractors for {correct} within ceiling {ceiling}")]
    InsufficientCandidates { correct: i64, ceiling: GradeCeiling },
}

/// Three distractor values plus everything needed to render them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistractorSet {
    /// The correct answer's leading integer
    pub correct: i64,

    /// Unit word shared by every rendered option
    pub unit:    Option<String>,

    /// Exactly DISTRACTOR_COUNT distinct values, in selection order
    pub values:  Vec<i64>,
}

/// A full, shuffled choice list with its answer key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledChoices {
    pub choices:    Vec<String>,
    pub answer_key: String,
    /// The rendered correct answer, as it appears in `choices`
    pub correct:    String,
}

impl DistractorSet {
    /// The distractors rendered with the shared unit
    pub fn formatted(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| format_value(*v, self.unit.as_deref()))
            .collect()
    }

    /// The correct answer rendered with the shared unit
    pub fn formatted_correct(&self) -> String {
        format_value(self.correct, self.unit.as_deref())
    }

    /// Correct answer plus distractors in random order, keyed A–D.
    pub fn into_choices<R: Rng>(self, rng: &mut R) -> ShuffledChoices {
        let correct     = self.formatted_correct();
        let mut choices = vec![correct.clone()];
        choices.extend(self.formatted());
        choices.shuffle(rng);

        // values are distinct and ≠ correct, so exactly one slot matches
        let index = choices.iter().position(|c| *c == correct).unwrap_or(0);

        ShuffledChoices {
            choices,
            answer_key: CHOICE_LABELS[index].to_string(),
            correct,
        }
    }
}

/// Generates distractor sets. Holds only configuration; the
/// random source is passed per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer {
    unit_strategy: UnitStrategy,
}

impl Synthesizer {
    pub fn new(unit_strategy: UnitStrategy) -> Self {
        Self { unit_strategy }
    }

    /// Build a distractor set for `problem`.
    ///
    /// Fails when the correct answer has no number, or when the
    /// ceiling leaves fewer than three admissible values.
    pub fn synthesize<R: Rng>(
        &self,
        problem: &Problem,
        rng:     &mut R,
    ) -> Result<DistractorSet, SynthesisError> {
        let correct = problem.correct_value().ok_or(SynthesisError::NoAnswerNumber)?;
        let ceiling = problem.ceiling();

        // ── Steps 1–2: candidate pool, filtered ──────────────────────────────
        let mut pool = candidate_pool(problem, correct);

        // ── Step 3: backfill with nearby values ───────────────────────────────
        if pool.len() < DISTRACTOR_COUNT {
            let reachable: BTreeSet<i64> = BACKFILL_OFFSETS
                .iter()
                .filter_map(|offset| correct.checked_add(*offset))
                .filter(|v| is_admissible(*v, correct, ceiling))
                .collect();

            // The loop below can only finish if enough values exist at all
            if pool.union(&reachable).count() < DISTRACTOR_COUNT {
                return Err(SynthesisError::InsufficientCandidates { correct, ceiling });
            }

            while pool.len() < DISTRACTOR_COUNT {
                let offset = BACKFILL_OFFSETS[rng.gen_range(0..BACKFILL_OFFSETS.len())];
                if let Some(candidate) = correct.checked_add(offset) {
                    if is_admissible(candidate, correct, ceiling) {
                        pool.insert(candidate);
                    }
                }
            }
            tracing::debug!("Backfilled distractor pool for {} to {:?}", correct, pool);
        }

        // ── Step 4: wrong-operation results first ─────────────────────────────
        let values: Vec<i64> = match problem.numbers.as_slice() {
            [a, b, ..] => {
                let canonical: Vec<i64> = canonical_wrong_results(*a, *b)
                    .into_iter()
                    .flatten()
                    .collect();
                let (priority, rest): (Vec<i64>, Vec<i64>) =
                    pool.iter().partition(|v| canonical.contains(*v));
                priority.into_iter().chain(rest).take(DISTRACTOR_COUNT).collect()
            }
            _ => pool.iter().copied().take(DISTRACTOR_COUNT).collect(),
        };

        // ── Step 5: shared unit ───────────────────────────────────────────────
        let unit = self.unit_strategy.detect(&problem.correct_answer);

        Ok(DistractorSet { correct, unit, values })
    }
}

/// The filtered candidate pool before any backfill.
pub(crate) fn candidate_pool(problem: &Problem, correct: i64) -> BTreeSet<i64> {
    let ceiling = problem.ceiling();
    let mut raw: Vec<Option<i64>> = Vec::new();

    if let [a, b, ..] = problem.numbers.as_slice() {
        // Failed classifications (unclear, division by zero, …) add no
        // operation-specific patterns
        if let Ok(computed) = classify(&problem.text, &problem.numbers) {
            raw.extend(error_patterns(computed.operation, *a, *b, correct));
        }
    }
    raw.extend(perturbations(correct));

    raw.into_iter()
        .flatten()
        .filter(|v| is_admissible(*v, correct, ceiling))
        .collect()
}

fn is_admissible(value: i64, correct: i64, ceiling: GradeCeiling) -> bool {
    value > 0 && value != correct && ceiling.admits(value)
}

/// Operation-specific student mistakes
fn error_patterns(operation: Operation, a: i64, b: i64, correct: i64) -> Vec<Option<i64>> {
    let [sum, difference, product, quotient] = canonical_wrong_results(a, b);

    match operation {
        Operation::Addition => vec![
            difference,
            product,
            quotient,
            correct.checked_add(1),
            correct.checked_sub(1),
            Some(a),
            Some(b),
        ],
        Operation::Subtraction => vec![
            sum,
            product,
            quotient,
            b.checked_sub(a),
            correct.checked_add(1),
            correct.checked_sub(1),
        ],
        Operation::Multiplication => vec![
            sum,
            difference,
            quotient,
            correct.checked_add(a),
            correct.checked_sub(a),
            Some(a),
        ],
        Operation::Division => vec![
            sum,
            difference,
            product,
            Some(a),
            Some(b),
            correct.checked_add(1),
        ],
    }
}

/// a+b, |a−b|, a×b, a÷b — the result of doing the wrong operation
fn canonical_wrong_results(a: i64, b: i64) -> [Option<i64>; 4] {
    [
        a.checked_add(b),
        a.checked_sub(b).and_then(i64::checked_abs),
        a.checked_mul(b),
        floor_div(a, b),
    ]
}

/// correct±2, correct×2, correct÷2 (only when correct > 2)
fn perturbations(correct: i64) -> Vec<Option<i64>> {
    vec![
        correct.checked_add(2),
        correct.checked_sub(2),
        correct.checked_mul(2),
        if correct > 2 { floor_div(correct, 2) } else { None },
    ]
}
