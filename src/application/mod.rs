// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer strings the other layers together into the two
// workflows the curator offers:
//
//   curate_use_case  — a whole question bank: validate, improve
//                      trivial distractors, relabel, sort, report
//   improve_use_case — one question: regenerate its distractors
//                      and answer with a JSON response
//   assembler        — choice relabelling shared by the batch path
//
// Rules for this layer:
//   - No arithmetic heuristics here (that's Layer 5)
//   - No printing (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The batch curation workflow
pub mod curate_use_case;

/// The single-question improvement workflow
pub mod improve_use_case;

/// A–D labelling and answer-key reconciliation
pub mod assembler;

/// A reproducible RNG when a seed is given, an entropy-seeded one otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}
