// ============================================================
// Layer 5 — Math Engine
// ============================================================
// The heart of the curator. Given a word problem and its
// stated answer it can:
//
//   extract.rs     — pull whole-word integers out of text
//   classifier.rs  — guess the intended operation from keyword
//                    cues and compute the expected result
//   validator.rs   — compare the stated answer to that result
//   triviality.rs  — spot choice sets clustered too tightly
//   synthesizer.rs — build three distractors from common
//                    student error patterns
//   units.rs       — detect the unit word of an answer
//
// Every function here is pure except the synthesizer's
// backfill step, which draws from a caller-supplied RNG.
//
//   question text ──► extract ──► classify ──► validate
//                                     │
//                                     ▼
//   current choices ──► triviality ──► synthesize ──► units
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            Rust Book §9 (Recoverable Errors with Result)

/// Number and word extraction
pub mod extract;

/// Keyword-cue operation classifier
pub mod classifier;

/// Stated-answer check against the classifier
pub mod validator;

/// Detection of tightly clustered choices
pub mod triviality;

/// Error-pattern distractor synthesis
pub mod synthesizer;

/// Unit word detection and formatting
pub mod units;
