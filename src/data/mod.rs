// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the question bank on disk and the
// engine's clean inputs:
//
//   questions.json
//       │
//       ▼
//   JsonQuestionLoader → reads records (array or { "questions": [...] })
//       │
//       ▼
//   Preprocessor       → normalises stems, strips "A." style
//                        prefixes from choices
//       │
//       ▼
//   engine (Layer 5)
//
// Reference: serde_json documentation
//            Rust Book §13 (Iterators and Closures)

/// Loads question records from JSON files
pub mod loader;

/// Cleans question stems and choice labels
pub mod preprocessor;
