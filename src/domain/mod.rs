// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits describing the core
// concepts of the curator:
//
//   problem.rs  — a word problem as the engine sees it, and
//                 the four arithmetic operations
//   grade.rs    — grade-level ceilings and domain whitelists
//   question.rs — question records as read from and written
//                 to the question bank
//   traits.rs   — abstractions the other layers implement
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - Only plain data and lookup tables
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// Word problems and arithmetic operations
pub mod problem;

/// Grade ceilings and valid domains per grade
pub mod grade;

/// Input and output question records
pub mod question;

/// Core abstractions (traits) that other layers implement
pub mod traits;
