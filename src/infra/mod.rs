// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting pieces that the use cases lean on but that are
// not part of the math:
//
//   registry.rs         — Duplicate detection
//                         Hashes question text + sorted choices
//                         with SHA-256. The registry is owned by
//                         the caller and passed into the batch
//                         run, so repeated or sharded runs can
//                         share or merge it.
//
//   report.rs           — Run statistics
//                         Deletion reasons, improvement outcomes,
//                         counts by grade and domain, retention
//                         rate. Rendered for humans and
//                         serialisable to JSON.
//
//   collection_store.rs — Curated bank persistence
//                         Writes the sorted output bank as
//                         pretty JSON.
//
// Reference: Rust Book §8 (Hash Maps), §9 (Error Handling with anyhow)

/// Content-hash duplicate registry
pub mod registry;

/// Curation run statistics
pub mod report;

/// Curated bank JSON writer
pub mod collection_store;
