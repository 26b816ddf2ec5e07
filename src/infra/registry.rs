// ============================================================
// Layer 6 — Duplicate Registry
// ============================================================
// Remembers which questions a run has already accepted.
//
// Two records are duplicates when their question text and
// their multiset of choices match, whatever order the choices
// were listed in. The key is:
//
//   sha256( text + "|" + join("|", sorted(choices)) )
//
// The set is append-only. For sharded runs, build one registry
// per shard and `merge` them afterwards.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct DuplicateRegistry {
    seen: HashSet<String>,
}

impl DuplicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a question. Returns false when it was already seen.
    pub fn register<S: AsRef<str>>(&mut self, text: &str, choices: &[S]) -> bool {
        self.seen.insert(question_hash(text, choices))
    }

    pub fn contains<S: AsRef<str>>(&self, text: &str, choices: &[S]) -> bool {
        self.seen.contains(&question_hash(text, choices))
    }

    /// Fold another registry's hashes into this one.
    pub fn merge(&mut self, other: DuplicateRegistry) {
        self.seen.extend(other.seen);
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Hex SHA-256 of the question text and its sorted choices
pub fn question_hash<S: AsRef<str>>(text: &str, choices: &[S]) -> String {
    let mut sorted: Vec<&str> = choices.iter().map(|c| c.as_ref()).collect();
    sorted.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update(b"|");
    hasher.update(sorted.join("|").as_bytes());
    hex::encode(hasher.finalize())
}
