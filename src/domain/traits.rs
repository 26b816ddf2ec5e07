// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to storage and to the
// single-question improver only through these traits, so a
// different bank format (or an in-memory source in tests)
// plugs in without touching the use cases.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::question::{ImproveRequest, ImproveResponse, QuestionBank, QuestionRecord};

// ─── QuestionSource ───────────────────────────────────────────────────────────
/// Any component that can load question records.
///
/// Implementations:
///   - JsonQuestionLoader → a JSON array (or { "questions": [...] }) on disk
///   - Vec<QuestionRecord> → in-memory records, used by tests
pub trait QuestionSource {
    /// Load every record, in document order.
    fn load_all(&self) -> Result<Vec<QuestionRecord>>;
}

impl QuestionSource for Vec<QuestionRecord> {
    fn load_all(&self) -> Result<Vec<QuestionRecord>> {
        Ok(self.clone())
    }
}

// ─── BankSink ─────────────────────────────────────────────────────────────────
/// Any component that can persist a curated question bank.
///
/// Implementations:
///   - CollectionStore → pretty JSON file
pub trait BankSink {
    fn save(&self, bank: &QuestionBank) -> Result<()>;
}

// ─── ChoiceImprover ───────────────────────────────────────────────────────────
/// Any component that can answer a single improvement request.
///
/// Implementations:
///   - ImproveUseCase → distractor synthesis from error patterns
pub trait ChoiceImprover {
    /// Never fails: problems are reported inside the response.
    fn improve(&mut self, request: &ImproveRequest) -> ImproveResponse;
}
