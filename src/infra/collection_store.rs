// ============================================================
// Layer 6 — Collection Store
// ============================================================
// Writes the curated question bank to disk as pretty JSON:
//
//   {
//     "questions": [
//       { "id": "q1", "grade": 1, "stem": "...",
//         "choices": [ { "id": "A", "text": "7 drops" }, ... ],
//         "answer": { "key": "A", "text": "7 drops" },
//         "metadata": { "theme": "...", "tier": 1, "created": "..." } }
//     ]
//   }
//
// Parent directories are created as needed, like `mkdir -p`.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::question::QuestionBank;
use crate::domain::traits::BankSink;

pub struct CollectionStore {
    path: PathBuf,
}

impl CollectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read a previously written bank back from disk.
    pub fn load(&self) -> Result<QuestionBank> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read curated bank '{}'", self.path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl BankSink for CollectionStore {
    fn save(&self, bank: &QuestionBank) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(bank)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write curated bank to '{}'", self.path.display()))?;

        tracing::info!(
            "Wrote {} questions to '{}'",
            bank.questions.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::{Answer, Choice, CuratedQuestion, Metadata};

    fn sample() -> CuratedQuestion {
        CuratedQuestion {
            id:          "q1".into(),
            grade:       1,
            domain:      "OA".into(),
            standard:    "1.OA.A.1".into(),
            theme:       "potions".into(),
            status:      "completed".into(),
            stem:        "Add 2 and 3".into(),
            choices:     vec![Choice { id: "A".into(), text: "5".into() }],
            answer:      Answer { key: "A".into(), text: "5".into() },
            explanation: String::new(),
            metadata:    Metadata {
                theme:   "potions".into(),
                tier:    1,
                created: "2026-01-01T00:00:00".into(),
            },
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir   = tempfile::tempdir().unwrap();
        let store = CollectionStore::new(dir.path().join("out").join("bank.json"));
        let bank  = QuestionBank { questions: vec![sample()] };

        store.save(&bank).unwrap();
        assert_eq!(store.load().unwrap(), bank);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir   = tempfile::tempdir().unwrap();
        let store = CollectionStore::new(dir.path().join("nope.json"));
        assert!(store.load().is_err());
    }
}
