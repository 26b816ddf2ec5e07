// ============================================================
// Layer 4 — Question Loader
// ============================================================
// Loads question records from a JSON document. Two layouts
// are accepted:
//
//   [ { "id": "q1", ... }, ... ]                 bare array
//   { "questions": [ { "id": "q1", ... } ] }     wrapped
//
// A record that does not match the schema is skipped with a
// warning instead of failing the whole load; one bad question
// must not cost the rest of the bank.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation (untyped Value)

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::domain::question::QuestionRecord;
use crate::domain::traits::QuestionSource;

/// Loads question records from one JSON file.
pub struct JsonQuestionLoader {
    path: PathBuf,
}

impl JsonQuestionLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuestionSource for JsonQuestionLoader {
    fn load_all(&self) -> Result<Vec<QuestionRecord>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read question bank '{}'", self.path.display()))?;

        let records = parse_records(&json)
            .with_context(|| format!("Cannot parse question bank '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded {} question records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Parse a JSON document into records, skipping malformed entries.
pub fn parse_records(json: &str) -> Result<Vec<QuestionRecord>> {
    let root: Value = serde_json::from_str(json)?;

    let entries = match root {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("questions") {
            Some(Value::Array(items)) => items,
            _ => bail!("expected a 'questions' array"),
        },
        _ => bail!("expected an array of questions or an object with a 'questions' array"),
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<QuestionRecord>(entry) {
            Ok(record) => records.push(record),
            // Log a warning but continue — don't fail on one bad record
            Err(e) => tracing::warn!("Skipping question #{index}: {e}"),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RECORD: &str = r#"{
        "id": "q1", "grade": 1, "domain": "OA", "standard": "1.OA.A.1",
        "questionText": "Add 2 and 3", "correctAnswer": "5",
        "choices": ["5", "6", "7"], "explanation": "", "theme": "potions"
    }"#;

    #[test]
    fn test_parses_bare_array() {
        let records = parse_records(&format!("[{RECORD}]")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "q1");
    }

    #[test]
    fn test_parses_wrapped_object() {
        let records = parse_records(&format!(r#"{{"questions": [{RECORD}, {RECORD}]}}"#)).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_skips_malformed_record() {
        let records = parse_records(&format!(r#"[{RECORD}, {{"id": "broken"}}]"#)).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_rejects_scalar_document() {
        assert!(parse_records("42").is_err());
    }

    #[test]
    fn test_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{RECORD}]").unwrap();

        let loader = JsonQuestionLoader::new(file.path());
        assert_eq!(loader.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = JsonQuestionLoader::new("/definitely/not/here.json");
        assert!(loader.load_all().is_err());
    }
}
