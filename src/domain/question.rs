// ============================================================
// Layer 3 — Question Records
// ============================================================
// The shapes that cross the crate boundary:
//
//   QuestionRecord   — one question as stored in the input bank
//   CuratedQuestion  — one accepted, cleaned, relabelled question
//   QuestionBank     — the output document { "questions": [...] }
//   ImproveRequest   — the single-question request message
//   ImproveResponse  — the single-question response message
//
// Field names follow the JSON documents (camelCase) through
// serde attributes, so Rust code keeps snake_case.
//
// Reference: Rust Book §5 (Structs)
//            serde documentation (container attributes)

use serde::{Deserialize, Deserializer, Serialize};

/// Labels for the (at most four) answer choices
pub const CHOICE_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One question as read from the input bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id:             String,
    #[serde(deserialize_with = "lenient_grade")]
    pub grade:          u8,
    pub domain:         String,
    /// Dotted standard code, e.g. "3.OA.A.1"
    pub standard:       String,
    pub question_text:  String,
    pub correct_answer: String,
    #[serde(default)]
    pub choices:        Vec<String>,
    #[serde(default)]
    pub explanation:    String,
    #[serde(default)]
    pub theme:          String,
}

/// A labelled answer choice, `id` is "A".."D"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id:   String,
    pub text: String,
}

/// The answer key and the cleaned answer text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub key:  String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub theme:   String,
    pub tier:    u8,
    /// ISO-8601 creation timestamp
    pub created: String,
}

/// One question accepted into the curated bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedQuestion {
    pub id:          String,
    pub grade:       u8,
    pub domain:      String,
    pub standard:    String,
    pub theme:       String,
    pub status:      String,
    pub stem:        String,
    pub choices:     Vec<Choice>,
    pub answer:      Answer,
    pub explanation: String,
    pub metadata:    Metadata,
}

impl CuratedQuestion {
    /// Sort key used for the output bank: grade, then domain, then standard
    pub fn sort_key(&self) -> (u8, &str, &str) {
        (self.grade, self.domain.as_str(), self.standard.as_str())
    }
}

/// The curated output document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<CuratedQuestion>,
}

/// A single question submitted for distractor improvement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveRequest {
    #[serde(default)]
    pub question_text:  String,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default = "default_grade", deserialize_with = "lenient_grade")]
    pub grade:          u8,
    #[serde(default)]
    pub choices:        Vec<String>,
    #[serde(default)]
    pub answer_key:     Option<String>,
}

fn default_grade() -> u8 {
    1
}

/// Grades arrive as numbers or as numeric strings ("3").
fn lenient_grade<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawGrade {
        Number(u8),
        Text(String),
    }

    match RawGrade::deserialize(deserializer)? {
        RawGrade::Number(grade) => Ok(grade),
        RawGrade::Text(text)    => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// The reply to an ImproveRequest.
///
/// `success: false` means "could not improve", not a crash —
/// the caller always receives a well-formed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveResponse {
    pub success:    bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices:    Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:      Option<String>,
    pub message:    String,
}

impl ImproveResponse {
    pub fn improved(choices: Vec<String>, answer_key: impl Into<String>) -> Self {
        Self {
            success:    true,
            choices:    Some(choices),
            answer_key: Some(answer_key.into()),
            error:      None,
            message:    "Generated improved distractors based on mathematical error patterns"
                .to_string(),
        }
    }

    pub fn kept_original(choices: Vec<String>, answer_key: impl Into<String>) -> Self {
        Self {
            success:    false,
            choices:    Some(choices),
            answer_key: Some(answer_key.into()),
            error:      None,
            message:    "Could not generate improved distractors - keeping original choices"
                .to_string(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success:    false,
            choices:    None,
            answer_key: None,
            message:    format!("Failed to process question: {error}"),
            error:      Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_reads_camel_case() {
        let json = r#"{
            "id": "q1", "grade": 3, "domain": "OA", "standard": "3.OA.A.1",
            "questionText": "Add 2 and 3", "correctAnswer": "5 drops",
            "choices": ["A. 5 drops", "B. 6 drops"],
            "explanation": "2 + 3 = 5", "theme": "potions"
        }"#;
        let rec: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.question_text, "Add 2 and 3");
        assert_eq!(rec.choices.len(), 2);
    }

    #[test]
    fn test_request_defaults() {
        let req: ImproveRequest =
            serde_json::from_str(r#"{"questionText": "x", "correctAnswer": "4"}"#).unwrap();
        assert_eq!(req.grade, 1);
        assert!(req.choices.is_empty());
        assert_eq!(req.answer_key, None);
    }

    #[test]
    fn test_string_grade_is_accepted() {
        let req: ImproveRequest =
            serde_json::from_str(r#"{"questionText": "x", "correctAnswer": "4", "grade": " 3"}"#)
                .unwrap();
        assert_eq!(req.grade, 3);

        let bad = serde_json::from_str::<ImproveRequest>(r#"{"grade": "three"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_failed_response_omits_choices() {
        let json = serde_json::to_value(ImproveResponse::failed("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("choices").is_none());
        assert!(json.get("answerKey").is_none());
    }
}
