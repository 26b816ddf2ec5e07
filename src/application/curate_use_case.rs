// ============================================================
// Layer 2 — CurateUseCase
// ============================================================
// Runs a whole question bank through the curation pipeline:
//
//   Step 1: Load records                  (Layer 4 - data)
//   Step 2: Reject duplicates             (Layer 6 - infra)
//   Step 3: Validate standard, domain,
//           grade numbers, length, count  (Layer 3 - domain)
//   Step 4: Validate the arithmetic       (Layer 5 - engine)
//   Step 5: Regenerate trivial choices    (Layer 5 - engine)
//   Step 6: Clean and relabel A–D         (Layer 2 - assembler)
//   Step 7: Sort by grade/domain/standard
//   Step 8: Save the bank                 (Layer 6 - infra)
//
// A rejected question never stops the run: it is dropped and
// its reason counted in the report.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Rust Book §9  (Recoverable Errors with Result)

use anyhow::Result;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::assembler::{assemble, assemble_keyed};
use crate::application::rng_from_seed;
use crate::data::preprocessor::Preprocessor;
use crate::domain::grade::{valid_domains, GradeCeiling};
use crate::domain::problem::Problem;
use crate::domain::question::{CuratedQuestion, Metadata, QuestionBank, QuestionRecord, CHOICE_LABELS};
use crate::domain::traits::{BankSink, QuestionSource};
use crate::engine::extract::{count_words, extract_numbers};
use crate::engine::synthesizer::{ShuffledChoices, SynthesisError, Synthesizer};
use crate::engine::triviality::is_trivial;
use crate::engine::units::UnitStrategy;
use crate::engine::validator::{validate, Verdict};
use crate::infra::registry::DuplicateRegistry;
use crate::infra::report::CurationReport;

// ─── Curation Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurateConfig {
    pub input:         String,
    pub output:        String,
    /// Where to save the JSON report; printed only when None
    pub report:        Option<String>,
    pub max_words:     usize,
    pub unit_strategy: UnitStrategy,
    pub seed:          Option<u64>,
    pub tier:          u8,
}

impl Default for CurateConfig {
    fn default() -> Self {
        Self {
            input:         "data/questions.json".to_string(),
            output:        "output/curated_questions.json".to_string(),
            report:        None,
            max_words:     30,
            unit_strategy: UnitStrategy::default(),
            seed:          None,
            tier:          1,
        }
    }
}

// ─── Rejection Reasons ───────────────────────────────────────────────────────
// The Display strings are the keys of the report's deletion histogram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Duplicate question")]
    Duplicate,

    #[error("Invalid standard format")]
    StandardFormat,

    #[error("Invalid standard alignment")]
    StandardAlignment,

    #[error("Invalid domain {domain} for grade {grade}")]
    Domain { domain: String, grade: u8 },

    #[error("Numbers exceed grade {0} limits")]
    NumbersExceedGrade(u8),

    #[error("Question too long")]
    TooLong,

    #[error("Invalid choice count {0}")]
    ChoiceCount(usize),

    #[error("Mathematical error: {0}")]
    Math(Verdict),
}

/// What happened to a question's answer choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Improvement {
    /// Choices were not trivial and were kept
    Unchanged,
    /// Trivial choices were replaced by synthesized distractors
    Regenerated,
    /// Trivial choices, but synthesis failed; originals kept
    KeptOriginal(SynthesisError),
}

pub struct CurateUseCase {
    config:       CurateConfig,
    synthesizer:  Synthesizer,
    preprocessor: Preprocessor,
    rng:          StdRng,
}

impl CurateUseCase {
    pub fn new(config: CurateConfig) -> Self {
        let synthesizer = Synthesizer::new(config.unit_strategy);
        let rng         = rng_from_seed(config.seed);
        Self { config, synthesizer, preprocessor: Preprocessor::new(), rng }
    }

    pub fn config(&self) -> &CurateConfig {
        &self.config
    }

    /// Curate every record from `source` and hand the sorted bank to `sink`.
    ///
    /// `registry` is owned by the caller so several runs (or shards of
    /// one bank) can share duplicate detection.
    pub fn execute(
        &mut self,
        source:   &impl QuestionSource,
        sink:     &impl BankSink,
        registry: &mut DuplicateRegistry,
    ) -> Result<CurationReport> {
        // ── Step 1: Load ──────────────────────────────────────────────────────
        let records = source.load_all()?;
        tracing::info!("Curating {} questions", records.len());

        let created    = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        let mut report = CurationReport::new(records.len());
        let mut kept   = Vec::with_capacity(records.len());

        // ── Steps 2–6: per question ───────────────────────────────────────────
        for record in &records {
            match self.curate_question(record, registry, &created) {
                Ok((question, improvement)) => {
                    match improvement {
                        Improvement::Unchanged       => {}
                        Improvement::Regenerated     => report.record_improved(),
                        Improvement::KeptOriginal(_) => report.record_kept_original(),
                    }
                    report.record_accepted(question.grade, &question.domain);
                    kept.push(question);
                }
                Err(rejection) => {
                    tracing::debug!("Rejected {}: {}", record.id, rejection);
                    report.record_rejection(&rejection.to_string());
                }
            }
        }

        // ── Step 7: Sort ──────────────────────────────────────────────────────
        kept.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        // ── Step 8: Save ──────────────────────────────────────────────────────
        sink.save(&QuestionBank { questions: kept })?;

        tracing::info!(
            "Accepted {} of {} questions ({:.1}%)",
            report.accepted,
            report.total_processed,
            report.retention_rate()
        );
        Ok(report)
    }

    /// Validate, improve and relabel one record.
    pub fn curate_question(
        &mut self,
        record:   &QuestionRecord,
        registry: &mut DuplicateRegistry,
        created:  &str,
    ) -> Result<(CuratedQuestion, Improvement), Rejection> {
        let text = &record.question_text;

        // Registered before any other check, so a rejected question
        // still blocks its later copies
        if !registry.register(text, &record.choices) {
            return Err(Rejection::Duplicate);
        }

        check_standard(record)?;

        let ceiling = GradeCeiling::for_grade(record.grade);
        if extract_numbers(text).iter().any(|n| !ceiling.admits(*n)) {
            return Err(Rejection::NumbersExceedGrade(record.grade));
        }

        if count_words(text) > self.config.max_words {
            return Err(Rejection::TooLong);
        }

        let count = record.choices.len();
        if count == 0 || count > CHOICE_LABELS.len() {
            return Err(Rejection::ChoiceCount(count));
        }

        let verdict = validate(text, &record.correct_answer);
        if !verdict.is_valid() {
            return Err(Rejection::Math(verdict));
        }

        let (regenerated, improvement) = self.improve_choices(record);
        let (choices, answer) = match &regenerated {
            Some(shuffled) => assemble_keyed(shuffled, &self.preprocessor),
            None           => assemble(&record.choices, &record.correct_answer, &self.preprocessor),
        };

        let question = CuratedQuestion {
            id:          record.id.clone(),
            grade:       record.grade,
            domain:      record.domain.clone(),
            standard:    record.standard.clone(),
            theme:       record.theme.clone(),
            status:      "completed".to_string(),
            stem:        self.preprocessor.clean_text(text),
            choices,
            answer,
            explanation: self.preprocessor.clean_text(&record.explanation),
            metadata:    Metadata {
                theme:   record.theme.clone(),
                tier:    self.config.tier,
                created: created.to_string(),
            },
        };
        Ok((question, improvement))
    }

    /// New shuffled choices when the record's are trivial and synthesis
    /// succeeds; None keeps the record's own choices.
    fn improve_choices(&mut self, record: &QuestionRecord) -> (Option<ShuffledChoices>, Improvement) {
        if !is_trivial(&record.choices) {
            return (None, Improvement::Unchanged);
        }

        let problem = Problem::new(&record.question_text, record.grade, &record.correct_answer);
        match self.synthesizer.synthesize(&problem, &mut self.rng) {
            Ok(set) => {
                tracing::debug!("Regenerated distractors for {}: {:?}", record.id, set.values);
                (Some(set.into_choices(&mut self.rng)), Improvement::Regenerated)
            }
            Err(e) => {
                tracing::debug!("Keeping original choices for {}: {}", record.id, e);
                (None, Improvement::KeptOriginal(e))
            }
        }
    }
}

/// "3.OA.A.1" must name the record's own grade and domain, and the
/// domain must belong to that grade.
fn check_standard(record: &QuestionRecord) -> Result<(), Rejection> {
    let mut parts = record.standard.split('.');
    let grade: u8 = parts
        .next()
        .and_then(|g| g.trim().parse().ok())
        .ok_or(Rejection::StandardFormat)?;
    let domain = parts.next().ok_or(Rejection::StandardFormat)?;

    if grade != record.grade || domain != record.domain {
        return Err(Rejection::StandardAlignment);
    }
    if !valid_domains(record.grade).contains(&record.domain.as_str()) {
        return Err(Rejection::Domain { domain: record.domain.clone(), grade: record.grade });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::collection_store::CollectionStore;

    fn record(id: &str, text: &str, answer: &str, choices: &[&str]) -> QuestionRecord {
        QuestionRecord {
            id:             id.to_string(),
            grade:          1,
            domain:         "OA".to_string(),
            standard:       "1.OA.A.1".to_string(),
            question_text:  text.to_string(),
            correct_answer: answer.to_string(),
            choices:        choices.iter().map(|c| c.to_string()).collect(),
            explanation:    String::new(),
            theme:          "potions".to_string(),
        }
    }

    fn use_case() -> CurateUseCase {
        CurateUseCase::new(CurateConfig { seed: Some(7), ..CurateConfig::default() })
    }

    fn curate(rec: &QuestionRecord) -> Result<(CuratedQuestion, Improvement), Rejection> {
        use_case().curate_question(rec, &mut DuplicateRegistry::new(), "2026-01-01T00:00:00")
    }

    const ADD: &str = "Mia adds 3 drops and 4 drops. How many drops?";

    #[test]
    fn test_spread_out_choices_are_kept() {
        let rec = record("q1", ADD, "7 drops", &["A. 3 drops", "B. 19 drops", "C. 7 drops", "D. 52 drops"]);
        let (q, improvement) = curate(&rec).unwrap();

        assert_eq!(improvement, Improvement::Unchanged);
        assert_eq!(q.answer.key, "C");
        assert_eq!(q.choices[0].text, "3 drops");
        assert_eq!(q.status, "completed");
        assert_eq!(q.metadata.tier, 1);
    }

    #[test]
    fn test_trivial_choices_are_regenerated() {
        let rec = record("q1", ADD, "7 drops", &["5 drops", "6 drops", "7 drops", "8 drops"]);
        let (q, improvement) = curate(&rec).unwrap();

        assert_eq!(improvement, Improvement::Regenerated);
        assert_eq!(q.choices.len(), 4);
        let keyed = q.choices.iter().find(|c| c.id == q.answer.key).unwrap();
        assert_eq!(keyed.text, "7 drops");
        let mut texts: Vec<&str> = q.choices.iter().map(|c| c.text.as_str()).collect();
        texts.sort();
        assert_eq!(texts, vec!["1 drops", "12 drops", "3 drops", "7 drops"]);
    }

    #[test]
    fn test_regenerated_mixed_case_unit_keeps_all_distractors() {
        let rec = record("q1", ADD, "7 Drops", &["5 Drops", "6 Drops", "7 Drops", "8 Drops"]);
        for seed in 0..20 {
            let mut uc = CurateUseCase::new(CurateConfig { seed: Some(seed), ..CurateConfig::default() });
            let (q, improvement) = uc
                .curate_question(&rec, &mut DuplicateRegistry::new(), "t")
                .unwrap();
            assert_eq!(improvement, Improvement::Regenerated);

            let sevens = q.choices.iter().filter(|c| c.text.starts_with("7 ")).count();
            assert_eq!(sevens, 1, "seed {seed}: {:?}", q.choices);

            let keyed = q.choices.iter().find(|c| c.id == q.answer.key).unwrap();
            assert_eq!(keyed.text, q.answer.text);
            assert_eq!(q.answer.text, "7 drops");

            let mut texts: Vec<&str> = q.choices.iter().map(|c| c.text.as_str()).collect();
            texts.sort();
            assert_eq!(texts, vec!["1 drops", "12 drops", "3 drops", "7 drops"]);
        }
    }

    #[test]
    fn test_unsynthesizable_keeps_originals() {
        let rec = record("q1", "How many vials are on the shelf?", "seven", &["five", "six", "seven"]);
        // no digits at all: not trivial, so nothing to regenerate
        assert_eq!(curate(&rec).unwrap().1, Improvement::Unchanged);

        let rec = record("q2", "How many vials are on the shelf?", "20", &["18", "19", "20"]);
        let (q, improvement) = curate(&rec).unwrap();
        assert!(matches!(improvement, Improvement::Regenerated));
        assert_eq!(q.choices.len(), 4);

        let rec = record("q3", "Count the vials on the shelf", "vials", &["1", "2", "3"]);
        let (q, improvement) = curate(&rec).unwrap();
        assert_eq!(improvement, Improvement::KeptOriginal(SynthesisError::NoAnswerNumber));
        assert_eq!(q.answer.key, "A");
        assert_eq!(q.choices[0].text, "vials");
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let mut uc       = use_case();
        let mut registry = DuplicateRegistry::new();
        let rec          = record("q1", ADD, "7 drops", &["3 drops", "19 drops", "7 drops"]);

        assert!(uc.curate_question(&rec, &mut registry, "t").is_ok());
        let err = uc.curate_question(&rec, &mut registry, "t").unwrap_err();
        assert_eq!(err, Rejection::Duplicate);
        assert_eq!(err.to_string(), "Duplicate question");
    }

    #[test]
    fn test_standard_checks() {
        let mut rec = record("q1", ADD, "7 drops", &["3 drops", "7 drops"]);
        rec.standard = "OA-1".into();
        assert_eq!(curate(&rec).unwrap_err(), Rejection::StandardFormat);

        rec.standard = "2.OA.A.1".into();
        assert_eq!(curate(&rec).unwrap_err(), Rejection::StandardAlignment);

        rec.standard = "1.NF.A.1".into();
        rec.domain   = "NF".into();
        assert_eq!(curate(&rec).unwrap_err().to_string(), "Invalid domain NF for grade 1");
    }

    #[test]
    fn test_numbers_above_ceiling_rejected() {
        let rec = record("q1", "Mia adds 30 drops and 4 drops", "34 drops", &["34 drops", "30 drops"]);
        assert_eq!(curate(&rec).unwrap_err().to_string(), "Numbers exceed grade 1 limits");
    }

    #[test]
    fn test_long_question_rejected() {
        let text = format!("{ADD} {}", "very ".repeat(30));
        let rec  = record("q1", &text, "7 drops", &["7 drops", "3 drops"]);
        assert_eq!(curate(&rec).unwrap_err(), Rejection::TooLong);
    }

    #[test]
    fn test_choice_count_rejected() {
        let rec = record("q1", ADD, "7 drops", &["1", "2", "3", "7", "9"]);
        assert_eq!(curate(&rec).unwrap_err().to_string(), "Invalid choice count 5");
        let rec = record("q2", ADD, "7 drops", &[]);
        assert_eq!(curate(&rec).unwrap_err(), Rejection::ChoiceCount(0));
    }

    #[test]
    fn test_math_error_rejected_with_diagnostic() {
        let rec = record("q1", ADD, "8 drops", &["8 drops", "3 drops"]);
        assert_eq!(
            curate(&rec).unwrap_err().to_string(),
            "Mathematical error: Math error: addition of [3, 4] should be 7, got 8"
        );
    }

    #[test]
    fn test_execute_sorts_and_reports() {
        let mut late = record("q2", ADD, "7 drops", &["3 drops", "19 drops", "7 drops"]);
        late.grade    = 2;
        late.standard = "2.OA.A.1".into();
        let early     = record("q1", "Add 2 and 3 potions", "5 potions", &["5 potions", "9 potions"]);
        let broken    = record("q3", ADD, "9 drops", &["9 drops", "3 drops"]);
        let source    = vec![late, early.clone(), broken, early];

        let dir   = tempfile::tempdir().unwrap();
        let store = CollectionStore::new(dir.path().join("bank.json"));
        let mut registry = DuplicateRegistry::new();

        let report = use_case().execute(&source, &store, &mut registry).unwrap();
        assert_eq!(report.total_processed, 4);
        assert_eq!(report.accepted, 2);
        assert_eq!(report.deleted["Duplicate question"], 1);
        assert_eq!(report.deleted_total(), 2);

        let bank = store.load().unwrap();
        let ids: Vec<&str> = bank.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2"]);
    }
}
