// ============================================================
// Layer 6 — Curation Report
// ============================================================
// Counts what happened to every question in a batch run.
//
// Recorded per run:
//   - total_processed:        records read from the bank
//   - deleted:                rejection reason → count
//   - accepted:               questions written to the output
//   - improved_distractors:   trivial choice sets regenerated
//   - kept_original_choices:  trivial sets that could not be
//                             regenerated (no answer number, or
//                             the grade ceiling left too few values)
//   - by_grade / by_domain:   accepted counts
//
// Example rendering:
//   Total questions processed: 120
//   Accepted questions:        104
//   ...
//   Retention rate: 86.7%
//
// The same data can be saved as JSON next to the output bank.
//
// Reference: Rust Book §8 (Hash Maps)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::{fs, path::Path};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurationReport {
    pub total_processed:       usize,
    pub accepted:              usize,
    pub improved_distractors:  usize,
    pub kept_original_choices: usize,
    pub deleted:               BTreeMap<String, usize>,
    pub by_grade:              BTreeMap<u8, usize>,
    pub by_domain:             BTreeMap<String, usize>,
}

impl CurationReport {
    pub fn new(total_processed: usize) -> Self {
        Self { total_processed, ..Self::default() }
    }

    pub fn record_rejection(&mut self, reason: &str) {
        *self.deleted.entry(reason.to_string()).or_insert(0) += 1;
    }

    pub fn record_accepted(&mut self, grade: u8, domain: &str) {
        self.accepted += 1;
        *self.by_grade.entry(grade).or_insert(0) += 1;
        *self.by_domain.entry(domain.to_string()).or_insert(0) += 1;
    }

    pub fn record_improved(&mut self) {
        self.improved_distractors += 1;
    }

    pub fn record_kept_original(&mut self) {
        self.kept_original_choices += 1;
    }

    pub fn deleted_total(&self) -> usize {
        self.deleted.values().sum()
    }

    /// Accepted share of processed questions, in percent.
    /// An empty run retains 0%.
    pub fn retention_rate(&self) -> f64 {
        if self.total_processed == 0 {
            return 0.0;
        }
        self.accepted as f64 * 100.0 / self.total_processed as f64
    }

    /// Deletion reasons, most frequent first (ties by name)
    pub fn deletion_reasons(&self) -> Vec<(&str, usize)> {
        let mut reasons: Vec<(&str, usize)> = self
            .deleted
            .iter()
            .map(|(reason, count)| (reason.as_str(), *count))
            .collect();
        reasons.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        reasons
    }

    /// Human-readable summary for the terminal
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Save the report as pretty JSON, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

        tracing::debug!("Saved curation report to '{}'", path.display());
        Ok(())
    }
}

impl fmt::Display for CurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(72);

        writeln!(f, "{rule}")?;
        writeln!(f, "WORD PROBLEM CURATION REPORT")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total questions processed: {}", self.total_processed)?;
        writeln!(f, "Accepted questions:        {}", self.accepted)?;
        writeln!(f, "Questions deleted:         {}", self.deleted_total())?;
        writeln!(f, "Distractors improved:      {}", self.improved_distractors)?;
        writeln!(f, "Original choices kept:     {}", self.kept_original_choices)?;
        writeln!(f, "\nRetention rate: {:.1}%", self.retention_rate())?;

        writeln!(f, "\nDeletion reasons:")?;
        for (reason, count) in self.deletion_reasons() {
            writeln!(f, "  - {reason}: {count}")?;
        }

        writeln!(f, "\nFinal count by grade:")?;
        for (grade, count) in &self.by_grade {
            writeln!(f, "  - Grade {grade}: {count}")?;
        }

        writeln!(f, "\nFinal count by domain:")?;
        for (domain, count) in &self.by_domain {
            writeln!(f, "  - {domain}: {count}")?;
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retention_rate() {
        let mut r = CurationReport::new(4);
        r.record_accepted(1, "OA");
        r.record_accepted(2, "NBT");
        r.record_accepted(2, "OA");
        r.record_rejection("Duplicate question");
        assert!((r.retention_rate() - 75.0).abs() < 1e-9);
        assert_eq!(r.by_grade[&2], 2);
        assert_eq!(r.by_domain["OA"], 2);
    }

    #[test]
    fn test_empty_run_retains_nothing() {
        assert_eq!(CurationReport::new(0).retention_rate(), 0.0);
    }

    #[test]
    fn test_deletion_reasons_sorted_by_count() {
        let mut r = CurationReport::new(5);
        r.record_rejection("Question too long");
        r.record_rejection("Duplicate question");
        r.record_rejection("Duplicate question");
        assert_eq!(
            r.deletion_reasons(),
            vec![("Duplicate question", 2), ("Question too long", 1)]
        );
        assert_eq!(r.deleted_total(), 3);
    }

    #[test]
    fn test_render_mentions_counts() {
        let mut r = CurationReport::new(2);
        r.record_accepted(3, "NF");
        r.record_improved();
        let text = r.render();
        assert!(text.contains("Total questions processed: 2"));
        assert!(text.contains("Distractors improved:      1"));
        assert!(text.contains("Retention rate: 50.0%"));
        assert!(text.contains("  - Grade 3: 1"));
        assert_eq!(text, format!("{r}"));
    }

    #[test]
    fn test_render_lists_reasons_most_frequent_first() {
        let mut r = CurationReport::new(3);
        r.record_rejection("Question too long");
        r.record_rejection("Duplicate question");
        r.record_rejection("Duplicate question");
        let text = r.render();
        let dup  = text.find("  - Duplicate question: 2").unwrap();
        let long = text.find("  - Question too long: 1").unwrap();
        assert!(dup < long);
    }

    #[test]
    fn test_save_json_round_trips() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("run.json");
        let mut r = CurationReport::new(1);
        r.record_rejection("Question too long");
        r.save_json(&path).unwrap();

        let back: CurationReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, r);
    }
}
