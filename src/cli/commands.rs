// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `curate` and `improve`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, u64, UnitStrategy)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::curate_use_case::CurateConfig;
use crate::application::improve_use_case::ImproveConfig;
use crate::engine::units::UnitStrategy;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate, improve and relabel a whole question bank
    Curate(CurateArgs),

    /// Regenerate the distractors of one question (JSON in, JSON out)
    Improve(ImproveArgs),
}

/// All arguments for the `curate` command.
#[derive(Args, Debug)]
pub struct CurateArgs {
    /// JSON question bank to read
    #[arg(long, default_value = "data/questions.json")]
    pub input: String,

    /// Where to write the curated bank
    #[arg(long, default_value = "output/curated_questions.json")]
    pub output: String,

    /// Also save the curation report as JSON here
    #[arg(long)]
    pub report: Option<String>,

    /// Questions with more words than this are rejected
    #[arg(long, default_value_t = 30)]
    pub max_words: usize,

    /// How the answer's unit word is found: vocabulary or first_word
    #[arg(long, default_value = "vocabulary")]
    pub unit_strategy: UnitStrategy,

    /// Seed for reproducible distractor order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tier recorded in every question's metadata
    #[arg(long, default_value_t = 1)]
    pub tier: u8,
}

/// The boundary between Layer 1 and Layer 2:
/// the application layer never sees clap types.
impl From<CurateArgs> for CurateConfig {
    fn from(a: CurateArgs) -> Self {
        CurateConfig {
            input:         a.input,
            output:        a.output,
            report:        a.report,
            max_words:     a.max_words,
            unit_strategy: a.unit_strategy,
            seed:          a.seed,
            tier:          a.tier,
        }
    }
}

/// All arguments for the `improve` command
#[derive(Args, Debug)]
pub struct ImproveArgs {
    /// Request file; reads stdin when omitted
    #[arg(long)]
    pub input: Option<String>,

    /// How the answer's unit word is found: vocabulary or first_word
    #[arg(long, default_value = "vocabulary")]
    pub unit_strategy: UnitStrategy,

    /// Seed for reproducible distractors and choice order
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<ImproveArgs> for ImproveConfig {
    fn from(a: ImproveArgs) -> Self {
        ImproveConfig {
            input:         a.input,
            unit_strategy: a.unit_strategy,
            seed:          a.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_curate_defaults() {
        let cli = Cli::try_parse_from(["word-problem-curator", "curate"]).unwrap();
        let Commands::Curate(args) = cli.command else { panic!("expected curate") };
        let config: CurateConfig = args.into();

        assert_eq!(config.max_words, 30);
        assert_eq!(config.unit_strategy, UnitStrategy::Vocabulary);
        assert_eq!(config.report, None);
    }

    #[test]
    fn test_improve_flags() {
        let cli = Cli::try_parse_from([
            "word-problem-curator", "improve",
            "--unit-strategy", "first_word",
            "--seed", "9",
        ])
        .unwrap();
        let Commands::Improve(args) = cli.command else { panic!("expected improve") };
        let config: ImproveConfig = args.into();

        assert_eq!(config.unit_strategy, UnitStrategy::FirstWord);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.input, None);
    }

    #[test]
    fn test_unknown_unit_strategy_rejected() {
        let parsed = Cli::try_parse_from(["word-problem-curator", "improve", "--unit-strategy", "magic"]);
        assert!(parsed.is_err());
    }
}
