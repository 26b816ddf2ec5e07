// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `curate`  — curates a JSON question bank and prints a report
//   2. `improve` — reads one JSON request, prints one JSON response
//
// `improve` owns stdout for its JSON; logs go to stderr.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, CurateArgs, ImproveArgs};
use std::io::Read;
use std::path::Path;

/// The main CLI struct. clap generates the parser from the fields.
#[derive(Parser, Debug)]
#[command(
    name = "word-problem-curator",
    version = "0.1.0",
    about = "Validate arithmetic word problems and generate plausible wrong answers."
)]
pub struct Cli {
    /// The subcommand to run (curate or improve)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route to the matching use case; the CLI never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Curate(args)  => run_curate(args),
            Commands::Improve(args) => run_improve(args),
        }
    }
}

/// Handles the `curate` subcommand.
fn run_curate(args: CurateArgs) -> Result<()> {
    use crate::application::curate_use_case::CurateUseCase;
    use crate::data::loader::JsonQuestionLoader;
    use crate::infra::{collection_store::CollectionStore, registry::DuplicateRegistry};

    tracing::info!("Curating question bank: {}", args.input);

    let mut use_case = CurateUseCase::new(args.into());
    let source       = JsonQuestionLoader::new(&use_case.config().input);
    let sink         = CollectionStore::new(&use_case.config().output);
    let report_path  = use_case.config().report.clone();
    let mut registry = DuplicateRegistry::new();

    let report = use_case.execute(&source, &sink, &mut registry)?;
    tracing::debug!("{} distinct questions seen", registry.len());

    println!("{}", report.render());
    if let Some(path) = report_path {
        report.save_json(Path::new(&path))?;
        println!("Report saved to {path}");
    }
    Ok(())
}

/// Handles the `improve` subcommand.
/// Input problems become a failed response, never a non-zero exit.
fn run_improve(args: ImproveArgs) -> Result<()> {
    use crate::application::improve_use_case::{ImproveConfig, ImproveUseCase};

    let config: ImproveConfig = args.into();
    let mut use_case          = ImproveUseCase::new(&config);

    let response = match read_request(config.input.as_deref()) {
        Ok(raw) => use_case.respond(&raw),
        Err(e)  => crate::domain::question::ImproveResponse::failed(format!("{e:#}")),
    };

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn read_request(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read request file '{path}'")),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Cannot read request from stdin")?;
            Ok(raw)
        }
    }
}
