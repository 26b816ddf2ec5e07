#![allow(dead_code)]

mod cli;
mod application;
mod domain;
mod data;
mod engine;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // stderr, so `improve` can print clean JSON on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("word_problem_curator=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
