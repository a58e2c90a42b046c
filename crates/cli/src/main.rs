//! linkpost CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse arguments**: style names are validated here, before any file
//!    is touched; clap exits with status 2 on a bad value.
//! 2. **Wire observability**: install the `tracing-subscriber` that every
//!    crate's events flow through.
//! 3. **Load configuration**: read the optional `--config` TOML file and
//!    build a validated [`article::Extractor`].
//! 4. **Dispatch**: run `generate`, `inspect` or `styles`.
//!
//! Any error after argument parsing is printed to stderr and exits with
//! status 1.

mod args;
mod commands;
mod config;
mod observability;
mod output;

use std::{path::Path, process::ExitCode};

use anyhow::{Context, Result};
use article::Extractor;
use clap::Parser;

use crate::{
    args::{Cli, Command},
    config::CliConfig,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::init(cli.verbose, cli.log_format);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => commands::generate(args, &extractor(cli.config.as_deref())?),
        Command::Inspect(args) => commands::inspect(args, &extractor(cli.config.as_deref())?),
        Command::Styles => {
            commands::styles();
            Ok(())
        }
    }
}

fn extractor(config_path: Option<&Path>) -> Result<Extractor> {
    let config = CliConfig::load(config_path)?;
    Extractor::new(config.extraction).context("Invalid [extraction] settings")
}
