// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::print_stdout, clippy::print_stderr)]

//! `sweep`: headless driver for the swept AABB simulation.
//!
//! Subcommands:
//! - `run` steps the configured scene for a number of frames and prints a
//!   summary of bodies and contacts;
//! - `probe` evaluates the solver once for boxes given on the command line;
//! - `config init|show` writes or prints the stored simulation config.

mod cli;
mod config_cmd;
mod parse;
mod probe;
mod report;
mod run;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => run::run(&args, cli.config_dir.as_deref()),
        Commands::Probe(args) => probe::probe(&args),
        Commands::Config(args) => config_cmd::config(&args, cli.config_dir.as_deref()),
    }
}

/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
