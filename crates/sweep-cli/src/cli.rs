// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::parse::{parse_body_velocity, parse_vec3};

#[derive(Parser)]
#[command(
    name = "sweep",
    version,
    about = "Swept AABB collision sandbox",
    disable_help_subcommand = true
)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read and write config here instead of the platform config directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Step the configured scene headless and summarize what happened.
    Run(RunArgs),
    /// Sweep one box against another and print the contact.
    Probe(ProbeArgs),
    /// Manage the stored simulation config.
    Config(ConfigArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable tables.
    Table,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Args)]
pub(crate) struct RunArgs {
    /// Number of frames to present.
    #[arg(long, default_value_t = 600)]
    pub frames: u32,

    /// Frames per second of the synthetic clock (or the pacing target with
    /// `--realtime`).
    #[arg(long, default_value_t = 60.0)]
    pub frame_rate: f64,

    /// Pace frames against the wall clock instead of a synthetic one.
    #[arg(long)]
    pub realtime: bool,

    /// Override a body's initial velocity, e.g. `1=0,0,-50` (repeatable).
    #[arg(long = "set-velocity", value_name = "ID=X,Y,Z", value_parser = parse_body_velocity)]
    pub set_velocity: Vec<(usize, [f32; 3])>,

    /// Disable the reflecting boundary for this run.
    #[arg(long)]
    pub no_boundary: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub(crate) struct ProbeArgs {
    /// Centre of the moving box.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub moving_center: [f32; 3],

    /// Half-extents of the moving box.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub moving_half: [f32; 3],

    /// Centre of the stationary box.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub stationary_center: [f32; 3],

    /// Half-extents of the stationary box.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub stationary_half: [f32; 3],

    /// Displacement of the moving box over the tick.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub displacement: [f32; 3],

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub(crate) struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Write the default (demo) config.
    Init {
        /// Overwrite an existing config.
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config as JSON.
    Show,
}
