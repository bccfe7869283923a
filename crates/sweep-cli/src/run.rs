// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `sweep run`.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use sweep_math::Vec3;
use sweep_sim::{Clock, FrameTransforms, ManualClock, PresentPort, SimConfig, Simulation, SystemClock};
use tracing::{debug, info};

use crate::cli::{OutputFormat, RunArgs};
use crate::config_cmd::load_config;
use crate::report::RunSummary;

/// Headless port: counts frames and keeps the latest title.
#[derive(Default)]
struct SummaryPort {
    presented: u64,
    title: Option<String>,
}

impl PresentPort for SummaryPort {
    fn present(&mut self, frame: &FrameTransforms) {
        self.presented += 1;
        debug!(frame = self.presented, bodies = frame.len(), "present");
    }

    fn set_title(&mut self, title: &str) {
        info!("{title}");
        self.title = Some(title.to_owned());
    }
}

pub(crate) fn run(args: &RunArgs, config_dir: Option<&Path>) -> Result<()> {
    if !args.frame_rate.is_finite() || args.frame_rate <= 0.0 {
        bail!("--frame-rate must be a positive number, got {}", args.frame_rate);
    }
    let mut config = load_config(config_dir)?;
    if args.no_boundary {
        config.boundary = None;
    }

    let summary = if args.realtime {
        let clock = SystemClock::new();
        let period = Duration::from_secs_f64(1.0 / args.frame_rate);
        let sim = build(&config, args, clock.now())?;
        drive(sim, &clock, args.frames, || std::thread::sleep(period))
    } else {
        let clock = ManualClock::new(0.0);
        let sim = build(&config, args, clock.now())?;
        let dt = 1.0 / args.frame_rate;
        drive(sim, &clock, args.frames, || clock.advance(dt))
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Table => {
            for table in summary.tables() {
                println!("{table}");
            }
        }
    }
    Ok(())
}

fn build(config: &SimConfig, args: &RunArgs, start: f64) -> Result<Simulation> {
    let mut sim = config.build(start).context("invalid simulation config")?;
    for (index, velocity) in &args.set_velocity {
        let world = sim.world_mut();
        let id = world.resolve(*index).context("--set-velocity")?;
        world.set_velocity(id, Vec3::from(*velocity))?;
    }
    info!(
        bodies = sim.world().len(),
        step = config.physics_step,
        frames = args.frames,
        "starting run"
    );
    Ok(sim)
}

fn drive<C: Clock>(
    mut sim: Simulation,
    clock: &C,
    frames: u32,
    mut pace: impl FnMut(),
) -> RunSummary {
    let mut port = SummaryPort::default();
    let mut summary = RunSummary::default();
    for _ in 0..frames {
        pace();
        let report = sim.frame(clock, &mut port);
        summary.absorb(&report);
    }
    summary.last_title = port.title;
    summary.finish(sim.world());
    summary
}
