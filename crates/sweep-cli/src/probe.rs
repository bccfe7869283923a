// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `sweep probe`: one solver evaluation.

use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;
use sweep_geom::{sweep, sweep_axes, Aabb, SweepOutcome};
use sweep_math::{Axis, Vec3};

use crate::cli::{OutputFormat, ProbeArgs};
use crate::report::fmt3;

#[derive(Serialize)]
struct AxisRow {
    axis: &'static str,
    entry_distance: f32,
    exit_distance: f32,
    entry_time: f32,
    exit_time: f32,
}

#[derive(Serialize)]
struct ProbeReport {
    collision: bool,
    time: f32,
    axis: Option<&'static str>,
    normal: [f32; 3],
    axes: Vec<AxisRow>,
}

fn aabb(center: [f32; 3], half: [f32; 3]) -> Aabb {
    Aabb::from_center_half_extents(Vec3::from(center), half[0], half[1], half[2])
}

pub(crate) fn probe(args: &ProbeArgs) -> Result<()> {
    let moving = aabb(args.moving_center, args.moving_half);
    let stationary = aabb(args.stationary_center, args.stationary_half);
    let displacement = Vec3::from(args.displacement);

    let outcome = sweep(&moving, &stationary, displacement);
    let axes = Axis::ALL
        .into_iter()
        .zip(sweep_axes(&moving, &stationary, displacement))
        .map(|(axis, a)| AxisRow {
            axis: axis.name(),
            entry_distance: a.entry_distance,
            exit_distance: a.exit_distance,
            entry_time: a.entry_time,
            exit_time: a.exit_time,
        })
        .collect();
    let report = ProbeReport {
        collision: outcome.is_collision(),
        time: outcome.time_or_sentinel(),
        axis: outcome.contact().map(|c| c.axis().name()),
        normal: outcome.normal().to_array(),
        axes,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_tables(&report, &outcome),
    }
    Ok(())
}

fn print_tables(report: &ProbeReport, outcome: &SweepOutcome) {
    let mut per_axis = Table::new();
    per_axis.set_header(vec!["axis", "entry dist", "exit dist", "entry t", "exit t"]);
    for row in &report.axes {
        per_axis.add_row(vec![
            row.axis.to_owned(),
            format!("{:.4}", row.entry_distance),
            format!("{:.4}", row.exit_distance),
            format!("{:.4}", row.entry_time),
            format!("{:.4}", row.exit_time),
        ]);
    }
    println!("{per_axis}");

    let mut result = Table::new();
    result.set_header(vec!["result", "time", "axis", "normal"]);
    let verdict = match outcome {
        SweepOutcome::Collision(_) => "collision",
        SweepOutcome::NoCollision => "no collision",
    };
    result.add_row(vec![
        verdict.to_owned(),
        format!("{:.4}", report.time),
        report.axis.unwrap_or("-").to_owned(),
        fmt3(report.normal),
    ]);
    println!("{result}");
}
