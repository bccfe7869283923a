// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serializable run summaries and their table rendering.

use comfy_table::Table;
use serde::Serialize;
use sweep_sim::{BodyKind, ContactEvent, FrameReport, World};

#[derive(Debug, Serialize)]
pub(crate) struct BodyRow {
    pub id: usize,
    pub kind: BodyKind,
    pub position: [f32; 3],
    pub velocity: [f32; 3],
}

#[derive(Debug, Serialize)]
pub(crate) struct ContactRow {
    pub tick: u64,
    pub moving: usize,
    pub stationary: usize,
    pub time: f32,
    pub axis: &'static str,
    pub normal: [f32; 3],
    pub velocity_after: [f32; 3],
}

impl From<&ContactEvent> for ContactRow {
    fn from(event: &ContactEvent) -> Self {
        Self {
            tick: event.tick.index(),
            moving: event.moving.index(),
            stationary: event.stationary.index(),
            time: event.contact.time(),
            axis: event.contact.axis().name(),
            normal: event.contact.normal().to_array(),
            velocity_after: event.velocity_after.to_array(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct RunSummary {
    pub frames: u32,
    pub ticks: u64,
    pub clamped_frames: u32,
    pub boundary_reflections: usize,
    pub last_title: Option<String>,
    pub contacts: Vec<ContactRow>,
    pub bodies: Vec<BodyRow>,
}

impl RunSummary {
    pub fn absorb(&mut self, frame: &FrameReport) {
        self.frames += 1;
        self.ticks += u64::from(frame.ticks);
        self.clamped_frames += u32::from(frame.clamped);
        self.boundary_reflections += frame.reflections.len();
        self.contacts.extend(frame.contacts.iter().map(ContactRow::from));
    }

    pub fn finish(&mut self, world: &World) {
        self.bodies = world
            .bodies()
            .map(|(id, body)| BodyRow {
                id: id.index(),
                kind: body.kind(),
                position: body.position().to_array(),
                velocity: body.velocity().to_array(),
            })
            .collect();
    }

    pub fn tables(&self) -> Vec<Table> {
        let mut totals = Table::new();
        totals.set_header(vec!["frames", "ticks", "clamped", "boundary flips", "title"]);
        totals.add_row(vec![
            self.frames.to_string(),
            self.ticks.to_string(),
            self.clamped_frames.to_string(),
            self.boundary_reflections.to_string(),
            self.last_title.clone().unwrap_or_default(),
        ]);

        let mut bodies = Table::new();
        bodies.set_header(vec!["id", "kind", "position", "velocity"]);
        for b in &self.bodies {
            bodies.add_row(vec![
                b.id.to_string(),
                kind_name(b.kind).to_owned(),
                fmt3(b.position),
                fmt3(b.velocity),
            ]);
        }

        let mut contacts = Table::new();
        contacts.set_header(vec!["tick", "moving", "stationary", "time", "axis", "normal"]);
        for c in &self.contacts {
            contacts.add_row(vec![
                c.tick.to_string(),
                c.moving.to_string(),
                c.stationary.to_string(),
                format!("{:.4}", c.time),
                c.axis.to_owned(),
                fmt3(c.normal),
            ]);
        }
        vec![totals, bodies, contacts]
    }
}

pub(crate) fn kind_name(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Moving => "moving",
        BodyKind::Stationary => "stationary",
    }
}

pub(crate) fn fmt3(v: [f32; 3]) -> String {
    format!("({:.4}, {:.4}, {:.4})", v[0], v[1], v[2])
}
