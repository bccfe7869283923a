// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Frame loop driven by a manual clock and a recording port.

use sweep_math::Vec3;
use sweep_sim::{
    BodyKind, BodySpec, Clock, FrameTransforms, ManualClock, NullPort, PresentPort, SimConfig,
};

#[derive(Default)]
struct RecordingPort {
    frames: Vec<FrameTransforms>,
    titles: Vec<String>,
}

impl PresentPort for RecordingPort {
    fn present(&mut self, frame: &FrameTransforms) {
        self.frames.push(frame.clone());
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_owned());
    }
}

#[test]
fn every_frame_presents_and_fps_title_updates_once_per_window() {
    let mut sim = SimConfig::default().build(0.0).unwrap();
    let mut port = RecordingPort::default();
    let mut ticks = 0;
    for frame in 1..=70 {
        let report = sim.frame_at(f64::from(frame) / 60.0, &mut port);
        ticks += report.ticks;
        if frame == 61 {
            assert_eq!(report.fps.map(|s| s.frames), Some(60));
        } else {
            assert!(report.fps.is_none(), "frame {frame}");
        }
    }
    assert_eq!(port.frames.len(), 70);
    assert!(port.frames.iter().all(|f| f.len() == 2));
    // 60 frames over 61/60 s.
    assert_eq!(port.titles, vec!["FPS: 59".to_owned()]);
    assert_eq!(sim.frames(), 70);
    // 70/60 s at 0.012 s per tick.
    assert_eq!(ticks, 97);
    assert_eq!(sim.world().tick().index(), 97);
}

#[test]
fn gated_frames_present_without_ticking() {
    let clock = ManualClock::new(0.0);
    let mut sim = SimConfig::default().build(clock.now()).unwrap();
    let mut port = RecordingPort::default();

    clock.advance(0.005);
    let a = sim.frame(&clock, &mut port);
    clock.advance(0.005);
    let b = sim.frame(&clock, &mut port);
    assert_eq!((a.ticks, b.ticks), (0, 0));
    assert_eq!(port.frames.len(), 2);
    assert_eq!(port.frames[0], port.frames[1]);
    assert_eq!(sim.scheduler().accumulated(), 0.0);

    clock.advance(0.005);
    let c = sim.frame(&clock, &mut port);
    assert_eq!(c.ticks, 1);
    assert!(sim.scheduler().accumulated() > 0.0);
    assert_ne!(port.frames[1], port.frames[2]);
}

#[test]
fn stalled_clock_is_clamped() {
    let clock = ManualClock::new(0.0);
    let mut sim = SimConfig::default().build(0.0).unwrap();
    clock.set(5.0);
    let report = sim.frame(&clock, &mut NullPort);
    assert!(report.clamped);
    assert_eq!(report.ticks, 20);
}

#[test]
fn presented_matrices_follow_body_positions() {
    let cfg = SimConfig {
        boundary: None,
        spin_degrees: [0.0; 3],
        bodies: vec![BodySpec {
            kind: BodyKind::Moving,
            position: [0.0, 0.0, 0.0],
            half_extents: [0.1, 0.1, 0.1],
            velocity: [1.0, 0.0, 0.0],
            orientation_degrees: [0.0; 3],
        }],
        ..SimConfig::default()
    };
    let mut sim = cfg.build(0.0).unwrap();
    let mut port = RecordingPort::default();
    sim.frame_at(0.5, &mut port);
    let id = sim.world().resolve(0).unwrap();
    let matrix = port.frames[0].get(id).copied().unwrap();
    let body = sim.world().body(id).unwrap();
    assert_eq!(matrix.translation_part(), body.position());
    assert!((body.position().x() - 0.012 * 20.0).abs() < 1e-5);
    assert_eq!(body.position().y(), 0.0);
    assert_eq!(body.velocity(), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn falling_box_scenario_through_the_frame_loop() {
    let cfg = SimConfig {
        boundary: None,
        bodies: vec![
            BodySpec {
                kind: BodyKind::Stationary,
                position: [0.0, 0.0, 0.0],
                half_extents: [0.1, 0.1, 0.1],
                velocity: [0.0; 3],
                orientation_degrees: [0.0; 3],
            },
            BodySpec {
                kind: BodyKind::Moving,
                position: [0.0, 0.0, 5.0],
                half_extents: [0.1, 0.1, 0.1],
                velocity: [0.0, 0.0, -50.0],
                orientation_degrees: [0.0; 3],
            },
        ],
        ..SimConfig::default()
    };
    let clock = ManualClock::new(0.0);
    let mut sim = cfg.build(0.0).unwrap();
    let mut contacts = Vec::new();
    for _ in 0..120 {
        clock.advance(1.0 / 60.0);
        contacts.extend(sim.frame(&clock, &mut NullPort).contacts);
    }
    assert_eq!(contacts.len(), 1);
    let mover = sim.world().resolve(1).unwrap();
    assert_eq!(contacts[0].moving, mover);
    assert_eq!(contacts[0].velocity_after.z(), 50.0);
    assert!(sim.world().body(mover).unwrap().position().z() > 5.0);
}
