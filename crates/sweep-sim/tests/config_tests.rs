// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
//! JSON shape of `SimConfig`.

use sweep_sim::{BodyKind, SimConfig, SimError, DEFAULT_PHYSICS_STEP};

#[test]
fn partial_document_keeps_defaults() {
    let cfg: SimConfig = serde_json::from_str(r#"{ "physics_step": 0.02, "boundary": null }"#).unwrap();
    assert_eq!(cfg.physics_step, 0.02);
    assert_eq!(cfg.boundary, None);
    assert_eq!(cfg.bodies, SimConfig::default().bodies);
    assert!(cfg.world_settings().boundary.is_none());
}

#[test]
fn bodies_use_snake_case_kinds_and_optional_motion() {
    let json = r#"{
        "bodies": [
            { "kind": "stationary", "position": [0, 0, 0], "half_extents": [1, 1, 1] },
            { "kind": "moving", "position": [3, 0, 0], "half_extents": [0.5, 0.5, 0.5],
              "velocity": [-1, 0, 0] }
        ]
    }"#;
    let cfg: SimConfig = serde_json::from_str(json).unwrap();
    assert_eq!(cfg.physics_step, DEFAULT_PHYSICS_STEP);
    assert_eq!(cfg.bodies[0].kind, BodyKind::Stationary);
    assert_eq!(cfg.bodies[0].velocity, [0.0; 3]);
    assert_eq!(cfg.bodies[1].kind, BodyKind::Moving);
    assert_eq!(cfg.bodies[1].velocity, [-1.0, 0.0, 0.0]);
    assert_eq!(cfg.build_world().unwrap().len(), 2);
}

#[test]
fn unknown_kind_is_rejected() {
    let json = r#"{ "bodies": [ { "kind": "floating", "position": [0,0,0], "half_extents": [1,1,1] } ] }"#;
    assert!(serde_json::from_str::<SimConfig>(json).is_err());
}

#[test]
fn default_round_trips_through_json() {
    let cfg = SimConfig::default();
    let text = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(text.contains("\"moving\""));
    let back: SimConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn invalid_values_fail_at_build_time() {
    let cfg = SimConfig {
        max_frame_delta: 0.001,
        ..SimConfig::default()
    };
    assert!(matches!(cfg.build(0.0), Err(SimError::ClampBelowStep { .. })));
    let cfg = SimConfig {
        normal_epsilon: -1.0,
        ..SimConfig::default()
    };
    assert_eq!(cfg.build_world().err(), Some(SimError::InvalidEpsilon(-1.0)));
}
