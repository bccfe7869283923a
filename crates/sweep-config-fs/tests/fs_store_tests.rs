// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use sweep_app_core::config::{ConfigError, ConfigService, ConfigStore};
use sweep_app_core::config_port::ConfigPort;
use sweep_config_fs::FsConfigStore;
use sweep_sim::SimConfig;

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path()).unwrap();
    assert!(matches!(store.load_raw("sim"), Err(ConfigError::NotFound)));
}

#[test]
fn at_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FsConfigStore::at(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.path_for("sim"), nested.join("sim.json"));
}

#[test]
fn service_round_trip_writes_key_json() {
    let dir = tempfile::tempdir().unwrap();
    let svc = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());
    let cfg = SimConfig {
        spin_degrees: [0.0, 2.0, 0.0],
        ..SimConfig::default()
    };
    svc.save_sim_config(&cfg).unwrap();
    assert!(dir.path().join("sim.json").is_file());
    assert_eq!(svc.effective_sim_config().unwrap(), cfg);
}
