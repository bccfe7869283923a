// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `sweep config` and config loading shared by other subcommands.

use std::path::Path;

use anyhow::{bail, Context, Result};
use sweep_app_core::config::ConfigService;
use sweep_app_core::config_port::{ConfigPort, SIM_CONFIG_KEY};
use sweep_config_fs::FsConfigStore;
use sweep_sim::SimConfig;
use tracing::info;

use crate::cli::{ConfigAction, ConfigArgs};

fn service(config_dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    }
    .context("failed to open config directory")?;
    Ok(ConfigService::new(store))
}

/// Stored config (or defaults), validated.
pub(crate) fn load_config(config_dir: Option<&Path>) -> Result<SimConfig> {
    let svc = service(config_dir)?;
    let path = svc.store().path_for(SIM_CONFIG_KEY);
    let config = svc
        .effective_sim_config()
        .with_context(|| format!("failed to load {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

pub(crate) fn config(args: &ConfigArgs, config_dir: Option<&Path>) -> Result<()> {
    match args.action {
        ConfigAction::Init { force } => {
            let svc = service(config_dir)?;
            let path = svc.store().path_for(SIM_CONFIG_KEY);
            if !force && path.exists() {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            svc.save_sim_config(&SimConfig::default())
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        ConfigAction::Show => {
            let config = load_config(config_dir)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
