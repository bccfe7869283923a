// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port shared across sweep front ends.

use sweep_sim::SimConfig;

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Store key under which the simulation config lives.
pub const SIM_CONFIG_KEY: &str = "sim";

/// Config-facing port for loading/saving the simulation config.
pub trait ConfigPort {
    /// Load the stored config; `Ok(None)` if nothing has been saved.
    fn load_sim_config(&self) -> Result<Option<SimConfig>, ConfigError>;

    /// Persist `config`.
    fn save_sim_config(&self, config: &SimConfig) -> Result<(), ConfigError>;

    /// Stored config, or the defaults when none is stored, validated.
    fn effective_sim_config(&self) -> Result<SimConfig, ConfigError> {
        let config = self.load_sim_config()?.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }
}

impl<S: ConfigStore> ConfigPort for ConfigService<S> {
    fn load_sim_config(&self) -> Result<Option<SimConfig>, ConfigError> {
        self.load(SIM_CONFIG_KEY)
    }

    fn save_sim_config(&self, config: &SimConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.save(SIM_CONFIG_KEY, config)
    }
}
