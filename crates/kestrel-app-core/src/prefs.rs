// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Engine preferences shared by Kestrel tools (input binding + RNG seeding).

use kestrel_input::InputConfig;
use kestrel_math::Prng;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Saved engine preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnginePrefs {
    /// Input sources and default-action suppression.
    pub input: InputConfig,
    /// Fixed seed for gameplay randomness; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl EnginePrefs {
    /// Config key the prefs are stored under.
    pub const KEY: &'static str = "engine_prefs";

    /// Checks nested values serde cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate().map_err(|err| ConfigError::Invalid {
            key: Self::KEY.to_owned(),
            reason: err.to_string(),
        })
    }

    /// Builds the gameplay generator these prefs describe.
    pub fn rng(&self) -> Prng {
        self.rng_seed
            .map_or_else(Prng::from_entropy, Prng::from_seed_u64)
    }

    /// Loads and validates prefs; missing prefs yield the defaults.
    pub fn load<S: ConfigStore>(service: &ConfigService<S>) -> Result<Self, ConfigError> {
        let prefs = service.load::<Self>(Self::KEY)?.unwrap_or_default();
        prefs.validate()?;
        Ok(prefs)
    }

    /// Validates and persists prefs.
    pub fn save<S: ConfigStore>(&self, service: &ConfigService<S>) -> Result<(), ConfigError> {
        self.validate()?;
        service.save(Self::KEY, self)
    }
}
