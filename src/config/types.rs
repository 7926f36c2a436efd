//! Configuration types for airport control.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::airport::DEFAULT_CAPACITY;
use crate::error::{AirportError, AirportResult};
use crate::weather::WeatherSystem;

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Weather settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Seed for reproducible weather; entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl WeatherConfig {
    /// Builds the weather system these settings describe.
    pub fn build(&self) -> WeatherSystem {
        match self.seed {
            Some(seed) => WeatherSystem::seeded(seed),
            None => WeatherSystem::new(),
        }
    }
}

/// Settings for a single airport.
///
/// Every field is optional in YAML:
///
/// ```yaml
/// name: Heathrow
/// capacity: 20
/// weather:
///   seed: 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportConfig {
    /// Display name of the airport.
    #[serde(default)]
    pub name: Option<String>,
    /// Number of planes the hangar holds.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Weather settings.
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AirportConfig {
    /// Checks values that deserialize fine but make no sense.
    pub fn validate(&self) -> AirportResult<()> {
        if self.capacity == 0 {
            return Err(AirportError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for AirportConfig {
    fn default() -> Self {
        Self {
            name: None,
            capacity: DEFAULT_CAPACITY,
            weather: WeatherConfig::default(),
        }
    }
}
