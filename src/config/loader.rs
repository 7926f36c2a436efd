//! Configuration loader for airport control.
//!
//! This module provides the main entry point for loading airport
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::airport::Airport;
use crate::error::{AirportError, AirportResult};

use super::types::AirportConfig;

/// Source label used in errors for configuration parsed from memory.
const INLINE_SOURCE: &str = "<inline>";

/// Loads and provides access to airport configuration.
///
/// # Example
///
/// ```no_run
/// use airport_control::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/airport.yaml")?;
/// let airport = loader.build_airport()?;
/// println!("Capacity: {}", airport.capacity());
/// # Ok::<(), airport_control::error::AirportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AirportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The capacity is zero (`InvalidCapacity`)
    pub fn load<P: AsRef<Path>>(path: P) -> AirportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AirportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, path_str.clone())?;
        info!(
            path = %path_str,
            capacity = loader.config.capacity,
            seeded = loader.config.weather.seed.is_some(),
            "Loaded airport configuration"
        );
        Ok(loader)
    }

    /// Parses configuration held in memory.
    ///
    /// ```
    /// use airport_control::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml("capacity: 3")?;
    /// assert_eq!(loader.config().capacity, 3);
    /// # Ok::<(), airport_control::error::AirportError>(())
    /// ```
    pub fn from_yaml(yaml: &str) -> AirportResult<Self> {
        Self::parse(yaml, INLINE_SOURCE.to_string())
    }

    fn parse(content: &str, path: String) -> AirportResult<Self> {
        let config: AirportConfig =
            serde_yaml::from_str(content).map_err(|e| AirportError::ConfigParseError {
                path,
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AirportConfig {
        &self.config
    }

    /// Builds an airport from the loaded configuration.
    pub fn build_airport(&self) -> AirportResult<Airport> {
        Airport::from_config(&self.config)
    }
}
