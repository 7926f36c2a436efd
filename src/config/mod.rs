//! Configuration loading for airport control.
//!
//! This module loads airport settings (name, hangar capacity and weather
//! seed) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use airport_control::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/airport.yaml").unwrap();
//! println!("Capacity: {}", config.config().capacity);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AirportConfig, WeatherConfig};
