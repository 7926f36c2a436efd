//! Weather checks that gate landings and take-offs.
//!
//! Airports never roll dice themselves: they ask a [`WeatherSource`]. The
//! default [`WeatherSystem`] reports sunshine or a storm with equal odds,
//! while [`FixedWeather`] makes an airport deterministic.
//!
//! # Example
//!
//! ```
//! use airport_control::weather::{FixedWeather, Weather, WeatherSource};
//!
//! let mut weather = FixedWeather::new(Weather::Sunshine);
//! assert_eq!(weather.check(), Weather::Sunshine);
//!
//! weather.set(Weather::Stormy);
//! assert!(weather.check().is_stormy());
//! ```

mod source;
mod system;

pub use source::{Weather, WeatherSource};
pub use system::{FixedWeather, WeatherSystem};
