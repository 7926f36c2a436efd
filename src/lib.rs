//! Airport control
//!
//! This crate models an airport that lets planes land and take off, subject
//! to the weather and to the capacity of its hangar. Airports consult an
//! injectable weather source before every runway operation, so behaviour is
//! random by default and fully deterministic when a fixed source is supplied.

#![warn(missing_docs)]

pub mod airport;
pub mod config;
pub mod error;
pub mod models;
pub mod weather;

pub use airport::{Airport, DEFAULT_CAPACITY};
pub use error::{AirportError, AirportResult};
pub use models::{Plane, PlaneId};
pub use weather::{FixedWeather, Weather, WeatherSource, WeatherSystem};
