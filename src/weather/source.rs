//! The weather report and the trait that produces it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The outcome of a weather check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    /// Planes may land and take off.
    Sunshine,
    /// All runway operations are refused.
    Stormy,
}

impl Weather {
    /// Returns true for stormy weather.
    pub fn is_stormy(&self) -> bool {
        *self == Weather::Stormy
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weather::Sunshine => write!(f, "Sunshine"),
            Weather::Stormy => write!(f, "Stormy"),
        }
    }
}

/// Anything an airport can consult before letting a plane use the runway.
///
/// Each call to [`check`](WeatherSource::check) is a fresh report; sources
/// are free to change their answer between calls.
pub trait WeatherSource {
    /// Reports the current weather.
    fn check(&mut self) -> Weather;
}

impl<W: WeatherSource + ?Sized> WeatherSource for Box<W> {
    fn check(&mut self) -> Weather {
        (**self).check()
    }
}

impl<W: WeatherSource + ?Sized> WeatherSource for &mut W {
    fn check(&mut self) -> Weather {
        (**self).check()
    }
}
