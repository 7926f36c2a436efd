//! The runway operations an airport performs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A weather-gated runway operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Bringing a plane into the hangar.
    Land,
    /// Releasing a plane from the hangar.
    TakeOff,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Land => write!(f, "land"),
            Operation::TakeOff => write!(f, "take off"),
        }
    }
}
