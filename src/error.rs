//! Error types for airport control.
//!
//! Every rejected operation surfaces as one variant of [`AirportError`],
//! whose `Display` output is the message shown to the controller.

use thiserror::Error;

use crate::models::Operation;

/// The main error type for airport control.
///
/// All operations return this error type. Failures are atomic: when an
/// operation returns an error, neither the airport nor the plane changed.
///
/// # Example
///
/// ```
/// use airport_control::error::AirportError;
///
/// assert_eq!(
///     AirportError::HangarFull.to_string(),
///     "Unable to land when airport full!"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AirportError {
    /// The plane is already in this airport's hangar.
    #[error("Plane has already landed!")]
    AlreadyLanded,

    /// The plane is in the hangar of a different airport.
    #[error("Plane has already at another airport!")]
    LandedElsewhere,

    /// The weather check came back stormy.
    #[error("Plane cannot {operation} during storm!")]
    Storm {
        /// The operation that was refused.
        operation: Operation,
    },

    /// The hangar holds as many planes as its capacity allows.
    #[error("Unable to land when airport full!")]
    HangarFull,

    /// A take-off was requested from an airport with no planes.
    #[error("There are no planes left at this airport!")]
    HangarEmpty,

    /// The plane asked to take off is not in this hangar.
    #[error("That plane is not at the airport!")]
    PlaneNotPresent,

    /// A confirmation was requested for a plane that never took off here.
    #[error("{plane} has not taken off!")]
    NotYetDeparted {
        /// Display form of the plane.
        plane: String,
    },

    /// Capacity must be a positive number of planes.
    #[error("Invalid capacity {capacity}: an airport must hold at least one plane")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return AirportError.
pub type AirportResult<T> = Result<T, AirportError>;
