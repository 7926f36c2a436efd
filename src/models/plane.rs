//! Plane model and related types.
//!
//! This module defines the Plane identity token and the location tag
//! that keeps a plane in at most one hangar at a time.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaneId(Uuid);

impl PlaneId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PlaneId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportId(Uuid);

impl AirportId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AirportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a plane currently is, from the point of view of airports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlaneStatus {
    /// Not at any airport and no departure awaiting confirmation.
    Airborne,
    /// Parked in the hangar of the given airport.
    Landed {
        /// The airport holding the plane.
        airport: AirportId,
    },
    /// Took off from the given airport; the departure is not yet confirmed.
    Departed {
        /// The airport the plane left.
        airport: AirportId,
        /// When the plane took off.
        at: DateTime<Utc>,
    },
}

/// A plane that can land at and take off from airports.
///
/// A plane carries nothing beyond its identity and its location tag. The
/// tag is only changed by [`Airport`](crate::airport::Airport) operations.
/// Planes are not `Clone`: a copy of an identity could sit in a second hangar.
///
/// # Examples
///
/// ```
/// use airport_control::models::{Plane, PlaneStatus};
///
/// let plane = Plane::new();
/// assert_eq!(plane.status(), PlaneStatus::Airborne);
/// assert_eq!(plane.to_string(), format!("Plane({})", plane.id()));
/// ```
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Plane {
    id: PlaneId,
    status: PlaneStatus,
}

impl Plane {
    /// Creates an airborne plane with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: PlaneId::new(),
            status: PlaneStatus::Airborne,
        }
    }

    /// Returns the plane's identity.
    pub fn id(&self) -> PlaneId {
        self.id
    }

    /// Returns the plane's current location tag.
    pub fn status(&self) -> PlaneStatus {
        self.status
    }

    /// Returns the airport whose hangar holds this plane, if any.
    pub fn landed_at(&self) -> Option<AirportId> {
        match self.status {
            PlaneStatus::Landed { airport } => Some(airport),
            _ => None,
        }
    }

    /// Returns true if the plane took off from `airport` and has not been confirmed.
    pub fn is_departing_from(&self, airport: AirportId) -> bool {
        matches!(self.status, PlaneStatus::Departed { airport: from, .. } if from == airport)
    }

    pub(crate) fn set_status(&mut self, status: PlaneStatus) {
        self.status = status;
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane({})", self.id)
    }
}
