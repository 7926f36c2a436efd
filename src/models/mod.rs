//! Core data models for airport control.
//!
//! This module contains the plane identity, its location tag and the
//! runway operations that airports gate on the weather.

mod operation;
mod plane;

pub use operation::Operation;
pub use plane::{AirportId, Plane, PlaneId, PlaneStatus};
