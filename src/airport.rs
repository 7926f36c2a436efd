//! The airport: a hangar of planes, a capacity and a weather source.
//!
//! Every runway operation is all-or-nothing. Checks run in a fixed order and
//! the first failing check is reported; when an operation fails, neither the
//! hangar nor the plane's location tag has changed.

use chrono::Utc;
use tracing::{info, warn};

use crate::config::AirportConfig;
use crate::error::{AirportError, AirportResult};
use crate::models::{AirportId, Operation, Plane, PlaneId, PlaneStatus};
use crate::weather::{Weather, WeatherSource, WeatherSystem};

/// The number of planes an airport holds unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 20;

/// An airport that lets planes land and take off, weather permitting.
///
/// The hangar holds plane identities in landing order; the planes
/// themselves stay with the caller. The weather source is a type parameter
/// so that tests and simulations can supply a deterministic one.
///
/// # Examples
///
/// ```
/// use airport_control::airport::Airport;
/// use airport_control::models::Plane;
/// use airport_control::weather::FixedWeather;
///
/// let mut airport = Airport::with_weather(2, FixedWeather::sunny())?;
/// let mut plane = Plane::new();
///
/// airport.land(&mut plane)?;
/// assert_eq!(airport.hangar(), &[plane.id()]);
///
/// airport.take_off(&mut plane)?;
/// assert!(airport.is_empty());
///
/// let message = airport.confirm_take_off(&mut plane)?;
/// assert_eq!(message, format!("Confirmed: {} has taken off!", plane));
/// # Ok::<(), airport_control::error::AirportError>(())
/// ```
#[derive(Debug)]
pub struct Airport<W = WeatherSystem> {
    id: AirportId,
    name: Option<String>,
    hangar: Vec<PlaneId>,
    capacity: usize,
    weather: W,
}

impl Airport<WeatherSystem> {
    /// Creates an airport with the default capacity and random weather.
    pub fn new() -> Self {
        Self {
            id: AirportId::new(),
            name: None,
            hangar: Vec::new(),
            capacity: DEFAULT_CAPACITY,
            weather: WeatherSystem::new(),
        }
    }

    /// Creates an airport with a custom capacity and random weather.
    ///
    /// Returns `InvalidCapacity` when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> AirportResult<Self> {
        Self::with_weather(capacity, WeatherSystem::new())
    }

    /// Creates an airport from loaded configuration.
    ///
    /// The weather is reproducible when the configuration carries a seed.
    pub fn from_config(config: &AirportConfig) -> AirportResult<Self> {
        let airport = Self::with_weather(config.capacity, config.weather.build())?;
        Ok(match &config.name {
            Some(name) => airport.named(name.clone()),
            None => airport,
        })
    }
}

impl Default for Airport<WeatherSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WeatherSource> Airport<W> {
    /// Creates an airport with a custom capacity and weather source.
    ///
    /// Returns `InvalidCapacity` when `capacity` is zero.
    pub fn with_weather(capacity: usize, weather: W) -> AirportResult<Self> {
        if capacity == 0 {
            return Err(AirportError::InvalidCapacity { capacity });
        }
        Ok(Self {
            id: AirportId::new(),
            name: None,
            hangar: Vec::new(),
            capacity,
            weather,
        })
    }

    /// Gives the airport a display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the airport's identity.
    pub fn id(&self) -> AirportId {
        self.id
    }

    /// Returns the airport's display name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the planes in the hangar, in landing order.
    pub fn hangar(&self) -> &[PlaneId] {
        &self.hangar
    }

    /// Returns the maximum number of planes the hangar holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the weather source.
    pub fn weather(&self) -> &W {
        &self.weather
    }

    /// Returns the weather source mutably, e.g. to change a fixed forecast.
    pub fn weather_mut(&mut self) -> &mut W {
        &mut self.weather
    }

    /// Returns true when no more planes can land.
    pub fn is_full(&self) -> bool {
        self.hangar.len() >= self.capacity
    }

    /// Returns true when the hangar has no planes.
    pub fn is_empty(&self) -> bool {
        self.hangar.is_empty()
    }

    /// Returns true if `plane` is in this hangar.
    pub fn contains(&self, plane: &Plane) -> bool {
        self.hangar.contains(&plane.id())
    }

    /// Asks the weather source for a fresh report.
    pub fn weather_check(&mut self) -> Weather {
        self.weather.check()
    }

    /// Lands `plane` in the hangar.
    ///
    /// # Errors
    ///
    /// In order of precedence:
    /// - `AlreadyLanded` if the plane is already in this hangar
    /// - `LandedElsewhere` if the plane is in another airport's hangar
    /// - `Storm` if the weather check reports a storm
    /// - `HangarFull` if the hangar is at capacity
    pub fn land(&mut self, plane: &mut Plane) -> AirportResult<()> {
        if self.contains(plane) {
            return self.reject(plane, Operation::Land, AirportError::AlreadyLanded);
        }
        if plane.landed_at().is_some_and(|airport| airport != self.id) {
            return self.reject(plane, Operation::Land, AirportError::LandedElsewhere);
        }
        if self.weather_check().is_stormy() {
            let error = AirportError::Storm {
                operation: Operation::Land,
            };
            return self.reject(plane, Operation::Land, error);
        }
        if self.is_full() {
            return self.reject(plane, Operation::Land, AirportError::HangarFull);
        }

        self.hangar.push(plane.id());
        plane.set_status(PlaneStatus::Landed { airport: self.id });
        info!(
            airport_id = %self.id,
            plane_id = %plane.id(),
            hangar_len = self.hangar.len(),
            capacity = self.capacity,
            "Plane landed"
        );
        Ok(())
    }

    /// Releases `plane` from the hangar.
    ///
    /// The plane is tagged as departed until the take-off is confirmed with
    /// [`confirm_take_off`](Self::confirm_take_off).
    ///
    /// # Errors
    ///
    /// In order of precedence:
    /// - `HangarEmpty` if there are no planes at the airport
    /// - `PlaneNotPresent` if the plane is not in this hangar
    /// - `Storm` if the weather check reports a storm
    pub fn take_off(&mut self, plane: &mut Plane) -> AirportResult<()> {
        if self.is_empty() {
            return self.reject(plane, Operation::TakeOff, AirportError::HangarEmpty);
        }
        let Some(position) = self.hangar.iter().position(|id| *id == plane.id()) else {
            return self.reject(plane, Operation::TakeOff, AirportError::PlaneNotPresent);
        };
        if self.weather_check().is_stormy() {
            let error = AirportError::Storm {
                operation: Operation::TakeOff,
            };
            return self.reject(plane, Operation::TakeOff, error);
        }

        self.hangar.remove(position);
        plane.set_status(PlaneStatus::Departed {
            airport: self.id,
            at: Utc::now(),
        });
        info!(
            airport_id = %self.id,
            plane_id = %plane.id(),
            hangar_len = self.hangar.len(),
            "Plane took off"
        );
        Ok(())
    }

    /// Confirms that `plane` has left after taking off from this airport.
    ///
    /// Returns the confirmation message and clears the pending departure.
    ///
    /// # Errors
    ///
    /// Returns `NotYetDeparted` unless the plane's last take-off was from
    /// this airport and has not been confirmed already.
    pub fn confirm_take_off(&self, plane: &mut Plane) -> AirportResult<String> {
        let departed_at = match plane.status() {
            PlaneStatus::Departed { airport, at } if airport == self.id => at,
            _ => {
                let error = AirportError::NotYetDeparted {
                    plane: plane.to_string(),
                };
                warn!(
                    airport_id = %self.id,
                    plane_id = %plane.id(),
                    error = %error,
                    "Take-off confirmation rejected"
                );
                return Err(error);
            }
        };

        plane.set_status(PlaneStatus::Airborne);
        info!(
            airport_id = %self.id,
            plane_id = %plane.id(),
            airborne_ms = (Utc::now() - departed_at).num_milliseconds(),
            "Take-off confirmed"
        );
        Ok(format!("Confirmed: {} has taken off!", plane))
    }

    fn reject(&self, plane: &Plane, operation: Operation, error: AirportError) -> AirportResult<()> {
        warn!(
            airport_id = %self.id,
            plane_id = %plane.id(),
            operation = %operation,
            hangar_len = self.hangar.len(),
            error = %error,
            "Runway operation rejected"
        );
        Err(error)
    }
}
