//! Weather source implementations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::source::{Weather, WeatherSource};

/// Probability that a single check reports a storm.
const STORM_PROBABILITY: f64 = 0.5;

/// Random weather: each check is sunshine or a storm with equal odds.
///
/// A seeded system replays the same sequence of reports, which is what the
/// configuration's `weather.seed` is for.
///
/// # Examples
///
/// ```
/// use airport_control::weather::{WeatherSource, WeatherSystem};
///
/// let mut first = WeatherSystem::seeded(42);
/// let mut second = WeatherSystem::seeded(42);
/// for _ in 0..10 {
///     assert_eq!(first.check(), second.check());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherSystem {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl WeatherSystem {
    /// Creates a weather system seeded from entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Creates a reproducible weather system.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Returns the seed, if the system was created with one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for WeatherSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherSource for WeatherSystem {
    fn check(&mut self) -> Weather {
        let weather = if self.rng.gen_bool(STORM_PROBABILITY) {
            Weather::Stormy
        } else {
            Weather::Sunshine
        };
        debug!(weather = %weather, seed = ?self.seed, "Weather checked");
        weather
    }
}

/// Weather that only changes when told to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWeather {
    weather: Weather,
}

impl FixedWeather {
    /// Creates a source that always reports `weather`.
    pub fn new(weather: Weather) -> Self {
        Self { weather }
    }

    /// Shorthand for permanent sunshine.
    pub fn sunny() -> Self {
        Self::new(Weather::Sunshine)
    }

    /// Shorthand for a permanent storm.
    pub fn stormy() -> Self {
        Self::new(Weather::Stormy)
    }

    /// Changes the weather reported by subsequent checks.
    pub fn set(&mut self, weather: Weather) {
        self.weather = weather;
    }
}

impl WeatherSource for FixedWeather {
    fn check(&mut self) -> Weather {
        self.weather
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_systems_agree() {
        let mut first = WeatherSystem::seeded(7);
        let mut second = WeatherSystem::seeded(7);
        let a: Vec<Weather> = (0..64).map(|_| first.check()).collect();
        let b: Vec<Weather> = (0..64).map(|_| second.check()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(WeatherSystem::seeded(3).seed(), Some(3));
        assert_eq!(WeatherSystem::new().seed(), None);
    }

    #[test]
    fn test_both_outcomes_occur() {
        let mut system = WeatherSystem::seeded(1234);
        let reports: Vec<Weather> = (0..1000).map(|_| system.check()).collect();
        assert!(reports.contains(&Weather::Sunshine));
        assert!(reports.contains(&Weather::Stormy));
    }

    #[test]
    fn test_storms_are_roughly_half() {
        let mut system = WeatherSystem::seeded(99);
        let storms = (0..10_000).filter(|_| system.check().is_stormy()).count();
        assert!((4_500..=5_500).contains(&storms), "got {} storms", storms);
    }

    #[test]
    fn test_fixed_weather_holds_until_set() {
        let mut weather = FixedWeather::sunny();
        assert_eq!(weather.check(), Weather::Sunshine);
        assert_eq!(weather.check(), Weather::Sunshine);

        weather.set(Weather::Stormy);
        assert_eq!(weather.check(), Weather::Stormy);
        assert_eq!(FixedWeather::stormy(), weather);
    }
}
