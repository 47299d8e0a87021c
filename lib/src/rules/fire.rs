//! The forest fire rule.

use crate::{
    boundary::{Boundary, Dim},
    cells::{Coord, FireCell},
    engine,
    error::Error,
    grid::Grid,
    rules::Automaton,
};
use log::debug;
use rand::Rng;

/// How much a fully humid forest lowers the ignition probability.
pub const HUMIDITY_DAMPING: f64 = 0.2;

/// Parameters of the forest fire.
///
/// Every generation, each burning cell burns out, and tries to ignite each
/// healthy tree around it with the effective probability
/// `spread_probability - HUMIDITY_DAMPING * humidity`.
/// The wind shifts the cells a fire reaches.
///
/// With a weather interval `n`, humidity and wind are drawn again from the
/// random source of the world every `n` generations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireRule {
    spread_probability: f64,
    humidity: f64,
    wind: Coord,
    weather_interval: Option<u64>,
}

impl FireRule {
    /// Creates a rule without humidity and wind.
    pub fn new(spread_probability: f64) -> Result<Self, Error> {
        check_probability(spread_probability)?;
        Ok(FireRule {
            spread_probability,
            ..FireRule::default()
        })
    }

    /// Sets the humidity, between `0` (dry) and `1`.
    pub fn set_humidity(mut self, humidity: f64) -> Result<Self, Error> {
        check_probability(humidity)?;
        self.humidity = humidity;
        Ok(self)
    }

    /// Sets the wind `(dx, dy)`. Both components must lie in `-1..=1`.
    pub fn set_wind(mut self, wind: Coord) -> Result<Self, Error> {
        if !(-1..=1).contains(&wind.0) || !(-1..=1).contains(&wind.1) {
            return Err(Error::InvalidWind(wind));
        }
        self.wind = wind;
        Ok(self)
    }

    /// Changes the weather every `interval` generations, or never if `None`.
    pub fn set_weather_interval(mut self, interval: Option<u64>) -> Result<Self, Error> {
        if interval == Some(0) {
            return Err(Error::NonPositiveError);
        }
        self.weather_interval = interval;
        Ok(self)
    }

    /// The configured spread probability.
    pub fn spread_probability(&self) -> f64 {
        self.spread_probability
    }

    /// Humidity.
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Wind.
    pub fn wind(&self) -> Coord {
        self.wind
    }

    /// Number of generations between two changes of weather.
    pub fn weather_interval(&self) -> Option<u64> {
        self.weather_interval
    }

    /// The probability that one burning cell ignites one healthy neighbor.
    pub fn ignition_probability(&self) -> f64 {
        (self.spread_probability - HUMIDITY_DAMPING * self.humidity).clamp(0.0, 1.0)
    }
}

/// 70%, the spread probability when nothing else is configured.
impl Default for FireRule {
    fn default() -> Self {
        FireRule {
            spread_probability: 0.7,
            humidity: 0.0,
            wind: (0, 0),
            weather_interval: None,
        }
    }
}

fn check_probability(p: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::InvalidProbability(p))
    }
}

impl Automaton for FireRule {
    type Cell = FireCell;
    const DIM: Dim = Dim::Two;
    const BOUNDARIES: &'static [Boundary] = &[Boundary::Absorptive, Boundary::Periodic];
    const DEFAULT_BOUNDARY: Boundary = Boundary::Absorptive;

    fn advance<G: Rng + ?Sized>(
        &self,
        grid: &mut Grid<FireCell>,
        boundary: Boundary,
        rng: &mut G,
        _generation: u64,
    ) {
        engine::step_fire(grid, boundary, self, rng);
    }

    /// Draws a new humidity in `[0, 1]` and a new wind, when the weather is due.
    fn update<G: Rng + ?Sized>(&mut self, rng: &mut G, generation: u64) {
        match self.weather_interval {
            Some(n) if generation > 0 && generation % n == 0 => {
                self.humidity = rng.gen_range(0.0..=1.0);
                self.wind = (rng.gen_range(-1..=1), rng.gen_range(-1..=1));
                debug!(
                    "Generation {}: humidity {:.2}, wind {:?}",
                    generation, self.humidity, self.wind
                );
            }
            _ => (),
        }
    }

    fn label(&self, _generation: u64) -> String {
        format!("fire p={:.2}", self.ignition_probability())
    }

    /// Settled once nothing burns.
    fn is_settled(&self, grid: &Grid<FireCell>) -> bool {
        grid.count(|c| c == FireCell::Burning) == 0
    }

    fn extinguish(&self, grid: &mut Grid<FireCell>, center: Coord, range: i32) -> usize {
        engine::extinguish(grid, center, range)
    }
}
