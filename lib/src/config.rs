//! World configuration.

use crate::{
    boundary::Boundary,
    cells::Coord,
    error::Error,
    init::Init,
    rules::{Elementary, FireRule, Life, Schedule},
    traits::Simulate,
    world::World,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of the forest fire.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FireConfig {
    /// Probability that a burning tree ignites a neighbor.
    #[educe(Default(expression = "0.7"))]
    pub spread_probability: f64,

    /// Humidity, between `0` and `1`.
    pub humidity: f64,

    /// Wind `(dx, dy)`, each component in `-1..=1`.
    pub wind: Coord,

    /// The cell set on fire before the first generation.
    ///
    /// `None` means the center of the grid, unless the initial grid already
    /// contains a burning cell.
    pub ignition: Option<Coord>,

    /// Number of generations between two changes of weather.
    ///
    /// `None` keeps `humidity` and `wind` for the whole run.
    pub weather_interval: Option<u64>,
}

impl FireConfig {
    /// The rule described by this configuration.
    pub fn rule(&self) -> Result<FireRule, Error> {
        FireRule::new(self.spread_probability)?
            .set_humidity(self.humidity)?
            .set_wind(self.wind)?
            .set_weather_interval(self.weather_interval)
    }
}

/// Which automaton to run.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AutomatonKind {
    /// One-dimensional elementary rules, given by their rule numbers.
    Elementary {
        /// Rule numbers, each running for `steps_per_rule` generations.
        rules: Vec<i64>,
    },

    /// Life-like rules, given by id (`40`, `63`, `26`, `190`) or rule string.
    #[educe(Default)]
    Life {
        /// Rule ids, each running for `steps_per_rule` generations.
        #[educe(Default(expression = "vec![String::from(\"40\")]"))]
        rules: Vec<String>,
    },

    /// The forest fire.
    Fire(FireConfig),
}

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 64)]
    pub width: i32,

    /// Height. Must be `1` for elementary rules.
    #[educe(Default = 64)]
    pub height: i32,

    /// The automaton.
    pub automaton: AutomatonKind,

    /// Boundary condition.
    ///
    /// `None` means the default boundary condition of the automaton.
    pub boundary: Option<Boundary>,

    /// Initial content of the grid.
    pub init: Init,

    /// Number of generations each rule runs for, when several rules are given.
    #[educe(Default = 20)]
    pub steps_per_rule: u64,

    /// Seed of the random source.
    ///
    /// `None` means seeding from system entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the automaton.
    pub fn set_automaton(mut self, automaton: AutomatonKind) -> Self {
        self.automaton = automaton;
        self
    }

    /// Runs the elementary rules with the given numbers.
    pub fn set_elementary<I: IntoIterator<Item = i64>>(self, rules: I) -> Self {
        self.set_automaton(AutomatonKind::Elementary {
            rules: rules.into_iter().collect(),
        })
    }

    /// Runs the Life-like rules with the given ids.
    pub fn set_life<I, S>(self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.set_automaton(AutomatonKind::Life {
            rules: rules.into_iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Runs the forest fire.
    pub fn set_fire(self, fire: FireConfig) -> Self {
        self.set_automaton(AutomatonKind::Fire(fire))
    }

    /// Sets the boundary condition.
    pub fn set_boundary<T: Into<Option<Boundary>>>(mut self, boundary: T) -> Self {
        self.boundary = boundary.into();
        self
    }

    /// Sets the initial content.
    pub fn set_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    /// Sets the number of generations each rule runs for.
    pub fn set_steps_per_rule(mut self, steps_per_rule: u64) -> Self {
        self.steps_per_rule = steps_per_rule;
        self
    }

    /// Sets the seed of the random source.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if any part of the configuration is invalid.
    pub fn world(&self) -> Result<Box<dyn Simulate>, Error> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::NonPositiveError);
        }
        match &self.automaton {
            AutomatonKind::Elementary { rules } => {
                let rules = rules
                    .iter()
                    .map(|&n| Elementary::decode(n))
                    .collect::<Result<Vec<_>, _>>()?;
                let schedule = Schedule::new(rules, self.steps_per_rule)?;
                Ok(Box::new(World::new(self, schedule)?))
            }
            AutomatonKind::Life { rules } => {
                let rules = rules
                    .iter()
                    .map(|id| Life::from_id(id))
                    .collect::<Result<Vec<_>, _>>()?;
                let schedule = Schedule::new(rules, self.steps_per_rule)?;
                Ok(Box::new(World::new(self, schedule)?))
            }
            AutomatonKind::Fire(fire) => {
                let mut world = World::new(self, fire.rule()?)?;
                let ignition = match fire.ignition {
                    Some(coord) => Some(coord),
                    None if world.burning_count() == 0 => Some((self.width / 2, self.height / 2)),
                    None => None,
                };
                if let Some(coord) = ignition {
                    world.ignite(coord)?;
                }
                Ok(Box::new(world))
            }
        }
    }
}
