//! Totalistic Life-like rules.
//!
//! Besides arbitrary `B/S` rule strings, four rules are known by id:
//!
//! | id    | rule string | notes                                   |
//! |-------|-------------|-----------------------------------------|
//! | `40`  | `B3/S23`    | Conway's Game of Life, alias `standard` |
//! | `63`  | `B23/S23`   |                                         |
//! | `26`  | `B3/S23`    |                                         |
//! | `190` | `B2/S`      | every living cell dies                  |

use crate::{
    boundary::{Boundary, Dim},
    cells::{State, ALIVE, DEAD},
    engine,
    error::Error,
    grid::Grid,
    rules::{Automaton, Rule},
};
use ca_rules::ParseLife;
use rand::Rng;
use std::str::FromStr;

/// Totalistic Life-like rules on the Moore neighborhood.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// The name used when displaying the rule.
    name: String,
    /// Whether a dead cell with `n` living neighbors becomes alive.
    birth: [bool; 9],
    /// Whether a living cell with `n` living neighbors stays alive.
    survival: [bool; 9],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for &n in b.iter().filter(|&&n| n <= 8) {
            birth[n as usize] = true;
        }
        for &n in s.iter().filter(|&&n| n <= 8) {
            survival[n as usize] = true;
        }
        let name = format!("B{}/S{}", digits(&birth), digits(&survival));
        Life {
            name,
            birth,
            survival,
        }
    }

    /// Conway's Game of Life, rule `40`.
    pub fn standard() -> Self {
        Self::new(vec![3], vec![2, 3]).named("40")
    }

    /// Looks up a rule by id, or parses it as a `B/S` rule string.
    pub fn from_id(id: &str) -> Result<Self, Error> {
        let id = id.trim();
        let rule = match id {
            "40" | "standard" | "conway" => Self::standard(),
            "63" => Self::new(vec![2, 3], vec![2, 3]).named("63"),
            "26" => Self::new(vec![3], vec![2, 3]).named("26"),
            "190" => Self::new(vec![2], vec![]).named("190"),
            _ => Life::parse_rule(id).map_err(|_| Error::UnknownRule(id.to_string()))?,
        };
        Ok(rule)
    }

    fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// The name of the rule: its id, or its rule string.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The next state of a cell with `count` living neighbors.
    ///
    /// Counts above 8 never lead to birth or survival.
    #[inline]
    pub fn transition(&self, state: State, count: usize) -> State {
        let table = if state == ALIVE {
            &self.survival
        } else {
            &self.birth
        };
        if table.get(count).copied().unwrap_or(false) {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// The next state of a cell under the rule with the given id.
pub fn transition(id: &str, state: State, count: usize) -> Result<State, Error> {
    Ok(Life::from_id(id)?.transition(state, count))
}

fn digits(table: &[bool; 9]) -> String {
    (0..9)
        .filter(|&n| table[n])
        .map(|n| char::from(b'0' + n as u8))
        .collect()
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_id(input)
    }
}

impl Rule for Life {
    /// Number of living neighbors.
    type Desc = usize;

    const DIM: Dim = Dim::Two;

    fn desc(_state: State, nbhd: &[State]) -> Self::Desc {
        nbhd.iter().filter(|&&s| s == ALIVE).count()
    }

    fn transition(&self, state: State, desc: Self::Desc) -> State {
        Life::transition(self, state, desc)
    }
}

impl Automaton for Life {
    type Cell = State;
    const DIM: Dim = Dim::Two;
    const BOUNDARIES: &'static [Boundary] = &[Boundary::Periodic, Boundary::Reflecting];
    const DEFAULT_BOUNDARY: Boundary = Boundary::Periodic;

    fn advance<G: Rng + ?Sized>(
        &self,
        grid: &mut Grid<State>,
        boundary: Boundary,
        _rng: &mut G,
        _generation: u64,
    ) {
        engine::step(grid, boundary, self);
    }

    fn label(&self, _generation: u64) -> String {
        self.name.clone()
    }
}
