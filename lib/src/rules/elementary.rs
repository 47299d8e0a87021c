//! Elementary (one-dimensional, two-state, three-neighbor) rules.

use crate::{
    boundary::{Boundary, Dim},
    cells::{State, ALIVE, DEAD},
    engine,
    error::Error,
    grid::Grid,
    rules::{Automaton, Rule},
};
use rand::Rng;
use std::str::FromStr;

/// An elementary rule, decoded from its rule number.
///
/// Bit `i` of the rule number (bit 0 being the least significant) is the
/// next state of a cell whose neighborhood code is `i`, where the code of
/// `(left, center, right)` is `(left << 2) | (center << 1) | right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Elementary {
    number: u8,
    table: [State; 8],
}

impl Elementary {
    /// Decodes a rule number in `0..=255`.
    pub fn decode(number: i64) -> Result<Self, Error> {
        if !(0..=255).contains(&number) {
            return Err(Error::InvalidRule(number));
        }
        let mut table = [DEAD; 8];
        for (i, entry) in table.iter_mut().enumerate() {
            if (number >> i) & 1 == 1 {
                *entry = ALIVE;
            }
        }
        Ok(Elementary {
            number: number as u8,
            table,
        })
    }

    /// The rule number.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// The next state of the center cell.
    #[inline]
    pub fn apply(&self, left: State, center: State, right: State) -> State {
        self.table[code(left, center, right)]
    }
}

/// The neighborhood code `0..8`.
#[inline]
fn code(left: State, center: State, right: State) -> usize {
    ((left == ALIVE) as usize) << 2 | ((center == ALIVE) as usize) << 1 | (right == ALIVE) as usize
}

impl FromStr for Elementary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::UnknownRule(s.to_string()))?;
        Self::decode(number)
    }
}

impl Rule for Elementary {
    /// The neighborhood code.
    type Desc = usize;

    const DIM: Dim = Dim::One;

    fn desc(state: State, nbhd: &[State]) -> Self::Desc {
        code(nbhd[0], state, nbhd[1])
    }

    fn transition(&self, _state: State, desc: Self::Desc) -> State {
        self.table[desc]
    }
}

impl Automaton for Elementary {
    type Cell = State;
    const DIM: Dim = Dim::One;
    const BOUNDARIES: &'static [Boundary] =
        &[Boundary::Fixed, Boundary::Periodic, Boundary::Absorptive];
    const DEFAULT_BOUNDARY: Boundary = Boundary::Fixed;

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
        self.number.to_string()
    }
}
