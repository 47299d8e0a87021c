//! Cells in the cellular automaton.

use std::{fmt::Debug, ops::Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`.
/// Both coordinates are 0-indexed. One-dimensional grids have a single row.
pub type Coord = (i32, i32);

/// An RGB display color.
pub type Color = (u8, u8, u8);

/// A value that a cell in a [`Grid`](crate::Grid) can hold.
///
/// Colors and glyphs are only used for display. They never affect a transition.
pub trait Cell: Copy + Eq + Debug {
    /// The state of a cell that nothing was placed on.
    const BACKGROUND: Self;

    /// The state placed by patterns and random sampling.
    const LIVE: Self;

    /// A character representing the state in plaintext output.
    fn glyph(self) -> char;

    /// Parses a character produced by [`glyph`](Cell::glyph).
    ///
    /// Returns `None` for unknown characters.
    fn from_glyph(c: char) -> Option<Self>;

    /// The display color of the state.
    fn color(self) -> Color;

    /// Whether the cell counts towards the active cell count.
    fn is_active(self) -> bool;
}

/// States of the elementary and Life-like automata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub usize);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

impl Cell for State {
    const BACKGROUND: Self = DEAD;
    const LIVE: Self = ALIVE;

    fn glyph(self) -> char {
        match self {
            DEAD => '.',
            _ => 'o',
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(DEAD),
            'o' | 'O' | '#' | '*' => Some(ALIVE),
            _ => None,
        }
    }

    fn color(self) -> Color {
        match self {
            DEAD => (0, 0, 0),
            _ => (0, 255, 0),
        }
    }

    fn is_active(self) -> bool {
        self == ALIVE
    }
}

/// States of the forest fire automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FireCell {
    /// A tree that can catch fire.
    Healthy,
    /// A burning tree. It burns out after one generation.
    Burning,
    /// A burnt tree.
    Burned,
    /// Water. It never catches fire.
    Water,
    /// Bare ground.
    Empty,
}

impl Cell for FireCell {
    const BACKGROUND: Self = FireCell::Empty;
    const LIVE: Self = FireCell::Healthy;

    fn glyph(self) -> char {
        match self {
            FireCell::Healthy => 'T',
            FireCell::Burning => '*',
            FireCell::Burned => 'x',
            FireCell::Water => '~',
            FireCell::Empty => '.',
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        match c {
            'T' | 't' => Some(FireCell::Healthy),
            '*' => Some(FireCell::Burning),
            'x' | 'X' => Some(FireCell::Burned),
            '~' => Some(FireCell::Water),
            '.' | ' ' => Some(FireCell::Empty),
            _ => None,
        }
    }

    fn color(self) -> Color {
        match self {
            FireCell::Healthy => (34, 139, 34),
            FireCell::Burning => (255, 0, 0),
            FireCell::Burned => (0, 0, 0),
            FireCell::Water => (138, 216, 236),
            FireCell::Empty => (255, 255, 255),
        }
    }

    fn is_active(self) -> bool {
        self == FireCell::Burning
    }
}
