//! Initial content of a grid.

use crate::{
    cells::{Cell, Coord, FireCell},
    error::Error,
    grid::Grid,
};
use educe::Educe;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Small patterns placed at the center of the grid.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pattern {
    /// The glider, heading to the lower right.
    ///
    /// ```plaintext
    /// .o.
    /// ..o
    /// ooo
    /// ```
    #[educe(Default)]
    Glider,

    /// The toad, a period 2 oscillator.
    ///
    /// ```plaintext
    /// ooo.
    /// .ooo
    /// ```
    Toad,

    /// The block, a still life.
    Block,

    /// A single cell.
    Center,
}

impl Pattern {
    /// Size of the bounding box.
    pub fn size(self) -> (i32, i32) {
        match self {
            Pattern::Glider => (3, 3),
            Pattern::Toad => (4, 2),
            Pattern::Block => (2, 2),
            Pattern::Center => (1, 1),
        }
    }

    /// Live cells, relative to the upper left corner of the bounding box.
    pub fn cells(self) -> &'static [Coord] {
        match self {
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
            Pattern::Toad => &[(0, 0), (1, 0), (2, 0), (1, 1), (2, 1), (3, 1)],
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Center => &[(0, 0)],
        }
    }

    /// Live cells when the pattern is centered in a `width × height` grid.
    pub fn centered(self, width: i32, height: i32) -> impl Iterator<Item = Coord> {
        let (pw, ph) = self.size();
        let (x0, y0) = ((width - pw) / 2, (height - ph) / 2);
        self.cells().iter().map(move |&(x, y)| (x0 + x, y0 + y))
    }
}

/// How to fill the grid before the first generation.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Init {
    /// Only the background state.
    Empty,

    /// A pattern at the center.
    #[educe(Default)]
    Pattern(Pattern),

    /// Every cell is live with the given probability.
    Random {
        /// Probability of a live cell.
        probability: f64,
    },

    /// A list of live cells.
    Live(Vec<Coord>),

    /// The whole grid, in plaintext. See [`Grid::parse`].
    Plaintext(String),
}

/// Builds the first generation of a `width × height` grid.
///
/// Random sampling draws one number for each cell, row by row.
pub fn build<C: Cell, G: Rng + ?Sized>(
    init: &Init,
    width: i32,
    height: i32,
    rng: &mut G,
) -> Result<Grid<C>, Error> {
    match init {
        Init::Empty => Grid::new(width, height),
        Init::Pattern(pattern) => place(width, height, pattern.centered(width, height)),
        Init::Random { probability } => {
            let p = *probability;
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidProbability(p));
            }
            Grid::from_fn(width, height, |_| {
                if rng.gen_bool(p) {
                    C::LIVE
                } else {
                    C::BACKGROUND
                }
            })
        }
        Init::Live(cells) => place(width, height, cells.iter().copied()),
        Init::Plaintext(text) => Grid::parse(width, height, text),
    }
}

fn place<C: Cell, I>(width: i32, height: i32, cells: I) -> Result<Grid<C>, Error>
where
    I: IntoIterator<Item = Coord>,
{
    let mut grid = Grid::new(width, height)?;
    for coord in cells {
        grid.set(coord, C::LIVE)?;
    }
    Ok(grid)
}

/// Sets a healthy tree on fire.
///
/// Any other cell is left alone. Returns whether the cell caught fire.
pub fn ignite(grid: &mut Grid<FireCell>, coord: Coord) -> Result<bool, Error> {
    match grid.get(coord) {
        None => Err(Error::OutOfBounds(coord)),
        Some(FireCell::Healthy) => {
            grid.set(coord, FireCell::Burning)?;
            Ok(true)
        }
        Some(_) => Ok(false),
    }
}
