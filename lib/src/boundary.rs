//! Boundary conditions.
//!
//! A boundary condition decides which cell a neighbor lookup lands on
//! when it leaves the grid.

use crate::cells::Coord;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A relative offset `(dx, dy)` from a cell to one of its neighbors.
pub type Offset = (i32, i32);

/// Dimensionality of an automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dim {
    /// A single row of cells.
    One,
    /// A rectangle of cells.
    Two,
}

/// The two neighbors of a cell in a row, left first.
const NBHD_1D: [Offset; 2] = [(-1, 0), (1, 0)];

/// The Moore neighborhood, row by row.
const MOORE: [Offset; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Offsets of the neighbors of a cell. The cell itself is excluded.
pub fn neighbor_offsets(dim: Dim) -> &'static [Offset] {
    match dim {
        Dim::One => &NBHD_1D,
        Dim::Two => &MOORE,
    }
}

/// Where a neighbor lookup lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolved {
    /// A cell inside the grid.
    Cell(Coord),
    /// A virtual cell outside the grid which always holds the background state.
    Zero,
    /// There is no neighbor at all.
    NoNeighbor,
}

/// Boundary conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Boundary {
    /// Cells on the edges never change.
    ///
    /// A lookup leaving the grid yields [`Resolved::NoNeighbor`], and the
    /// engine copies such cells unchanged.
    Fixed,

    /// The grid wraps around on both axes.
    Periodic,

    /// Everything outside the grid reads as the background state.
    Absorptive,

    /// A lookup leaving the grid is mirrored back across the edge it crossed.
    ///
    /// On each axis, an index `i < 0` becomes `-i`, and then an index
    /// `i >= size` becomes `2 * size - i - 1`. So the low edge mirrors
    /// around the edge cell, and the high edge mirrors onto the edge cell.
    ///
    /// The mirroring is applied only once, so it is exact only for offsets of
    /// magnitude 1. Larger offsets near a corner may still land outside.
    Reflecting,
}

impl Boundary {
    /// Resolves the neighbor of `coord` at `offset` in a grid of size `dims`.
    pub fn resolve(self, coord: Coord, offset: Offset, dims: (i32, i32)) -> Resolved {
        let (x, y) = (coord.0 + offset.0, coord.1 + offset.1);
        let (width, height) = dims;
        let inside = |i: i32, size: i32| 0 <= i && i < size;
        match self {
            Boundary::Fixed => {
                if inside(x, width) && inside(y, height) {
                    Resolved::Cell((x, y))
                } else {
                    Resolved::NoNeighbor
                }
            }
            Boundary::Periodic => Resolved::Cell((x.rem_euclid(width), y.rem_euclid(height))),
            Boundary::Absorptive => {
                if inside(x, width) && inside(y, height) {
                    Resolved::Cell((x, y))
                } else {
                    Resolved::Zero
                }
            }
            Boundary::Reflecting => Resolved::Cell((reflect(x, width), reflect(y, height))),
        }
    }
}

/// Single reflection of an index on one axis.
fn reflect(mut i: i32, size: i32) -> i32 {
    if i < 0 {
        i = -i;
    }
    if i >= size {
        i = size - (i - size) - 1;
    }
    i
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" | "f" => Ok(Boundary::Fixed),
            "periodic" | "p" => Ok(Boundary::Periodic),
            "absorptive" | "a" => Ok(Boundary::Absorptive),
            "reflecting" | "r" => Ok(Boundary::Reflecting),
            _ => Err(String::from("invalid boundary condition")),
        }
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Boundary::Fixed => "fixed",
            Boundary::Periodic => "periodic",
            Boundary::Absorptive => "absorptive",
            Boundary::Reflecting => "reflecting",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periodic_wraps() {
        let b = Boundary::Periodic;
        assert_eq!(b.resolve((0, 0), (-1, -1), (5, 4)), Resolved::Cell((4, 3)));
        assert_eq!(b.resolve((4, 3), (1, 1), (5, 4)), Resolved::Cell((0, 0)));
        assert_eq!(b.resolve((2, 0), (0, 0), (5, 1)), Resolved::Cell((2, 0)));
    }

    #[test]
    fn periodic_single_cell() {
        for &offset in neighbor_offsets(Dim::Two) {
            assert_eq!(
                Boundary::Periodic.resolve((0, 0), offset, (1, 1)),
                Resolved::Cell((0, 0))
            );
        }
    }

    #[test]
    fn fixed_and_absorptive_edges() {
        assert_eq!(
            Boundary::Fixed.resolve((0, 0), (-1, 0), (8, 1)),
            Resolved::NoNeighbor
        );
        assert_eq!(
            Boundary::Absorptive.resolve((7, 0), (1, 0), (8, 1)),
            Resolved::Zero
        );
        assert_eq!(
            Boundary::Absorptive.resolve((3, 0), (1, 0), (8, 1)),
            Resolved::Cell((4, 0))
        );
    }

    #[test]
    fn reflecting_stays_inside() {
        let dims = (3, 2);
        assert_eq!(
            Boundary::Reflecting.resolve((0, 0), (-1, -1), dims),
            Resolved::Cell((1, 1))
        );
        assert_eq!(
            Boundary::Reflecting.resolve((2, 1), (1, 1), dims),
            Resolved::Cell((2, 1))
        );
        for x in 0..dims.0 {
            for y in 0..dims.1 {
                for &offset in neighbor_offsets(Dim::Two) {
                    match Boundary::Reflecting.resolve((x, y), offset, dims) {
                        Resolved::Cell((nx, ny)) => {
                            assert!(0 <= nx && nx < dims.0 && 0 <= ny && ny < dims.1)
                        }
                        r => panic!("unexpected {:?}", r),
                    }
                }
            }
        }
    }
}
