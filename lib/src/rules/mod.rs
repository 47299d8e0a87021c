//! Cellular automaton rules.
//!
//! For the notations of Life-like rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod elementary;
mod fire;
pub mod life;
mod schedule;

use crate::{
    boundary::{Boundary, Dim},
    cells::{Cell, Coord, State},
    grid::Grid,
};
use rand::Rng;

pub use elementary::Elementary;
pub use fire::{FireRule, HUMIDITY_DAMPING};
pub use life::Life;
pub use schedule::Schedule;

#[cfg(doc)]
use crate::{boundary::Resolved, cells::DEAD};

/// A deterministic rule over [`State`]s.
///
/// The next state of a cell only depends on its own state and a
/// "neighborhood descriptor" built from the states of its neighbors.
pub trait Rule {
    /// The type of neighborhood descriptor of the rule.
    type Desc: Copy;

    /// Dimensionality of the neighborhood.
    const DIM: Dim;

    /// Generates the neighborhood descriptor of a cell.
    ///
    /// `nbhd` holds the states of the neighbors, in the order of
    /// [`neighbor_offsets`](crate::boundary::neighbor_offsets).
    /// A [`Resolved::Zero`] neighbor is passed as [`DEAD`].
    fn desc(state: State, nbhd: &[State]) -> Self::Desc;

    /// The state of the cell in the next generation.
    fn transition(&self, state: State, desc: Self::Desc) -> State;
}

/// Something that can advance a grid by one generation.
///
/// Implemented by [`Elementary`], [`Life`], [`FireRule`], and
/// [`Schedule`]s of them.
pub trait Automaton {
    /// The type of cells.
    type Cell: Cell;

    /// Dimensionality of the automaton.
    const DIM: Dim;

    /// Boundary conditions that the automaton can run with.
    const BOUNDARIES: &'static [Boundary];

    /// Boundary condition used when none is configured.
    const DEFAULT_BOUNDARY: Boundary;

    /// Computes generation `generation + 1` from generation `generation`.
    ///
    /// Deterministic automata never touch `rng`.
    fn advance<G: Rng + ?Sized>(
        &self,
        grid: &mut Grid<Self::Cell>,
        boundary: Boundary,
        rng: &mut G,
        generation: u64,
    );

    /// Called by the world before computing generation `generation + 1`.
    ///
    /// Lets an automaton change its own parameters during a run.
    /// Does nothing by default.
    fn update<G: Rng + ?Sized>(&mut self, _rng: &mut G, _generation: u64) {}

    /// A human-readable name of the rule in use at `generation`.
    fn label(&self, generation: u64) -> String;

    /// Whether the grid can never change again.
    ///
    /// Deterministic automata are never considered settled.
    fn is_settled(&self, _grid: &Grid<Self::Cell>) -> bool {
        false
    }

    /// Removes the active cells in the square of side `range` around `center`.
    ///
    /// Returns the number of changed cells. Does nothing by default.
    fn extinguish(&self, _grid: &mut Grid<Self::Cell>, _center: Coord, _range: i32) -> usize {
        0
    }
}
