//! Computing the next generation of a grid.
//!
//! Every function here reads only the current generation and writes only the
//! next one, through [`Grid::advance`]. So the order in which cells are
//! visited never changes the result, except for the order in which random
//! numbers are drawn.

use crate::{
    boundary::{neighbor_offsets, Boundary, Dim, Resolved},
    cells::{Coord, FireCell, State, DEAD},
    grid::{Grid, GridView},
    rules::{FireRule, Rule},
};
use log::trace;
use rand::Rng;

/// Advances a grid of a deterministic rule by one generation.
///
/// A cell that has a [`Resolved::NoNeighbor`] neighbor keeps its state.
pub fn step<R: Rule>(grid: &mut Grid<State>, boundary: Boundary, rule: &R) {
    let offsets = neighbor_offsets(R::DIM);
    grid.advance(|view, coord| {
        let state = view.get(coord).unwrap_or(DEAD);
        let mut nbhd = [DEAD; 8];
        for (slot, &offset) in nbhd.iter_mut().zip(offsets) {
            *slot = match boundary.resolve(coord, offset, view.dims()) {
                Resolved::Cell(c) => view.get(c).unwrap_or(DEAD),
                Resolved::Zero => DEAD,
                Resolved::NoNeighbor => return state,
            };
        }
        rule.transition(state, R::desc(state, &nbhd[..offsets.len()]))
    });
    trace!("Living cells: {}", grid.count(|s| s != DEAD));
}

/// Advances a forest fire by one generation.
///
/// * A burning cell burns out.
/// * A healthy cell gets one independent ignition attempt from every cell
///   that was burning in the previous generation and reaches it, i.e., every
///   burning cell at `coord - (offset + wind)` for an offset in the Moore
///   neighborhood. It catches fire if at least one attempt succeeds.
///   All attempts are drawn from `rng`, cell by cell, row by row.
/// * Water, bare ground and burnt trees never change.
///
/// Cells ignited in this generation do not spread fire until the next one.
pub fn step_fire<G: Rng + ?Sized>(
    grid: &mut Grid<FireCell>,
    boundary: Boundary,
    rule: &FireRule,
    rng: &mut G,
) {
    let p = rule.ignition_probability();
    let (wx, wy) = rule.wind();
    let offsets = neighbor_offsets(Dim::Two);
    grid.advance(|view, coord| match view.get(coord) {
        Some(FireCell::Burning) => FireCell::Burned,
        Some(FireCell::Healthy) => {
            let mut ignited = false;
            for &(dx, dy) in offsets {
                let source = (-(dx + wx), -(dy + wy));
                if source == (0, 0) {
                    continue;
                }
                if is_burning(view, boundary.resolve(coord, source, view.dims())) {
                    ignited |= rng.gen_bool(p);
                }
            }
            if ignited {
                FireCell::Burning
            } else {
                FireCell::Healthy
            }
        }
        Some(cell) => cell,
        None => FireCell::Empty,
    });
    trace!(
        "Burning cells: {}",
        grid.count(|c| c == FireCell::Burning)
    );
}

fn is_burning(view: GridView<'_, FireCell>, resolved: Resolved) -> bool {
    match resolved {
        Resolved::Cell(c) => view.get(c) == Some(FireCell::Burning),
        Resolved::Zero | Resolved::NoNeighbor => false,
    }
}

/// Puts out the fire in the square `[center - range / 2, center + range / 2)`.
///
/// Burning cells in the square become healthy again.
/// Returns the number of extinguished cells.
pub fn extinguish(grid: &mut Grid<FireCell>, center: Coord, range: i32) -> usize {
    let half = range / 2;
    let inside = |(x, y): Coord| {
        center.0 - half <= x && x < center.0 + half && center.1 - half <= y && y < center.1 + half
    };
    let mut count = 0;
    grid.advance(|view, coord| match view.get(coord) {
        Some(FireCell::Burning) if inside(coord) => {
            count += 1;
            FireCell::Healthy
        }
        Some(cell) => cell,
        None => FireCell::Empty,
    });
    count
}
