//! Running several rules one after another.

use crate::{
    boundary::{Boundary, Dim},
    cells::Coord,
    error::Error,
    grid::Grid,
    rules::Automaton,
};
use log::debug;
use rand::Rng;

/// A list of rules, each of which runs for `steps_per_rule` generations.
///
/// After the last rule, the schedule starts over from the first one.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule<A: Automaton> {
    stages: Vec<A>,
    steps_per_rule: u64,
}

impl<A: Automaton> Schedule<A> {
    /// Creates a new schedule.
    pub fn new(stages: Vec<A>, steps_per_rule: u64) -> Result<Self, Error> {
        if stages.is_empty() {
            return Err(Error::EmptyRuleList);
        }
        if steps_per_rule == 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Schedule {
            stages,
            steps_per_rule,
        })
    }

    /// The rule in use at `generation`.
    pub fn stage(&self, generation: u64) -> &A {
        &self.stages[self.stage_index(generation)]
    }

    fn stage_index(&self, generation: u64) -> usize {
        ((generation / self.steps_per_rule) % self.stages.len() as u64) as usize
    }
}

impl<A: Automaton> Automaton for Schedule<A> {
    type Cell = A::Cell;
    const DIM: Dim = A::DIM;
    const BOUNDARIES: &'static [Boundary] = A::BOUNDARIES;
    const DEFAULT_BOUNDARY: Boundary = A::DEFAULT_BOUNDARY;

    fn advance<G: Rng + ?Sized>(
        &self,
        grid: &mut Grid<Self::Cell>,
        boundary: Boundary,
        rng: &mut G,
        generation: u64,
    ) {
        if generation > 0 && self.stages.len() > 1 && generation % self.steps_per_rule == 0 {
            debug!(
                "Generation {}: switching to rule {}",
                generation,
                self.stage(generation).label(generation)
            );
        }
        self.stage(generation).advance(grid, boundary, rng, generation);
    }

    fn update<G: Rng + ?Sized>(&mut self, rng: &mut G, generation: u64) {
        for stage in &mut self.stages {
            stage.update(rng, generation);
        }
    }

    fn label(&self, generation: u64) -> String {
        self.stage(generation).label(generation)
    }

    fn is_settled(&self, grid: &Grid<Self::Cell>) -> bool {
        self.stages.iter().all(|stage| stage.is_settled(grid))
    }

    fn extinguish(&self, grid: &mut Grid<Self::Cell>, center: Coord, range: i32) -> usize {
        self.stages[0].extinguish(grid, center, range)
    }
}
