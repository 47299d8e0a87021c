//! The world.

use crate::{
    boundary::{Boundary, Dim},
    cells::{Cell, Coord, FireCell},
    config::Config,
    error::Error,
    grid::{Grid, GridView},
    init,
    rules::{Automaton, FireRule},
};
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// The world.
///
/// A grid together with the automaton that advances it, the boundary
/// condition, and the random source of the run.
///
/// Each world owns its random source, so that two worlds never affect
/// each other.
pub struct World<A: Automaton, G: Rng = StdRng> {
    /// World configuration.
    pub(crate) config: Config,

    /// The automaton.
    automaton: A,

    /// The boundary condition in use.
    boundary: Boundary,

    /// The current generation.
    grid: Grid<A::Cell>,

    /// The random source.
    ///
    /// Only stochastic automata draw from it.
    rng: G,

    /// Number of generations computed so far.
    generation: u64,
}

impl<A: Automaton> World<A, StdRng> {
    /// Creates a new world from the configuration and the automaton.
    ///
    /// The first generation is built from [`Config::init`](crate::Config),
    /// with the random source seeded by `config.seed`, or by system entropy
    /// if there is no seed.
    pub fn new(config: &Config, automaton: A) -> Result<Self, Error> {
        check::<A>(config)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = init::build(&config.init, config.width, config.height, &mut rng)?;
        Self::from_grid(config, automaton, grid, rng)
    }
}

impl<A: Automaton, G: Rng> World<A, G> {
    /// Creates a new world with the given first generation and random source.
    ///
    /// `config.init` and `config.seed` are ignored.
    pub fn from_grid(
        config: &Config,
        automaton: A,
        grid: Grid<A::Cell>,
        rng: G,
    ) -> Result<Self, Error> {
        let boundary = check::<A>(config)?;
        if grid.dims() != (config.width, config.height) {
            return Err(Error::DimensionMismatch {
                expected: (config.width, config.height),
                found: grid.dims(),
            });
        }
        debug!(
            "New world: {}x{}, rule {}, {} boundary",
            config.width,
            config.height,
            automaton.label(0),
            boundary
        );
        Ok(World {
            config: config.clone(),
            automaton,
            boundary,
            grid,
            rng,
            generation: 0,
        })
    }

    /// Computes the next generation.
    pub fn step(&mut self) {
        self.automaton.update(&mut self.rng, self.generation);
        self.automaton
            .advance(&mut self.grid, self.boundary, &mut self.rng, self.generation);
        self.generation += 1;
        trace!(
            "Generation {}: {} active cells",
            self.generation,
            self.active_count()
        );
    }

    /// Computes `n` generations.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Computes `n` generations, calling `f` with the generation number
    /// and a snapshot after each of them.
    pub fn run_with<F>(&mut self, n: u64, mut f: F)
    where
        F: FnMut(u64, GridView<'_, A::Cell>),
    {
        for _ in 0..n {
            self.step();
            f(self.generation, self.grid.view());
        }
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid<A::Cell> {
        &self.grid
    }

    /// A snapshot of the current generation.
    pub fn view(&self) -> GridView<'_, A::Cell> {
        self.grid.view()
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The boundary condition in use.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// The automaton.
    pub fn automaton(&self) -> &A {
        &self.automaton
    }

    /// Number of active cells, i.e., living or burning cells.
    pub fn active_count(&self) -> usize {
        self.grid.count(Cell::is_active)
    }

    /// Whether the grid can never change again.
    pub fn is_settled(&self) -> bool {
        self.automaton.is_settled(&self.grid)
    }

    /// See [`engine::extinguish`](crate::engine::extinguish).
    ///
    /// Only the forest fire has something to extinguish.
    pub fn extinguish(&mut self, center: Coord, range: i32) -> usize {
        let count = self.automaton.extinguish(&mut self.grid, center, range);
        debug!("Extinguished {} cells around {:?}", count, center);
        count
    }
}

impl<G: Rng> World<FireRule, G> {
    /// Sets a healthy tree on fire. See [`init::ignite`].
    pub fn ignite(&mut self, coord: Coord) -> Result<bool, Error> {
        let ignited = init::ignite(&mut self.grid, coord)?;
        if ignited {
            debug!("Ignited {:?}", coord);
        }
        Ok(ignited)
    }

    /// Number of burning cells.
    pub fn burning_count(&self) -> usize {
        self.grid.count(|c| c == FireCell::Burning)
    }
}

/// Checks the size and the boundary condition, and returns the boundary condition.
fn check<A: Automaton>(config: &Config) -> Result<Boundary, Error> {
    if config.width <= 0 || config.height <= 0 {
        return Err(Error::NonPositiveError);
    }
    if A::DIM == Dim::One && config.height != 1 {
        return Err(Error::DimensionMismatch {
            expected: (config.width, 1),
            found: (config.width, config.height),
        });
    }
    let boundary = config.boundary.unwrap_or(A::DEFAULT_BOUNDARY);
    if !A::BOUNDARIES.contains(&boundary) {
        return Err(Error::UnsupportedBoundary(boundary));
    }
    Ok(boundary)
}
