//! A trait for `World`.

use crate::{
    boundary::Boundary,
    cells::{Cell, Color, Coord},
    config::Config,
    rules::Automaton,
    world::World,
};
use rand::Rng;

/// A trait for `World`.
///
/// So that we can switch between different automata using trait objects.
pub trait Simulate {
    /// Computes the next generation.
    fn step(&mut self);

    /// Computes `n` generations.
    fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Number of generations computed so far.
    fn generation(&self) -> u64;

    /// World configuration.
    fn config(&self) -> &Config;

    /// The boundary condition in use.
    fn boundary(&self) -> Boundary;

    /// Width.
    fn width(&self) -> i32 {
        self.config().width
    }

    /// Height.
    fn height(&self) -> i32 {
        self.config().height
    }

    /// The glyph of a cell. Returns `None` if there is no such cell.
    fn glyph(&self, coord: Coord) -> Option<char>;

    /// The display color of a cell. Returns `None` if there is no such cell.
    fn color(&self, coord: Coord) -> Option<Color>;

    /// Name of the rule that computes the next generation.
    fn rule_label(&self) -> String;

    /// Number of living or burning cells.
    fn active_count(&self) -> usize;

    /// Whether the grid can never change again.
    fn is_settled(&self) -> bool;

    /// Puts out the fire around `center`. See [`World::extinguish`].
    fn extinguish(&mut self, center: Coord, range: i32) -> usize;

    /// Displays the current generation in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) style,
    /// one line for each row.
    fn plaintext(&self) -> String {
        let mut str = String::with_capacity(((self.width() + 1) * self.height()) as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                str.extend(self.glyph((x, y)));
            }
            str.push('\n');
        }
        str
    }
}

/// The `Simulate` trait is implemented for every `World`.
impl<A: Automaton, G: Rng> Simulate for World<A, G> {
    fn step(&mut self) {
        self.step()
    }

    fn run(&mut self, n: u64) {
        self.run(n)
    }

    fn generation(&self) -> u64 {
        self.generation()
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn boundary(&self) -> Boundary {
        self.boundary()
    }

    fn glyph(&self, coord: Coord) -> Option<char> {
        self.grid().get(coord).map(Cell::glyph)
    }

    fn color(&self, coord: Coord) -> Option<Color> {
        self.grid().get(coord).map(Cell::color)
    }

    fn rule_label(&self) -> String {
        self.automaton().label(self.generation())
    }

    fn active_count(&self) -> usize {
        self.active_count()
    }

    fn is_settled(&self) -> bool {
        self.is_settled()
    }

    fn extinguish(&mut self, center: Coord, range: i32) -> usize {
        self.extinguish(center, range)
    }
}
