//! The grid of cells.

use crate::{
    cells::{Cell, Coord},
    error::Error,
};
use std::mem;

/// A fixed-size rectangle of cells.
///
/// Besides the current generation, the grid keeps a second buffer of the same
/// size. A new generation is written into that buffer by
/// [`advance`](Grid::advance), and the two buffers are swapped afterwards.
/// Readers only ever see the current buffer.
#[derive(Clone, Debug)]
pub struct Grid<C: Cell> {
    width: i32,
    height: i32,

    /// The current generation, row by row.
    cells: Box<[C]>,

    /// The generation being computed.
    ///
    /// Its content is meaningless outside [`advance`](Grid::advance).
    next: Box<[C]>,
}

impl<C: Cell> Grid<C> {
    /// Creates a grid filled with the background state.
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
        Self::from_fn(width, height, |_| C::BACKGROUND)
    }

    /// Creates a grid whose cells are given by a classification function.
    ///
    /// The function is called once for every cell, row by row.
    pub fn from_fn<F>(width: i32, height: i32, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(Coord) -> C,
    {
        let mut cells = Vec::with_capacity(cell_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                cells.push(f((x, y)));
            }
        }
        Ok(Self::from_vec(width, height, cells))
    }

    /// Creates a grid from its cells, row by row.
    pub fn from_cells(width: i32, height: i32, cells: Vec<C>) -> Result<Self, Error> {
        if cells.len() != cell_count(width, height)? {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                found: ((cells.len() / height as usize) as i32, height),
            });
        }
        Ok(Self::from_vec(width, height, cells))
    }

    /// Parses a grid from plaintext, one line for each row.
    ///
    /// The characters are read by [`Cell::from_glyph`].
    pub fn parse(width: i32, height: i32, text: &str) -> Result<Self, Error> {
        let count = cell_count(width, height)?;
        let rows: Vec<&str> = text.lines().collect();
        let found_width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as i32;
        if rows.len() as i32 != height || rows.iter().any(|row| row.chars().count() as i32 != width)
        {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                found: (found_width, rows.len() as i32),
            });
        }
        let mut cells = Vec::with_capacity(count);
        for row in rows {
            for c in row.chars() {
                cells.push(C::from_glyph(c).ok_or(Error::InvalidGlyph(c))?);
            }
        }
        Self::from_cells(width, height, cells)
    }

    fn from_vec(width: i32, height: i32, cells: Vec<C>) -> Self {
        let cells = cells.into_boxed_slice();
        let next = cells.clone();
        Grid {
            width,
            height,
            cells,
            next,
        }
    }

    /// Width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Whether the coordinates lie inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        self.view().contains(coord)
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    pub fn get(&self, coord: Coord) -> Option<C> {
        self.view().get(coord)
    }

    /// All cells of the current generation, row by row.
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Number of cells satisfying `pred`.
    pub fn count<P: Fn(C) -> bool>(&self, pred: P) -> usize {
        self.cells.iter().filter(|&&c| pred(c)).count()
    }

    /// A read-only view of the current generation.
    pub fn view(&self) -> GridView<'_, C> {
        GridView {
            width: self.width,
            height: self.height,
            cells: &self.cells,
        }
    }

    /// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext)
    /// style, using [`Cell::glyph`].
    pub fn plaintext(&self) -> String {
        self.view().plaintext()
    }

    /// Sets the state of a cell outside of a generation step.
    ///
    /// Only used while initializing.
    pub(crate) fn set(&mut self, coord: Coord, state: C) -> Result<(), Error> {
        let index = self.index(coord).ok_or(Error::OutOfBounds(coord))?;
        self.cells[index] = state;
        Ok(())
    }

    /// Computes the next generation and makes it current.
    ///
    /// `f` receives the current generation and the coordinates of a cell,
    /// and returns the next state of that cell. It never sees a partially
    /// computed generation.
    pub(crate) fn advance<F>(&mut self, mut f: F)
    where
        F: FnMut(GridView<'_, C>, Coord) -> C,
    {
        let Grid {
            width,
            height,
            cells,
            next,
        } = self;
        let view = GridView {
            width: *width,
            height: *height,
            cells: &cells[..],
        };
        let w = *width as usize;
        for (i, slot) in next.iter_mut().enumerate() {
            let coord = ((i % w) as i32, (i / w) as i32);
            *slot = f(view, coord);
        }
        mem::swap(cells, next);
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.view().index(coord)
    }
}

/// Number of cells in a `width × height` grid.
///
/// Both sides must be positive, and the grid must fit in `i32` cells.
fn cell_count(width: i32, height: i32) -> Result<usize, Error> {
    if width <= 0 || height <= 0 {
        return Err(Error::NonPositiveError);
    }
    width
        .checked_mul(height)
        .map(|n| n as usize)
        .ok_or(Error::TooLarge(width, height))
}

/// Two grids are equal when they have the same size and the same current cells.
impl<C: Cell> PartialEq for Grid<C> {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && self.cells == other.cells
    }
}

impl<C: Cell> Eq for Grid<C> {}

/// A read-only snapshot of a generation.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a, C: Cell> {
    width: i32,
    height: i32,
    cells: &'a [C],
}

impl<'a, C: Cell> GridView<'a, C> {
    /// Width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Whether the coordinates lie inside the grid.
    pub fn contains(&self, (x, y): Coord) -> bool {
        0 <= x && x < self.width && 0 <= y && y < self.height
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    pub fn get(&self, coord: Coord) -> Option<C> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &'a [C] {
        self.cells
    }

    /// Displays the snapshot, one line for each row.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.cells.chunks(self.width as usize) {
            str.extend(row.iter().map(|c| c.glyph()));
            str.push('\n');
        }
        str
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.1 as usize * self.width as usize + coord.0 as usize)
        } else {
            None
        }
    }
}
