//! All kinds of errors in this crate.

use crate::{boundary::Boundary, cells::Coord};
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Every error is reported when a world is constructed.
/// Once a world exists, stepping it never fails.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Invalid rule number: {0}. Rule numbers must lie in 0..=255.
    InvalidRule(i64),
    /// Unknown rule: {0:?}.
    UnknownRule(String),
    /// Coordinates {0:?} lie outside the grid.
    OutOfBounds(Coord),
    /// Expected a grid of size {expected:?}, found {found:?}.
    DimensionMismatch {
        /// `(width, height)` declared by the configuration.
        expected: (i32, i32),
        /// `(width, height)` of the supplied content.
        found: (i32, i32),
    },
    /// Width / height / steps per rule should be positive.
    NonPositiveError,
    /// A {0}×{1} grid is too large.
    TooLarge(i32, i32),
    /// Probability should lie in [0, 1], got {0}.
    InvalidProbability(f64),
    /// Wind components should lie in -1..=1, got {0:?}.
    InvalidWind(Coord),
    /// Boundary condition `{0}` is not supported by this automaton.
    UnsupportedBoundary(Boundary),
    /// Unknown cell glyph: {0:?}.
    InvalidGlyph(char),
    /// At least one rule is required.
    EmptyRuleList,
}
