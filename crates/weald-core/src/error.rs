//! Error types for the Weald engine core, organized by subsystem:
//! configuration (composition/placement resolution), grid (bounds and
//! commit), and rule (parameter vectors).
//!
//! Exhaustion conditions inside a tick — no empty neighbor to move or
//! breed into, no empty cell to relocate to — are normal rule behavior
//! and never surface as errors.

use std::error::Error;
use std::fmt;

/// Errors detected while resolving an initial configuration.
///
/// The external loader is expected to normalize and bounds-check its
/// inputs, but the core still refuses to guess when the data it is
/// handed cannot describe a valid grid.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A composition carried more than one "infer the remainder" entry.
    MultipleRemainders {
        /// Index of the first remainder entry.
        first: usize,
        /// Index of the second remainder entry.
        second: usize,
    },
    /// A composition without a remainder entry did not account for
    /// every cell.
    CompositionMismatch {
        /// Number of cells the grid has.
        expected: usize,
        /// Number of cells the composition resolved to.
        actual: usize,
    },
    /// A composition with no entries at all.
    EmptyComposition,
    /// An explicit placement point lies outside the grid.
    PointOutOfBounds {
        /// Row of the offending point.
        row: usize,
        /// Column of the offending point.
        col: usize,
        /// Grid side length.
        size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleRemainders { first, second } => write!(
                f,
                "composition has remainder entries at both {first} and {second}"
            ),
            Self::CompositionMismatch { expected, actual } => write!(
                f,
                "composition resolves to {actual} cells, grid has {expected}"
            ),
            Self::EmptyComposition => write!(f, "composition has no entries"),
            Self::PointOutOfBounds { row, col, size } => write!(
                f,
                "placement point ({row}, {col}) outside [0, {size})x[0, {size})"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Errors from grid construction and coordinate queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A *queried* coordinate is outside the grid. Distinct from a
    /// computed neighbor falling outside it, which the edge policy
    /// handles silently.
    CoordOutOfBounds {
        /// Queried row.
        row: usize,
        /// Queried column.
        col: usize,
        /// Grid side length.
        size: usize,
    },
    /// A committed cell buffer does not match the grid's cell count.
    CommitSizeMismatch {
        /// Number of cells the grid has.
        expected: usize,
        /// Number of cells in the committed buffer.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::CoordOutOfBounds { row, col, size } => {
                write!(f, "({row}, {col}) is not in the grid bounds [0, {size})")
            }
            Self::CommitSizeMismatch { expected, actual } => {
                write!(f, "committed {actual} cells, grid holds {expected}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from rule-engine construction.
///
/// Parameter vectors are positional and pre-validated by the loader;
/// the only failure the core itself raises is an out-of-range index
/// into the vector, which fails fast instead of misbehaving silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A rule indexed past the end of its parameter vector.
    ParamOutOfRange {
        /// The index the rule asked for.
        index: usize,
        /// Length of the supplied vector.
        len: usize,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParamOutOfRange { index, len } => {
                write!(f, "parameter index {index} out of range (vector length {len})")
            }
        }
    }
}

impl Error for RuleError {}
