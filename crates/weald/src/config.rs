//! Simulation configuration and the facade error type.
//!
//! The external loader (XML parsing, schema validation) is out of
//! scope; this is the already-normalized contract it hands over.

use std::error::Error;
use std::fmt;
use weald_core::{ConfigError, GridError, RuleError};
use weald_grid::{Composition, Placement};
use weald_rules::RuleKind;
use weald_topology::{EdgePolicy, NeighborSelection, Shape};

/// How the grid is (re)initialized.
#[derive(Clone, Debug, PartialEq)]
pub enum Init {
    /// Random assignment from a state composition.
    Random(Composition),
    /// Explicit placement over a default fill.
    Explicit(Placement),
}

/// Everything the core consumes from the configuration loader.
///
/// Topology (`shape`, `edge`, `selection`) is immutable for the life of
/// the simulation; `init` and `seed` are retained so `reset` can replay
/// the run from the start.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Side length N of the N×N grid.
    pub grid_size: usize,
    /// Cell shape.
    pub shape: Shape,
    /// Edge policy.
    pub edge: EdgePolicy,
    /// Neighbor selection mask.
    pub selection: NeighborSelection,
    /// Initial composition or explicit locations.
    pub init: Init,
    /// Which rule set drives the automaton.
    pub rule: RuleKind,
    /// Rule-specific positional parameter vector.
    pub params: Vec<f64>,
    /// RNG seed; one logical generator per simulation.
    pub seed: u64,
}

/// Any error the simulation facade can surface.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// Composition, placement, or other configuration data could not
    /// describe a valid grid.
    Config(ConfigError),
    /// Grid construction or a coordinate query failed.
    Grid(GridError),
    /// Rule construction failed on its parameter vector.
    Rule(RuleError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Grid(e) => write!(f, "grid error: {e}"),
            Self::Rule(e) => write!(f, "rule error: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Rule(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SimError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RuleError> for SimError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}
