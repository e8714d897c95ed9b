//! Weald: a cellular-automaton simulation engine.
//!
//! A square, triangular, or hexagonal grid of finite-state cells
//! evolves under one of five pluggable rule sets: a life-like
//! birth/death automaton, spreading-fire percolation, predator-prey
//! ecology, Schelling segregation, and cyclic-dominance growth.
//!
//! This is the top-level facade crate: it re-exports the sub-crates and
//! drives them through [`Simulation`], which owns the grid, the rule,
//! and one seeded RNG, and exposes exactly the surface an external UI
//! needs — `step`, `reset`, `resize`, a read-only cell snapshot, and
//! the rule's state→color palette.
//!
//! # Quick start
//!
//! ```rust
//! use weald::prelude::*;
//!
//! let config = SimConfig {
//!     grid_size: 16,
//!     shape: Shape::Square,
//!     edge: EdgePolicy::Toroidal,
//!     selection: NeighborSelection::All,
//!     init: Init::Random(Composition::fractions([
//!         Share::Given(0.3),
//!         Share::Remainder,
//!     ])),
//!     rule: RuleKind::Life,
//!     params: vec![],
//!     seed: 42,
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! sim.step().unwrap();
//! assert_eq!(sim.tick_count(), 1);
//! assert_eq!(sim.cells().len(), 256);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core cell, state, color, and error types (`weald-core`).
pub use weald_core as types;

/// Shapes, offset tables, and edge policies (`weald-topology`).
pub use weald_topology as topology;

/// The grid engine (`weald-grid`).
pub use weald_grid as grid;

/// The five rule engines and the registry (`weald-rules`).
pub use weald_rules as rules;

pub mod config;
pub mod sim;

pub use config::{Init, SimConfig, SimError};
pub use sim::Simulation;

/// Everything needed to configure and run a simulation.
pub mod prelude {
    pub use crate::config::{Init, SimConfig, SimError};
    pub use crate::sim::Simulation;
    pub use weald_core::{Cell, Rgb, State};
    pub use weald_grid::{Composition, Grid, Placement, Share, Snapshot};
    pub use weald_rules::{Rule, RuleKind};
    pub use weald_topology::{EdgePolicy, NeighborSelection, Shape};
}
