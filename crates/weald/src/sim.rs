//! The [`Simulation`]: one grid, one rule, one seeded RNG.

use crate::config::{Init, SimConfig, SimError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use weald_core::{Cell, Rgb, State};
use weald_grid::{Grid, Snapshot};
use weald_rules::Rule;

/// A running cellular-automaton simulation.
///
/// Single-threaded and synchronous: `step` is a pure function of
/// (snapshot, parameters, RNG state) that fully completes before it
/// returns, so an external timer loop can drive it and stop between
/// ticks at any point. The RNG is owned here and threaded into every
/// randomized operation, which makes seeded runs fully reproducible.
pub struct Simulation {
    grid: Grid,
    rule: Box<dyn Rule>,
    rng: ChaCha8Rng,
    config: SimConfig,
    ticks: u64,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("rule", &self.rule.name())
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Build and initialize a simulation from a loader-supplied
    /// configuration.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let rule = config.rule.build(&config.params)?;
        let grid = Grid::new(
            config.grid_size,
            config.shape,
            config.edge,
            config.selection.clone(),
        )?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut sim = Self {
            grid,
            rule,
            rng,
            config,
            ticks: 0,
        };
        sim.initialize()?;
        Ok(sim)
    }

    /// Apply the retained initializer to the current grid and let the
    /// rule prime the result.
    fn initialize(&mut self) -> Result<(), SimError> {
        match &self.config.init {
            Init::Random(composition) => {
                self.grid.set_random(composition, &mut self.rng)?;
            }
            Init::Explicit(placement) => {
                self.grid.set_specific(placement)?;
            }
        }
        self.rule.prime(self.grid.cells_mut());
        Ok(())
    }

    /// Advance the automaton by exactly one tick.
    ///
    /// The rule reads a frozen snapshot and the freshly built
    /// generation is committed atomically, so no cell's update can see
    /// an already-updated neighbor.
    pub fn step(&mut self) -> Result<(), SimError> {
        let snapshot = self.grid.snapshot();
        let next = self.rule.tick(&snapshot, &mut self.rng)?;
        self.grid.commit(next)?;
        self.ticks += 1;
        Ok(())
    }

    /// Reinitialize from the retained configuration.
    ///
    /// The RNG is reseeded from the configured seed, so a reset run
    /// replays the original tick-for-tick.
    pub fn reset(&mut self) -> Result<(), SimError> {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        if self.grid.size() != self.config.grid_size {
            self.grid.resize(self.config.grid_size)?;
        }
        self.ticks = 0;
        self.initialize()
    }

    /// Reallocate to a new side length and reinitialize.
    ///
    /// The new size is retained, so a later `reset` keeps it.
    pub fn resize(&mut self, new_size: usize) -> Result<(), SimError> {
        self.grid.resize(new_size)?;
        self.config.grid_size = new_size;
        self.initialize()
    }

    /// Read-only view of every cell's `(state, age)`, row-major.
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    /// An immutable snapshot of the current grid.
    pub fn snapshot(&self) -> Snapshot {
        self.grid.snapshot()
    }

    /// Side length N of the grid.
    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// Number of ticks applied since construction or the last reset.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// The active rule's name.
    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }

    /// Display color for a state, from the active rule's palette.
    pub fn color_of(&self, state: State) -> Option<Rgb> {
        self.rule.color(state)
    }

    /// The configuration the simulation was built from (including any
    /// retained resize).
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
