//! Predator-prey (Wa-Tor style) ecology rule.
//!
//! Sharks spend one energy per tick and die at zero; eating a fish
//! restores `energy_per_fish`. Both species breed into a random empty
//! neighbor once old enough. Movement chains within a tick: occupants
//! act in discovery order against the working grid, so a cell vacated
//! early in the tick can be moved into later in the same tick. Energy
//! and age travel with the occupant on every move.

use crate::rule::{param, Rule};
use indexmap::IndexMap;
use rand::{Rng, RngCore};
use weald_core::{Cell, GridError, Rgb, RuleError, State};
use weald_grid::Snapshot;

/// Open water.
pub const EMPTY: State = State(0);
/// A fish.
pub const FISH: State = State(1);
/// A shark.
pub const SHARK: State = State(2);

/// The predator-prey rule.
///
/// Positional parameters: `[fish_breeding_age, shark_breeding_age,
/// energy_per_fish, shark_energy]`.
pub struct PredatorPrey {
    fish_breeding_age: f64,
    shark_breeding_age: f64,
    energy_per_fish: f64,
    shark_energy: f64,
    palette: IndexMap<State, Rgb>,
}

impl PredatorPrey {
    /// Create the rule from its positional parameter vector.
    pub fn from_params(params: &[f64]) -> Result<Self, RuleError> {
        Ok(Self {
            fish_breeding_age: param(params, 0)?,
            shark_breeding_age: param(params, 1)?,
            energy_per_fish: param(params, 2)?,
            shark_energy: param(params, 3)?,
            palette: IndexMap::from([
                (EMPTY, Rgb::WHITE),
                (FISH, Rgb::GREEN),
                (SHARK, Rgb::BLUE),
            ]),
        })
    }

    /// Neighbor flat indices currently holding `state`, read from the
    /// working grid (not the snapshot): occupancy changes as the tick
    /// progresses.
    fn working_neighbors(
        &self,
        snapshot: &Snapshot,
        cells: &[Cell],
        row: usize,
        col: usize,
        state: State,
    ) -> Result<Vec<usize>, GridError> {
        let size = snapshot.size();
        Ok(snapshot
            .neighbors(row, col)?
            .iter()
            .map(|n| n.row * size + n.col)
            .filter(|&i| cells[i].state == state)
            .collect())
    }

    fn step_shark(
        &self,
        snapshot: &Snapshot,
        cells: &mut [Cell],
        rng: &mut dyn RngCore,
        row: usize,
        col: usize,
    ) -> Result<(), GridError> {
        let size = snapshot.size();
        let here = row * size + col;
        if cells[here].state != SHARK {
            return Ok(());
        }
        if cells[here].energy <= 0.0 {
            cells[here] = Cell::with_state(EMPTY);
            return Ok(());
        }

        let empties = self.working_neighbors(snapshot, cells, row, col, EMPTY)?;
        if f64::from(cells[here].age) >= self.shark_breeding_age && !empties.is_empty() {
            let spawn = empties[rng.gen_range(0..empties.len())];
            cells[spawn] = Cell {
                state: SHARK,
                age: 0,
                energy: self.shark_energy,
            };
            cells[here].age = 0;
            return Ok(());
        }

        let fish = self.working_neighbors(snapshot, cells, row, col, FISH)?;
        if !fish.is_empty() {
            let meal = fish[rng.gen_range(0..fish.len())];
            cells[here].energy += self.energy_per_fish;
            cells[meal] = cells[here];
            cells[here] = Cell::with_state(EMPTY);
            return Ok(());
        }

        if !empties.is_empty() {
            let target = empties[rng.gen_range(0..empties.len())];
            cells[target] = cells[here];
            cells[here] = Cell::with_state(EMPTY);
        }
        Ok(())
    }

    fn step_fish(
        &self,
        snapshot: &Snapshot,
        cells: &mut [Cell],
        rng: &mut dyn RngCore,
        row: usize,
        col: usize,
    ) -> Result<(), GridError> {
        let size = snapshot.size();
        let here = row * size + col;
        // Eaten before its turn: it no longer acts.
        if cells[here].state != FISH {
            return Ok(());
        }

        let empties = self.working_neighbors(snapshot, cells, row, col, EMPTY)?;
        if f64::from(cells[here].age) >= self.fish_breeding_age && !empties.is_empty() {
            let spawn = empties[rng.gen_range(0..empties.len())];
            cells[spawn] = Cell::with_state(FISH);
            cells[here].age = 0;
            return Ok(());
        }

        if !empties.is_empty() {
            let target = empties[rng.gen_range(0..empties.len())];
            cells[target] = cells[here];
            cells[here] = Cell::with_state(EMPTY);
        }
        Ok(())
    }
}

impl Rule for PredatorPrey {
    fn name(&self) -> &str {
        "predator-prey"
    }

    fn palette(&self) -> &IndexMap<State, Rgb> {
        &self.palette
    }

    /// Every starting shark gets its full energy reserve.
    fn prime(&self, cells: &mut [Cell]) {
        for cell in cells.iter_mut().filter(|c| c.state == SHARK) {
            cell.energy = self.shark_energy;
        }
    }

    fn tick(&self, snapshot: &Snapshot, rng: &mut dyn RngCore) -> Result<Vec<Cell>, GridError> {
        let mut cells = snapshot.to_working_cells();

        // Upkeep before anyone acts: sharks pay one energy, everyone ages.
        for cell in cells.iter_mut() {
            if cell.state == SHARK {
                cell.energy -= 1.0;
                cell.age += 1;
            } else if cell.state == FISH {
                cell.age += 1;
            }
        }

        for (row, col) in snapshot.positions_of(SHARK) {
            self.step_shark(snapshot, &mut cells, rng, row, col)?;
        }
        for (row, col) in snapshot.positions_of(FISH) {
            self.step_fish(snapshot, &mut cells, rng, row, col)?;
        }
        Ok(cells)
    }
}
