//! Schelling segregation rule.
//!
//! Every occupied cell judges its satisfaction against the pre-tick
//! snapshot: `same-state neighbors / occupied neighbors`, with an
//! isolated agent (no occupied neighbors at all) counting as unhappy.
//! Agents below `happy_percent` relocate, in discovered order, to a
//! uniformly random currently-empty cell; the vacated cell joins the
//! empty pool and may be taken later in the same tick.

use crate::rule::{param, Rule};
use indexmap::IndexMap;
use rand::{Rng, RngCore};
use weald_core::{Cell, GridError, Rgb, RuleError, State};
use weald_grid::Snapshot;

/// An unoccupied dwelling.
pub const EMPTY: State = State(0);
/// An agent of the first group.
pub const GROUP_A: State = State(1);
/// An agent of the second group.
pub const GROUP_B: State = State(2);

/// The segregation rule.
///
/// Positional parameters: `[happy_percent]`.
pub struct Segregation {
    happy_percent: f64,
    palette: IndexMap<State, Rgb>,
}

impl Segregation {
    /// Create the rule from its positional parameter vector.
    pub fn from_params(params: &[f64]) -> Result<Self, RuleError> {
        Ok(Self {
            happy_percent: param(params, 0)?,
            palette: IndexMap::from([
                (EMPTY, Rgb::WHITE),
                (GROUP_A, Rgb::RED),
                (GROUP_B, Rgb::BLUE),
            ]),
        })
    }

    /// Happiness of an occupied cell, judged against the snapshot.
    fn is_unhappy(&self, snapshot: &Snapshot, row: usize, col: usize) -> Result<bool, GridError> {
        let mine = snapshot.cell(row, col)?.state;
        let mut occupied = 0usize;
        let mut same = 0usize;
        for n in snapshot.neighbors(row, col)? {
            if n.state != EMPTY {
                occupied += 1;
                if n.state == mine {
                    same += 1;
                }
            }
        }
        if occupied == 0 {
            // A threshold of zero is satisfied by any ratio, isolation
            // included.
            return Ok(self.happy_percent > 0.0);
        }
        Ok((same as f64 / occupied as f64) < self.happy_percent)
    }
}

impl Rule for Segregation {
    fn name(&self) -> &str {
        "segregation"
    }

    fn palette(&self) -> &IndexMap<State, Rgb> {
        &self.palette
    }

    fn tick(&self, snapshot: &Snapshot, rng: &mut dyn RngCore) -> Result<Vec<Cell>, GridError> {
        let size = snapshot.size();
        let mut cells = snapshot.to_working_cells();

        let mut empty: Vec<usize> = Vec::new();
        let mut unhappy: Vec<usize> = Vec::new();
        for row in 0..size {
            for col in 0..size {
                let here = row * size + col;
                if snapshot.cell(row, col)?.state == EMPTY {
                    empty.push(here);
                } else if self.is_unhappy(snapshot, row, col)? {
                    unhappy.push(here);
                }
            }
        }

        for agent in unhappy {
            if empty.is_empty() {
                break;
            }
            let pick = rng.gen_range(0..empty.len());
            let dest = empty.swap_remove(pick);
            cells[dest] = cells[agent];
            cells[agent] = Cell::with_state(EMPTY);
            empty.push(agent);
        }
        Ok(cells)
    }
}
