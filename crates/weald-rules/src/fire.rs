//! Spreading-fire percolation rule.
//!
//! A burning cell burns for `burn_time` ticks (tracked in `age`), then
//! reverts to empty. An empty cell regrows with probability
//! `prob_grow`. A green cell ignites against the cumulative probability
//! `prob_catch * burning_neighbors + prob_lightning * prob_catch` — one
//! RNG draw per cell per tick decides.
//!
//! Based on the Shiflet spreading-fire model.

use crate::rule::{param, Rule};
use indexmap::IndexMap;
use rand::{Rng, RngCore};
use weald_core::{Cell, GridError, Rgb, RuleError, State};
use weald_grid::Snapshot;

/// Burnt-out or never-grown ground.
pub const EMPTY: State = State(0);
/// A living tree.
pub const GREEN: State = State(1);
/// A tree on fire.
pub const BURNING: State = State(2);

/// The spreading-fire rule.
///
/// Positional parameters: `[prob_catch, prob_lightning, burn_time,
/// prob_grow]`.
pub struct Fire {
    prob_catch: f64,
    prob_lightning: f64,
    burn_time: f64,
    prob_grow: f64,
    palette: IndexMap<State, Rgb>,
}

impl Fire {
    /// Create the rule from its positional parameter vector.
    pub fn from_params(params: &[f64]) -> Result<Self, RuleError> {
        Ok(Self {
            prob_catch: param(params, 0)?,
            prob_lightning: param(params, 1)?,
            burn_time: param(params, 2)?,
            prob_grow: param(params, 3)?,
            palette: IndexMap::from([
                (EMPTY, Rgb::YELLOW),
                (GREEN, Rgb::GREEN),
                (BURNING, Rgb::RED),
            ]),
        })
    }
}

impl Rule for Fire {
    fn name(&self) -> &str {
        "fire"
    }

    fn palette(&self) -> &IndexMap<State, Rgb> {
        &self.palette
    }

    fn tick(&self, snapshot: &Snapshot, rng: &mut dyn RngCore) -> Result<Vec<Cell>, GridError> {
        let size = snapshot.size();
        let mut next = Vec::with_capacity(snapshot.cell_count());
        for row in 0..size {
            for col in 0..size {
                let current = *snapshot.cell(row, col)?;
                next.push(match current.state {
                    s if s == BURNING => {
                        let age = current.age + 1;
                        if f64::from(age) >= self.burn_time {
                            Cell::with_state(EMPTY)
                        } else {
                            Cell {
                                state: BURNING,
                                age,
                                energy: 0.0,
                            }
                        }
                    }
                    s if s == EMPTY => {
                        if rng.gen::<f64>() <= self.prob_grow {
                            Cell::with_state(GREEN)
                        } else {
                            current
                        }
                    }
                    _ => {
                        let burning = snapshot
                            .neighbors(row, col)?
                            .iter()
                            .filter(|n| n.state == BURNING)
                            .count();
                        let ignite = self.prob_catch * burning as f64
                            + self.prob_lightning * self.prob_catch;
                        if rng.gen::<f64>() <= ignite {
                            Cell::with_state(BURNING)
                        } else {
                            current
                        }
                    }
                });
            }
        }
        Ok(next)
    }
}
