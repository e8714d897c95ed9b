//! Life-like birth/death automaton.
//!
//! Birth on exactly 3 populated neighbors; death on 1 or fewer, or 4 or
//! more. The survival band is intentionally narrower than the canonical
//! "survive on 2-3" rule — the historical revisions of this automaton
//! disagree with each other on the thresholds, and this module keeps
//! the behavior as shipped rather than silently correcting it.

use crate::rule::Rule;
use indexmap::IndexMap;
use rand::RngCore;
use weald_core::{Cell, GridError, Rgb, RuleError, State};
use weald_grid::Snapshot;

/// No occupant.
pub const EMPTY: State = State(0);
/// A live occupant.
pub const POPULATED: State = State(1);

/// The life-like automaton rule. Takes no parameters.
pub struct Life {
    palette: IndexMap<State, Rgb>,
}

impl Life {
    /// Create the rule.
    pub fn new() -> Self {
        Self {
            palette: IndexMap::from([(EMPTY, Rgb::GREY), (POPULATED, Rgb::YELLOW)]),
        }
    }

    /// Create the rule from a (ignored) positional parameter vector.
    pub fn from_params(_params: &[f64]) -> Result<Self, RuleError> {
        Ok(Self::new())
    }
}

impl Default for Life {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Life {
    fn name(&self) -> &str {
        "life"
    }

    fn palette(&self) -> &IndexMap<State, Rgb> {
        &self.palette
    }

    fn tick(&self, snapshot: &Snapshot, _rng: &mut dyn RngCore) -> Result<Vec<Cell>, GridError> {
        let size = snapshot.size();
        let mut next = Vec::with_capacity(snapshot.cell_count());
        for row in 0..size {
            for col in 0..size {
                let populated = snapshot
                    .neighbors(row, col)?
                    .iter()
                    .filter(|n| n.state == POPULATED)
                    .count();
                let current = snapshot.cell(row, col)?.state;
                let state = if current == EMPTY {
                    if populated == 3 {
                        POPULATED
                    } else {
                        EMPTY
                    }
                } else if populated <= 1 || populated >= 4 {
                    EMPTY
                } else {
                    POPULATED
                };
                next.push(Cell::with_state(state));
            }
        }
        Ok(next)
    }
}
