//! Explicit cell placements for deterministic initialization.

use weald_core::State;

/// An explicit initial configuration: a fill state for every unlisted
/// cell, then `(row, col, state)` points applied in order.
///
/// Later points win on conflict, matching list order in the source
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Explicit `(row, col, state)` assignments, applied in order.
    pub points: Vec<(usize, usize, State)>,
    /// State assigned to every cell not named in `points`.
    pub fill: State,
}

impl Placement {
    /// A placement that fills the whole grid with one state.
    pub fn fill_only(fill: State) -> Self {
        Self {
            points: Vec::new(),
            fill,
        }
    }

    /// A placement with explicit points over a filled background.
    pub fn new(points: Vec<(usize, usize, State)>, fill: State) -> Self {
        Self { points, fill }
    }
}
