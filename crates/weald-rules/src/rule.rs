//! The [`Rule`] trait shared by every transition rule engine.

use indexmap::IndexMap;
use rand::RngCore;
use weald_core::{Cell, GridError, Rgb, RuleError, State};
use weald_grid::Snapshot;

/// One state-transition algorithm over a grid.
///
/// # Contract
///
/// - `tick` reads exclusively from the frozen snapshot it is given
///   (plus its own working buffer for rules whose updates chain within
///   a tick) and returns the full next generation of cells in row-major
///   order; the caller commits it.
/// - `&self` — rules hold parameters only; all mutable simulation state
///   lives in the grid, and randomness comes through the injected RNG.
/// - State tags and the display palette are owned by the rule; the
///   renderer consumes the palette as-is.
///
/// # Object safety
///
/// The trait is object-safe; the simulation stores its rule as a
/// `Box<dyn Rule>` selected through [`RuleKind`](crate::RuleKind).
pub trait Rule: Send + 'static {
    /// Human-readable rule name for error reporting.
    fn name(&self) -> &str;

    /// The state→color mapping, in declaration order.
    fn palette(&self) -> &IndexMap<State, Rgb>;

    /// Display color for a state, if the rule declares it.
    fn color(&self, state: State) -> Option<Rgb> {
        self.palette().get(&state).copied()
    }

    /// Post-initialization hook, called once after the grid is
    /// (re)initialized and before the first tick.
    ///
    /// Default: no-op. The predator-prey rule uses this to give every
    /// starting shark its full energy reserve.
    fn prime(&self, _cells: &mut [Cell]) {}

    /// Advance the automaton by exactly one tick.
    fn tick(&self, snapshot: &Snapshot, rng: &mut dyn RngCore) -> Result<Vec<Cell>, GridError>;
}

/// Fetch a positional parameter, failing fast on a short vector.
pub(crate) fn param(params: &[f64], index: usize) -> Result<f64, RuleError> {
    params.get(index).copied().ok_or(RuleError::ParamOutOfRange {
        index,
        len: params.len(),
    })
}
