//! The [`Cell`] record and the [`State`] tag newtype.

use std::fmt;

/// A small-integer state tag whose meaning is defined per rule set.
///
/// Rules declare their own tag values (e.g. the fire rule uses
/// 0 = empty, 1 = green, 2 = burning). A `State` carries no semantics
/// outside the rule that owns it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(pub u8);

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for State {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// One cell of a grid: a state tag plus two rule-owned counters.
///
/// `age` and `energy` have rule-specific semantics (burn duration,
/// breeding readiness, growth gradient, shark energy) and are meaningless
/// outside the rule that maintains them. Rules only ever mutate these
/// three fields; topology and edge policy live on the grid and are
/// immutable after construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    /// Current state tag. Always one of the active rule's declared tags.
    pub state: State,
    /// Non-negative counter with rule-specific meaning.
    pub age: u32,
    /// Floating-point reserve, used only by the predator-prey rule.
    pub energy: f64,
}

impl Cell {
    /// A cell in the given state with zeroed age and energy.
    pub fn with_state(state: State) -> Self {
        Self {
            state,
            age: 0,
            energy: 0.0,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell state: {}", self.state)
    }
}
