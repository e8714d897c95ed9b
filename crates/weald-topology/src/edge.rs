//! Grid edge (boundary) policy.

/// How a grid handles neighbor coordinates that fall outside its bounds.
///
/// This controls the *topology* seen by neighbor queries, not an error
/// condition: a computed neighbor landing outside a bounded grid is
/// expected and simply dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Out-of-bounds neighbors are omitted (edge cells have fewer
    /// neighbors, corners fewest).
    Bounded,
    /// Out-of-bounds neighbors wrap to the opposite side (torus).
    Toroidal,
}
