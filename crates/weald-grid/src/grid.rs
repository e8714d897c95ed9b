//! The [`Grid`]: owned cell storage plus immutable topology.

use crate::composition::Composition;
use crate::placement::Placement;
use crate::query;
use crate::snapshot::Snapshot;
use rand::{Rng, RngCore};
use smallvec::SmallVec;
use std::fmt;
use weald_core::{Cell, ConfigError, GridError, State};
use weald_topology::{EdgePolicy, NeighborSelection, Shape};

/// One resolved neighbor of a queried cell: its coordinate and the
/// state it held at query time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    /// Neighbor row.
    pub row: usize,
    /// Neighbor column.
    pub col: usize,
    /// Neighbor state at query time.
    pub state: State,
}

/// An N×N grid of cells with a fixed shape, edge policy, and neighbor
/// selection.
///
/// Topology is immutable after construction; rules only ever mutate
/// cell contents, and only through the snapshot/commit cycle (or the
/// one-time [`cells_mut`](Grid::cells_mut) priming hook right after
/// initialization).
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    size: usize,
    shape: Shape,
    edge: EdgePolicy,
    selection: NeighborSelection,
}

impl Grid {
    /// Create a grid of default (state 0) cells.
    ///
    /// Returns [`GridError::EmptyGrid`] when `size` is zero.
    pub fn new(
        size: usize,
        shape: Shape,
        edge: EdgePolicy,
        selection: NeighborSelection,
    ) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            cells: vec![Cell::default(); size * size],
            size,
            shape,
            edge,
            selection,
        })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, N².
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Edge policy.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge
    }

    /// Neighbor selection.
    pub fn selection(&self) -> &NeighborSelection {
        &self.selection
    }

    /// The cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        query::check_bounds(row, col, self.size)?;
        Ok(&self.cells[query::index(row, col, self.size)])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to all cells, for post-initialization priming
    /// (e.g. assigning every starting shark its full energy).
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// The neighbors of `(row, col)` under this grid's topology.
    ///
    /// A queried coordinate outside the grid is a contract error; a
    /// *computed* neighbor outside a bounded grid is silently omitted,
    /// and a toroidal grid wraps it instead.
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> Result<SmallVec<[Neighbor; 12]>, GridError> {
        query::neighbors(
            &self.cells,
            self.size,
            self.shape,
            self.edge,
            &self.selection,
            row,
            col,
        )
    }

    /// Randomly initialize the grid from a composition.
    ///
    /// The composition resolves to one state tag per cell; cells are
    /// assigned in row-major order by drawing uniform indices from the
    /// shrinking tag pool, so every permutation of the resolved
    /// multiset is equally likely. Ages and energies reset to zero.
    pub fn set_random(
        &mut self,
        composition: &Composition,
        rng: &mut dyn RngCore,
    ) -> Result<(), ConfigError> {
        let counts = composition.resolve(self.cells.len())?;
        let mut pool: Vec<State> = Vec::with_capacity(self.cells.len());
        for (tag, &count) in counts.iter().enumerate() {
            pool.extend(std::iter::repeat(State(tag as u8)).take(count));
        }
        for cell in &mut self.cells {
            let i = rng.gen_range(0..pool.len());
            *cell = Cell::with_state(pool.swap_remove(i));
        }
        Ok(())
    }

    /// Explicitly initialize the grid from a placement.
    ///
    /// Every cell is first filled with the placement's default state,
    /// then the explicit points are applied in order (later points win
    /// on conflict). Ages and energies reset to zero.
    pub fn set_specific(&mut self, placement: &Placement) -> Result<(), ConfigError> {
        for &(row, col, _) in &placement.points {
            if row >= self.size || col >= self.size {
                return Err(ConfigError::PointOutOfBounds {
                    row,
                    col,
                    size: self.size,
                });
            }
        }
        self.cells.fill(Cell::with_state(placement.fill));
        for &(row, col, state) in &placement.points {
            self.cells[query::index(row, col, self.size)] = Cell::with_state(state);
        }
        Ok(())
    }

    /// An immutable copy of the current cells plus topology, for rules
    /// to read during a tick.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.cells.clone(),
            self.size,
            self.shape,
            self.edge,
            self.selection.clone(),
        )
    }

    /// Atomically replace the live cells with a freshly built buffer.
    pub fn commit(&mut self, cells: Vec<Cell>) -> Result<(), GridError> {
        if cells.len() != self.cells.len() {
            return Err(GridError::CommitSizeMismatch {
                expected: self.cells.len(),
                actual: cells.len(),
            });
        }
        self.cells = cells;
        Ok(())
    }

    /// Reallocate the cell array for a new side length.
    ///
    /// Contents are default cells afterwards; the grid is not valid for
    /// ticking until the next `set_random`/`set_specific` call.
    pub fn resize(&mut self, new_size: usize) -> Result<(), GridError> {
        if new_size == 0 {
            return Err(GridError::EmptyGrid);
        }
        self.size = new_size;
        self.cells = vec![Cell::default(); new_size * new_size];
        Ok(())
    }

    /// Number of cells currently holding `state`.
    pub fn count_state(&self, state: State) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// Row-major positions of every cell currently holding `state`.
    pub fn positions_of(&self, state: State) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.state == state)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }
}

/// Prints one state digit per cell, one row per line. Debugging aid.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                write!(f, "{}", cell.state)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::Share;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn square_grid(size: usize, edge: EdgePolicy) -> Grid {
        Grid::new(size, Shape::Square, edge, NeighborSelection::All).unwrap()
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            Grid::new(0, Shape::Square, EdgePolicy::Bounded, NeighborSelection::All),
            Err(GridError::EmptyGrid)
        ));
    }

    #[test]
    fn bounded_square_interior_has_eight_neighbors() {
        let g = square_grid(5, EdgePolicy::Bounded);
        assert_eq!(g.neighbors(2, 2).unwrap().len(), 8);
    }

    #[test]
    fn bounded_square_corner_has_three_neighbors() {
        let g = square_grid(5, EdgePolicy::Bounded);
        let n = g.neighbors(0, 0).unwrap();
        assert_eq!(n.len(), 3);
        let coords: Vec<_> = n.iter().map(|nb| (nb.row, nb.col)).collect();
        assert!(coords.contains(&(0, 1)));
        assert!(coords.contains(&(1, 1)));
        assert!(coords.contains(&(1, 0)));
    }

    #[test]
    fn toroidal_square_corner_wraps_to_opposite_edges() {
        let g = square_grid(5, EdgePolicy::Toroidal);
        let n = g.neighbors(0, 0).unwrap();
        assert_eq!(n.len(), 8);
        let coords: Vec<_> = n.iter().map(|nb| (nb.row, nb.col)).collect();
        assert!(coords.contains(&(4, 0))); // up wraps
        assert!(coords.contains(&(0, 4))); // left wraps
        assert!(coords.contains(&(4, 4))); // up-left wraps both axes
    }

    #[test]
    fn queried_coordinate_out_of_bounds_is_an_error() {
        let g = square_grid(5, EdgePolicy::Toroidal);
        assert_eq!(
            g.neighbors(5, 0),
            Err(GridError::CoordOutOfBounds {
                row: 5,
                col: 0,
                size: 5
            })
        );
    }

    #[test]
    fn set_random_honors_resolved_counts() {
        let mut g = square_grid(10, EdgePolicy::Bounded);
        let comp = Composition::fractions([Share::Given(0.3), Share::Remainder]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        g.set_random(&comp, &mut rng).unwrap();
        assert_eq!(g.count_state(State(0)), 30);
        assert_eq!(g.count_state(State(1)), 70);
    }

    #[test]
    fn set_specific_round_trips_points_and_fill() {
        let mut g = square_grid(4, EdgePolicy::Bounded);
        let placement = Placement::new(
            vec![(0, 0, State(2)), (3, 1, State(1)), (0, 0, State(1))],
            State(0),
        );
        g.set_specific(&placement).unwrap();
        // Later point wins at (0, 0).
        assert_eq!(g.cell(0, 0).unwrap().state, State(1));
        assert_eq!(g.cell(3, 1).unwrap().state, State(1));
        assert_eq!(g.count_state(State(0)), 14);
    }

    #[test]
    fn set_specific_rejects_out_of_range_points() {
        let mut g = square_grid(4, EdgePolicy::Bounded);
        let placement = Placement::new(vec![(4, 0, State(1))], State(0));
        assert_eq!(
            g.set_specific(&placement),
            Err(ConfigError::PointOutOfBounds {
                row: 4,
                col: 0,
                size: 4
            })
        );
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut g = square_grid(3, EdgePolicy::Bounded);
        g.set_specific(&Placement::fill_only(State(1))).unwrap();
        let snap = g.snapshot();
        g.set_specific(&Placement::fill_only(State(2))).unwrap();
        assert_eq!(snap.cell(1, 1).unwrap().state, State(1));
        assert_eq!(g.cell(1, 1).unwrap().state, State(2));
    }

    #[test]
    fn commit_replaces_cells() {
        let mut g = square_grid(2, EdgePolicy::Bounded);
        let cells = vec![Cell::with_state(State(3)); 4];
        g.commit(cells).unwrap();
        assert_eq!(g.count_state(State(3)), 4);
    }

    #[test]
    fn commit_rejects_wrong_length() {
        let mut g = square_grid(2, EdgePolicy::Bounded);
        assert_eq!(
            g.commit(vec![Cell::default(); 3]),
            Err(GridError::CommitSizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn resize_reallocates_default_cells() {
        let mut g = square_grid(2, EdgePolicy::Bounded);
        g.set_specific(&Placement::fill_only(State(1))).unwrap();
        g.resize(3).unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.count_state(State(0)), 9);
    }

    #[test]
    fn display_prints_state_digits() {
        let mut g = square_grid(2, EdgePolicy::Bounded);
        g.set_specific(&Placement::new(vec![(0, 1, State(1))], State(0)))
            .unwrap();
        assert_eq!(g.to_string(), "01\n00\n");
    }

    fn arb_edge() -> impl Strategy<Value = EdgePolicy> {
        prop_oneof![Just(EdgePolicy::Bounded), Just(EdgePolicy::Toroidal)]
    }

    proptest! {
        #[test]
        fn square_neighbor_counts_stay_in_range(
            size in 2usize..12,
            edge in arb_edge(),
            row in 0usize..12,
            col in 0usize..12,
        ) {
            let row = row % size;
            let col = col % size;
            let g = square_grid(size, edge);
            let n = g.neighbors(row, col).unwrap();
            match edge {
                EdgePolicy::Toroidal => prop_assert_eq!(n.len(), 8),
                EdgePolicy::Bounded => {
                    prop_assert!(n.len() >= 3);
                    prop_assert!(n.len() <= 8);
                }
            }
        }

        #[test]
        fn random_init_state_counts_total_the_grid(
            size in 1usize..16,
            seed in 0u64..1000,
            green in 0.0f64..1.0,
        ) {
            let mut g = square_grid(size, EdgePolicy::Bounded);
            let comp = Composition::fractions([Share::Given(green), Share::Remainder]);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            g.set_random(&comp, &mut rng).unwrap();
            let total = g.count_state(State(0)) + g.count_state(State(1));
            prop_assert_eq!(total, size * size);
        }
    }
}
