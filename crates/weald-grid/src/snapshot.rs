//! The frozen per-tick view of a grid.

use crate::grid::Neighbor;
use crate::query;
use smallvec::SmallVec;
use weald_core::{Cell, GridError, State};
use weald_topology::{EdgePolicy, NeighborSelection, Shape};

/// An immutable copy of a grid's cells and topology, taken at the start
/// of a tick.
///
/// Rules read exclusively from a `Snapshot` and write into a fresh cell
/// buffer, so a cell's update can never observe an already-updated
/// neighbor — the read/write separation is carried by the types, not by
/// a copying convention.
#[derive(Clone, Debug)]
pub struct Snapshot {
    cells: Box<[Cell]>,
    size: usize,
    shape: Shape,
    edge: EdgePolicy,
    selection: NeighborSelection,
}

impl Snapshot {
    pub(crate) fn new(
        cells: Vec<Cell>,
        size: usize,
        shape: Shape,
        edge: EdgePolicy,
        selection: NeighborSelection,
    ) -> Self {
        Self {
            cells: cells.into_boxed_slice(),
            size,
            shape,
            edge,
            selection,
        }
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, N².
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The frozen cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        query::check_bounds(row, col, self.size)?;
        Ok(&self.cells[query::index(row, col, self.size)])
    }

    /// All frozen cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// A fresh mutable working buffer initialized from the frozen cells,
    /// for a rule to build the next generation in.
    pub fn to_working_cells(&self) -> Vec<Cell> {
        self.cells.to_vec()
    }

    /// The neighbors of `(row, col)` in the frozen state, under the
    /// grid's topology and edge policy.
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

    /// Row-major positions of every frozen cell holding `state`.
    pub fn positions_of(&self, state: State) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.state == state)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Number of frozen cells holding `state`.
    pub fn count_state(&self, state: State) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }
}
