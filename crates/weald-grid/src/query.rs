//! Shared coordinate and neighbor resolution for [`Grid`](crate::Grid)
//! and [`Snapshot`](crate::Snapshot), which answer the same queries over
//! the same topology.

use crate::grid::Neighbor;
use smallvec::SmallVec;
use weald_core::{Cell, GridError};
use weald_topology::{EdgePolicy, NeighborSelection, Shape};

/// Check that a queried coordinate is inside the N×N grid.
///
/// Only the *queried* coordinate is a contract error when out of
/// bounds; computed neighbors go through [`resolve_coord`] instead.
pub(crate) fn check_bounds(row: usize, col: usize, size: usize) -> Result<(), GridError> {
    if row >= size || col >= size {
        return Err(GridError::CoordOutOfBounds { row, col, size });
    }
    Ok(())
}

/// Row-major flat index.
pub(crate) fn index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

/// Resolve a computed neighbor coordinate under the edge policy.
///
/// Toroidal wraps each axis modulo N (negatives shifted up first);
/// Bounded drops anything outside `[0, N)²`.
pub(crate) fn resolve_coord(
    row: i64,
    col: i64,
    size: usize,
    edge: EdgePolicy,
) -> Option<(usize, usize)> {
    let n = size as i64;
    match edge {
        EdgePolicy::Toroidal => {
            let r = ((row % n) + n) % n;
            let c = ((col % n) + n) % n;
            Some((r as usize, c as usize))
        }
        EdgePolicy::Bounded => {
            if row < 0 || row >= n || col < 0 || col >= n {
                None
            } else {
                Some((row as usize, col as usize))
            }
        }
    }
}

/// Neighbor lookup over a flat cell buffer.
#[allow(clippy::too_many_arguments)]
pub(crate) fn neighbors(
    cells: &[Cell],
    size: usize,
    shape: Shape,
    edge: EdgePolicy,
    selection: &NeighborSelection,
    row: usize,
    col: usize,
) -> Result<SmallVec<[Neighbor; 12]>, GridError> {
    check_bounds(row, col, size)?;
    let mut out = SmallVec::new();
    for (dr, dc) in shape.offsets(row, col, selection) {
        let nr = row as i64 + dr as i64;
        let nc = col as i64 + dc as i64;
        if let Some((r, c)) = resolve_coord(nr, nc, size, edge) {
            out.push(Neighbor {
                row: r,
                col: c,
                state: cells[index(r, c, size)].state,
            });
        }
    }
    Ok(out)
}
