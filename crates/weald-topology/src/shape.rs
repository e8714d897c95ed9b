//! Cell shapes and their ordered neighbor-offset tables.

use crate::selection::NeighborSelection;
use smallvec::SmallVec;

/// All 8 square offsets, clockwise starting "up":
/// U, UR, R, DR, D, DL, L, UL.
const SQUARE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// The 12 triangle offsets, clockwise, for a down-pointing triangle
/// (odd `row + col`). Up-pointing triangles use the sign-flipped table.
const TRIANGLE_OFFSETS: [(i32, i32); 12] = [
    (-1, 0),
    (-1, 1),
    (-1, 2),
    (0, 2),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (0, -2),
    (-1, -2),
    (-1, -1),
];

/// Unfiltered hexagon table: identical to the square table; the row
/// parity decides which two entries are dropped to leave the 6 true
/// hexagonal neighbors.
const HEX_OFFSETS: [(i32, i32); 8] = SQUARE_OFFSETS;

/// The geometric shape of every cell in a grid, which fixes the
/// neighbor-offset table.
///
/// Offsets are resolved per coordinate because two of the shapes are
/// parity-dependent: triangles alternate up/down-pointing orientation in
/// a checkerboard pattern (the whole table flips sign when
/// `(row + col) % 2 == 0`), and hexagon rows stagger (even rows drop
/// unfiltered indices 3 and 5, odd rows drop 1 and 7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Square cells, 8 neighbors (cardinal + diagonal).
    Square,
    /// Triangular cells, 12 neighbors, orientation alternating per cell.
    Triangle,
    /// Hexagonal cells, 6 neighbors out of an 8-entry staggered table.
    Hexagon,
}

impl Shape {
    /// Length of the unfiltered offset table.
    ///
    /// This is the bound the external loader validates selection indices
    /// against. Note the hexagon reports 8, not 6: selections index the
    /// unfiltered table, before the parity drop.
    pub fn max_neighbors(self) -> usize {
        match self {
            Shape::Square => SQUARE_OFFSETS.len(),
            Shape::Triangle => TRIANGLE_OFFSETS.len(),
            Shape::Hexagon => HEX_OFFSETS.len(),
        }
    }

    /// The ordered `(Δrow, Δcol)` offsets reaching the neighbors of
    /// `(row, col)`, adjusted for shape parity and filtered by
    /// `selection`.
    ///
    /// The result preserves the clockwise order of the table. For the
    /// hexagon, an index that is both selected and parity-dropped is
    /// dropped: the drop is what makes the neighborhood hexagonal.
    pub fn offsets(
        self,
        row: usize,
        col: usize,
        selection: &NeighborSelection,
    ) -> SmallVec<[(i32, i32); 12]> {
        let table: &[(i32, i32)] = match self {
            Shape::Square => &SQUARE_OFFSETS,
            Shape::Triangle => &TRIANGLE_OFFSETS,
            Shape::Hexagon => &HEX_OFFSETS,
        };
        let flip = self == Shape::Triangle && (row + col) % 2 == 0;
        let dropped = match self {
            Shape::Hexagon => {
                if row % 2 == 0 {
                    Some((3usize, 5usize))
                } else {
                    Some((1usize, 7usize))
                }
            }
            _ => None,
        };

        let mut out = SmallVec::new();
        for (i, &(dr, dc)) in table.iter().enumerate() {
            if let Some((a, b)) = dropped {
                if i == a || i == b {
                    continue;
                }
            }
            if !selection.admits(i) {
                continue;
            }
            out.push(if flip { (-dr, -dc) } else { (dr, dc) });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: NeighborSelection = NeighborSelection::All;

    #[test]
    fn square_full_table_clockwise_from_up() {
        let offs = Shape::Square.offsets(4, 4, &ALL);
        assert_eq!(offs.len(), 8);
        assert_eq!(offs[0], (-1, 0)); // starts "up"
        assert_eq!(offs.as_slice(), &SQUARE_OFFSETS);
    }

    #[test]
    fn square_offsets_are_parity_independent() {
        assert_eq!(
            Shape::Square.offsets(0, 0, &ALL),
            Shape::Square.offsets(3, 2, &ALL)
        );
    }

    #[test]
    fn triangle_flips_sign_on_even_parity() {
        let odd = Shape::Triangle.offsets(0, 1, &ALL); // row+col odd, table as-is
        let even = Shape::Triangle.offsets(1, 1, &ALL); // row+col even, flipped
        assert_eq!(odd.len(), 12);
        assert_eq!(even.len(), 12);
        for (o, e) in odd.iter().zip(even.iter()) {
            assert_eq!((-o.0, -o.1), *e);
        }
    }

    #[test]
    fn hexagon_even_row_drops_down_diagonals() {
        let offs = Shape::Hexagon.offsets(2, 3, &ALL);
        assert_eq!(offs.len(), 6);
        assert!(!offs.contains(&(1, 1))); // unfiltered index 3
        assert!(!offs.contains(&(1, -1))); // unfiltered index 5
    }

    #[test]
    fn hexagon_odd_row_drops_up_diagonals() {
        let offs = Shape::Hexagon.offsets(3, 3, &ALL);
        assert_eq!(offs.len(), 6);
        assert!(!offs.contains(&(-1, 1))); // unfiltered index 1
        assert!(!offs.contains(&(-1, -1))); // unfiltered index 7
    }

    #[test]
    fn selection_picks_from_unfiltered_table() {
        // Cardinal-only square neighborhood: U, R, D, L.
        let sel = NeighborSelection::indices([0, 2, 4, 6]);
        let offs = Shape::Square.offsets(1, 1, &sel);
        assert_eq!(offs.as_slice(), &[(-1, 0), (0, 1), (1, 0), (0, -1)]);
    }

    #[test]
    fn selection_order_is_clockwise_regardless_of_input_order() {
        let sel = NeighborSelection::indices([6, 0, 4, 2]);
        let offs = Shape::Square.offsets(1, 1, &sel);
        assert_eq!(offs.as_slice(), &[(-1, 0), (0, 1), (1, 0), (0, -1)]);
    }

    #[test]
    fn hexagon_selection_intersects_parity_drop() {
        // Index 3 is selected but parity-dropped on even rows.
        let sel = NeighborSelection::indices([0, 3]);
        let even = Shape::Hexagon.offsets(0, 0, &sel);
        assert_eq!(even.as_slice(), &[(-1, 0)]);
        // On odd rows index 3 survives.
        let odd = Shape::Hexagon.offsets(1, 0, &sel);
        assert_eq!(odd.as_slice(), &[(-1, 0), (1, 1)]);
    }

    #[test]
    fn max_neighbors_reports_unfiltered_lengths() {
        assert_eq!(Shape::Square.max_neighbors(), 8);
        assert_eq!(Shape::Triangle.max_neighbors(), 12);
        assert_eq!(Shape::Hexagon.max_neighbors(), 8);
    }

    fn arb_shape() -> impl Strategy<Value = Shape> {
        prop_oneof![
            Just(Shape::Square),
            Just(Shape::Triangle),
            Just(Shape::Hexagon),
        ]
    }

    proptest! {
        #[test]
        fn offsets_are_unique_and_nonzero(
            shape in arb_shape(),
            row in 0usize..20,
            col in 0usize..20,
        ) {
            let offs = shape.offsets(row, col, &NeighborSelection::All);
            prop_assert!(offs.len() <= shape.max_neighbors());
            for (i, a) in offs.iter().enumerate() {
                prop_assert_ne!(*a, (0, 0));
                for b in offs.iter().skip(i + 1) {
                    prop_assert_ne!(*a, *b);
                }
            }
        }

        #[test]
        fn selected_offsets_are_subset_of_full(
            shape in arb_shape(),
            row in 0usize..20,
            col in 0usize..20,
            picks in proptest::collection::vec(0usize..12, 0..6),
        ) {
            let max = shape.max_neighbors();
            let sel = NeighborSelection::indices(picks.into_iter().filter(|&i| i < max));
            let full = shape.offsets(row, col, &NeighborSelection::All);
            for off in shape.offsets(row, col, &sel) {
                prop_assert!(full.contains(&off));
            }
        }
    }
}
