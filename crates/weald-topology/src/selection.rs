//! Caller-selected subsets of a shape's offset table.

use smallvec::SmallVec;

/// An ordered subset of a shape's unfiltered offset table.
///
/// Indices always refer to the *unfiltered* table for the shape, before
/// any parity adjustment; `Shape::max_neighbors` gives the valid index
/// range so the external loader can bounds-check a selection before
/// handing it over. Indices are sorted ascending on construction, which
/// preserves the table's clockwise order in the resolved offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NeighborSelection {
    /// Use the full, shape-adjusted offset table.
    All,
    /// Use only the offsets at these unfiltered-table indices.
    Indices(SmallVec<[usize; 12]>),
}

impl NeighborSelection {
    /// Build a selection from explicit indices, sorting and deduplicating.
    pub fn indices(raw: impl IntoIterator<Item = usize>) -> Self {
        let mut v: SmallVec<[usize; 12]> = raw.into_iter().collect();
        v.sort_unstable();
        v.dedup();
        Self::Indices(v)
    }

    /// True if this selection admits the given unfiltered-table index.
    pub fn admits(&self, index: usize) -> bool {
        match self {
            Self::All => true,
            Self::Indices(v) => v.binary_search(&index).is_ok(),
        }
    }
}

impl Default for NeighborSelection {
    fn default() -> Self {
        Self::All
    }
}
