//! The Weald grid engine.
//!
//! A [`Grid`] owns an N×N array of [`Cell`](weald_core::Cell)s plus an
//! immutable topology (shape, edge policy, neighbor selection). It
//! provides neighbor lookup, randomized and explicit initialization,
//! and the snapshot/commit pair that gives ticks their read/write
//! separation: a rule reads exclusively from a frozen [`Snapshot`] and
//! commits a freshly built cell buffer, so no cell's update can observe
//! an already-updated neighbor within the same tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod composition;
pub mod grid;
pub mod placement;
mod query;
pub mod snapshot;

pub use composition::{Composition, Share};
pub use grid::{Grid, Neighbor};
pub use placement::Placement;
pub use snapshot::Snapshot;
