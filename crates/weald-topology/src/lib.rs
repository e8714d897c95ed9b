//! Topology resolution for Weald grids.
//!
//! This crate answers one question: given a cell shape and a grid
//! coordinate, which ordered `(Δrow, Δcol)` offsets reach that cell's
//! neighbors? The answer depends on shape parity (triangles alternate
//! orientation, hexagon rows stagger) and on a caller-selected subset
//! of the offset table.
//!
//! The grid engine applies these offsets and its own edge policy; this
//! crate never sees grid bounds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod selection;
pub mod shape;

pub use edge::EdgePolicy;
pub use selection::NeighborSelection;
pub use shape::Shape;
