//! Core types for the Weald automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! plain cell record shared by every grid and rule, the state tag newtype,
//! display colors, and the error types of the engine core.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod color;
pub mod error;

pub use cell::{Cell, State};
pub use color::Rgb;
pub use error::{ConfigError, GridError, RuleError};
