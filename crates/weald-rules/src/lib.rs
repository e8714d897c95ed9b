//! The transition rule engines of the Weald automaton.
//!
//! Each rule encapsulates one state-transition algorithm behind the
//! shared [`Rule`] trait: it declares its own state tags and display
//! palette, and its `tick` consumes a frozen grid snapshot plus an
//! injected RNG and produces the next generation of cells. The
//! [`RuleKind`] registry maps a rule tag to its factory at compile
//! time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fire;
pub mod life;
pub mod registry;
pub mod rps;
pub mod rule;
pub mod segregation;
pub mod wator;

pub use fire::Fire;
pub use life::Life;
pub use registry::RuleKind;
pub use rps::Rps;
pub use rule::Rule;
pub use segregation::Segregation;
pub use wator::PredatorPrey;
