//! Compile-time registry mapping a rule tag to its factory.
//!
//! The registry is a plain enum dispatch: selecting a rule is a match,
//! not a runtime class lookup, so an unknown tag cannot exist past the
//! parse and every factory is checked at compile time.

use crate::fire::Fire;
use crate::life::Life;
use crate::rps::Rps;
use crate::rule::Rule;
use crate::segregation::Segregation;
use crate::wator::PredatorPrey;
use weald_core::RuleError;

/// Tag naming one of the five transition rule sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Life-like birth/death automaton.
    Life,
    /// Spreading-fire percolation.
    Fire,
    /// Predator-prey (Wa-Tor) ecology.
    PredatorPrey,
    /// Schelling segregation.
    Segregation,
    /// Cyclic-dominance growth.
    Rps,
}

impl RuleKind {
    /// Every registered rule kind.
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Life,
        RuleKind::Fire,
        RuleKind::PredatorPrey,
        RuleKind::Segregation,
        RuleKind::Rps,
    ];

    /// Stable lowercase name, matching [`from_name`](Self::from_name).
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Life => "life",
            RuleKind::Fire => "fire",
            RuleKind::PredatorPrey => "predator-prey",
            RuleKind::Segregation => "segregation",
            RuleKind::Rps => "rps",
        }
    }

    /// Parse a rule name as it appears in configuration files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "life" => Some(RuleKind::Life),
            "fire" => Some(RuleKind::Fire),
            "predator-prey" | "wator" => Some(RuleKind::PredatorPrey),
            "segregation" => Some(RuleKind::Segregation),
            "rps" => Some(RuleKind::Rps),
            _ => None,
        }
    }

    /// Build the rule engine from its positional parameter vector.
    pub fn build(self, params: &[f64]) -> Result<Box<dyn Rule>, RuleError> {
        Ok(match self {
            RuleKind::Life => Box::new(Life::from_params(params)?),
            RuleKind::Fire => Box::new(Fire::from_params(params)?),
            RuleKind::PredatorPrey => Box::new(PredatorPrey::from_params(params)?),
            RuleKind::Segregation => Box::new(Segregation::from_params(params)?),
            RuleKind::Rps => Box::new(Rps::from_params(params)?),
        })
    }
}
