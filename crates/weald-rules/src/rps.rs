//! Cyclic-dominance growth rule (rock-paper-scissors).
//!
//! Each non-empty cell picks one uniformly random neighbor. Growth:
//! while the cell's gradient (`age`) is below `max_gradient - 1`, an
//! empty pick becomes a clone one gradient level deeper. Predation: a
//! pick the cell's state beats is overwritten at gradient zero. All
//! selections and outcomes are judged against the frozen snapshot, so
//! per-tick updates never chain; conflicting writes resolve in
//! row-major order, later cells winning.

use crate::rule::{param, Rule};
use indexmap::IndexMap;
use rand::{Rng, RngCore};
use weald_core::{Cell, GridError, Rgb, RuleError, State};
use weald_grid::Snapshot;

/// Unclaimed territory.
pub const EMPTY: State = State(0);
/// Rock.
pub const ROCK: State = State(1);
/// Paper.
pub const PAPER: State = State(2);
/// Scissors.
pub const SCISSORS: State = State(3);

/// The cyclic-dominance rule.
///
/// Positional parameters: `[max_gradient]` (rounded to an integer).
pub struct Rps {
    max_gradient: u32,
    palette: IndexMap<State, Rgb>,
}

impl Rps {
    /// Create the rule from its positional parameter vector.
    pub fn from_params(params: &[f64]) -> Result<Self, RuleError> {
        Ok(Self {
            max_gradient: param(params, 0)?.round() as u32,
            palette: IndexMap::from([
                (EMPTY, Rgb::WHITE),
                (ROCK, Rgb::RED),
                (PAPER, Rgb::GREEN),
                (SCISSORS, Rgb::BLUE),
            ]),
        })
    }
}

/// Rock beats scissors, scissors beats paper, paper beats rock.
fn beats(a: State, b: State) -> bool {
    (a == ROCK && b == SCISSORS) || (a == SCISSORS && b == PAPER) || (a == PAPER && b == ROCK)
}

impl Rule for Rps {
    fn name(&self) -> &str {
        "rps"
    }

    fn palette(&self) -> &IndexMap<State, Rgb> {
        &self.palette
    }

    fn tick(&self, snapshot: &Snapshot, rng: &mut dyn RngCore) -> Result<Vec<Cell>, GridError> {
        let size = snapshot.size();
        let mut cells = snapshot.to_working_cells();
        for row in 0..size {
            for col in 0..size {
                let me = *snapshot.cell(row, col)?;
                if me.state == EMPTY {
                    continue;
                }
                let neighbors = snapshot.neighbors(row, col)?;
                if neighbors.is_empty() {
                    continue;
                }
                let pick = neighbors[rng.gen_range(0..neighbors.len())];
                let target = pick.row * size + pick.col;
                if pick.state == EMPTY {
                    if me.age < self.max_gradient.saturating_sub(1) {
                        cells[target] = Cell {
                            state: me.state,
                            age: me.age + 1,
                            energy: 0.0,
                        };
                    }
                } else if beats(me.state, pick.state) {
                    cells[target] = Cell::with_state(me.state);
                }
            }
        }
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use weald_grid::{Grid, Placement};
    use weald_topology::{EdgePolicy, NeighborSelection, Shape};

    fn grid_with(size: usize, points: Vec<(usize, usize, State)>) -> Grid {
        let mut g = Grid::new(
            size,
            Shape::Square,
            EdgePolicy::Bounded,
            NeighborSelection::All,
        )
        .unwrap();
        g.set_specific(&Placement::new(points, EMPTY)).unwrap();
        g
    }

    #[test]
    fn beats_is_cyclic() {
        assert!(beats(ROCK, SCISSORS));
        assert!(beats(SCISSORS, PAPER));
        assert!(beats(PAPER, ROCK));
        assert!(!beats(ROCK, PAPER));
        assert!(!beats(ROCK, ROCK));
    }

    #[test]
    fn growth_clones_into_empty_with_deeper_gradient() {
        // A 2x2 grid: the rock's only neighbors are empty, so growth is
        // certain whichever neighbor the RNG picks.
        let rule = Rps::from_params(&[5.0]).unwrap();
        let g = grid_with(2, vec![(0, 0, ROCK)]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let next = rule.tick(&g.snapshot(), &mut rng).unwrap();
        let grown: Vec<&Cell> = next
            .iter()
            .enumerate()
            .filter(|(i, c)| *i != 0 && c.state == ROCK)
            .map(|(_, c)| c)
            .collect();
        assert_eq!(grown.len(), 1);
        assert_eq!(grown[0].age, 1);
        // The original keeps its own gradient.
        assert_eq!(next[0].state, ROCK);
        assert_eq!(next[0].age, 0);
    }

    #[test]
    fn gradient_limit_stops_growth() {
        let rule = Rps::from_params(&[1.0]).unwrap();
        let g = grid_with(2, vec![(0, 0, ROCK)]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let next = rule.tick(&g.snapshot(), &mut rng).unwrap();
        assert_eq!(next.iter().filter(|c| c.state == ROCK).count(), 1);
    }

    #[test]
    fn predation_overwrites_the_loser_at_gradient_zero() {
        // Two cells on a 1x2-like arrangement: rock at (0,0), scissors
        // at (0,1) on a 2x2 grid with the bottom row empty. Run ticks
        // until the rock's pick lands on the scissors.
        let rule = Rps::from_params(&[1.0]).unwrap();
        let g = grid_with(2, vec![(0, 0, ROCK), (0, 1, SCISSORS)]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut saw_predation = false;
        let mut g = g;
        for _ in 0..20 {
            let next = rule.tick(&g.snapshot(), &mut rng).unwrap();
            if next[1].state == ROCK {
                assert_eq!(next[1].age, 0);
                saw_predation = true;
                break;
            }
            g.commit(next).unwrap();
        }
        assert!(saw_predation, "rock never picked the adjacent scissors");
    }

    #[test]
    fn scissors_never_overwrites_rock() {
        // max_gradient 1 forbids growth and scissors loses to rock, so
        // the rock cell can never be displaced.
        let rule = Rps::from_params(&[1.0]).unwrap();
        let mut g = grid_with(2, vec![(0, 0, ROCK), (0, 1, SCISSORS)]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..10 {
            let next = rule.tick(&g.snapshot(), &mut rng).unwrap();
            g.commit(next).unwrap();
        }
        assert_eq!(g.cell(0, 0).unwrap().state, ROCK);
    }

    #[test]
    fn decisions_read_the_snapshot_not_the_working_grid() {
        // Rock at (0,0) and paper at (1,1) both see empty (0,1)/(1,0).
        // Whatever grows there this tick was judged against the frozen
        // empty state, so the result is always a gradient-1 clone of
        // one of them, never a predation result.
        let rule = Rps::from_params(&[5.0]).unwrap();
        let g = grid_with(2, vec![(0, 0, ROCK), (1, 1, PAPER)]);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let next = rule.tick(&g.snapshot(), &mut rng).unwrap();
        for idx in [1, 2] {
            let c = next[idx];
            if c.state != EMPTY {
                assert_eq!(c.age, 1);
            }
        }
    }

    #[test]
    fn missing_parameter_fails_fast() {
        assert_eq!(
            Rps::from_params(&[]).err(),
            Some(RuleError::ParamOutOfRange { index: 0, len: 0 })
        );
    }
}
