//! Seeded-run determinism across every rule set.
//!
//! Each test: build config → run N ticks → rebuild the same config (or
//! reset) → run N ticks again → compare the full cell arrays.

use weald::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────

fn config(rule: RuleKind, params: Vec<f64>, init: Init, seed: u64) -> SimConfig {
    SimConfig {
        grid_size: 14,
        shape: Shape::Square,
        edge: EdgePolicy::Toroidal,
        selection: NeighborSelection::All,
        init,
        rule,
        params,
        seed,
    }
}

fn three_way_split() -> Init {
    Init::Random(Composition::fractions([
        Share::Remainder,
        Share::Given(0.3),
        Share::Given(0.3),
    ]))
}

fn every_rule() -> Vec<SimConfig> {
    vec![
        config(
            RuleKind::Life,
            vec![],
            Init::Random(Composition::fractions([
                Share::Remainder,
                Share::Given(0.4),
            ])),
            11,
        ),
        config(
            RuleKind::Fire,
            vec![0.4, 0.001, 3.0, 0.05],
            three_way_split(),
            11,
        ),
        config(
            RuleKind::PredatorPrey,
            vec![3.0, 8.0, 2.0, 5.0],
            three_way_split(),
            11,
        ),
        config(RuleKind::Segregation, vec![0.5], three_way_split(), 11),
        config(
            RuleKind::Rps,
            vec![4.0],
            Init::Random(Composition::fractions([
                Share::Given(0.1),
                Share::Given(0.3),
                Share::Given(0.3),
                Share::Remainder,
            ])),
            11,
        ),
    ]
}

fn run(config: SimConfig, ticks: usize) -> Vec<Cell> {
    let mut sim = Simulation::new(config).expect("config is valid");
    for _ in 0..ticks {
        sim.step().expect("tick succeeds");
    }
    sim.cells().to_vec()
}

// ── Tests ───────────────────────────────────────────────────────

#[test]
fn identical_configs_produce_identical_runs() {
    for cfg in every_rule() {
        let a = run(cfg.clone(), 20);
        let b = run(cfg.clone(), 20);
        assert_eq!(a, b, "rule {:?} diverged on equal seeds", cfg.rule);
    }
}

#[test]
fn different_seeds_produce_different_initial_grids() {
    let mut diverged = false;
    for (cfg_a, mut cfg_b) in every_rule().into_iter().zip(every_rule()) {
        cfg_b.seed = 4242;
        let a = Simulation::new(cfg_a).unwrap();
        let b = Simulation::new(cfg_b).unwrap();
        if a.cells() != b.cells() {
            diverged = true;
        }
    }
    assert!(diverged);
}

#[test]
fn reset_replays_every_rule_tick_for_tick() {
    for cfg in every_rule() {
        let rule = cfg.rule;
        let mut sim = Simulation::new(cfg).unwrap();
        for _ in 0..15 {
            sim.step().unwrap();
        }
        let first_run = sim.cells().to_vec();
        sim.reset().unwrap();
        for _ in 0..15 {
            sim.step().unwrap();
        }
        assert_eq!(
            sim.cells(),
            &first_run[..],
            "rule {rule:?} did not replay after reset"
        );
    }
}

#[test]
fn bounded_and_toroidal_edges_diverge() {
    let mut bounded = config(
        RuleKind::Life,
        vec![],
        Init::Random(Composition::fractions([
            Share::Remainder,
            Share::Given(0.4),
        ])),
        77,
    );
    bounded.edge = EdgePolicy::Bounded;
    let mut toroidal = bounded.clone();
    toroidal.edge = EdgePolicy::Toroidal;

    // Identical seed, so the initial grids match; the first tick reads
    // edge neighbors differently.
    let a = run(bounded, 1);
    let b = run(toroidal, 1);
    assert_ne!(a, b);
}

#[test]
fn every_shape_runs_every_rule() {
    for shape in [Shape::Square, Shape::Triangle, Shape::Hexagon] {
        for mut cfg in every_rule() {
            cfg.shape = shape;
            let rule = cfg.rule;
            let mut sim = Simulation::new(cfg).expect("config is valid");
            for _ in 0..5 {
                sim.step()
                    .unwrap_or_else(|e| panic!("rule {rule:?} on {shape:?}: {e}"));
            }
        }
    }
}
