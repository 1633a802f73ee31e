//! hairpin folding scenarios driven through a scripted
//! transition graph, so the macrostate statistics are exact
//! properties of the graph rather than of any energy model.

use strandsim::base::Tally;
use strandsim::complex::Complex;
use strandsim::complex::JoinSite;
use strandsim::energy::Metropolis;
use strandsim::ensemble::Ensemble;
use strandsim::macrostate::within;
use strandsim::macrostate::ComplexItem;
use strandsim::macrostate::Evaluator;
use strandsim::macrostate::StopCondition;
use strandsim::simulate::Options;
use strandsim::simulate::Simulation;
use strandsim::Rate;

/// microstates of a 16-nt hairpin, coarsened to the four
/// structures the scenarios speak about plus two half-zipped
/// intermediates on the way down each folding path
const OPEN: &str = "................";
const HALF_B: &str = "((............))";
const HALF_C: &str = "...((......))...";
const NATIVE: &str = "((((((....))))))";

const STEM_B: &str = "(((..........)))";
const STEM_C: &str = "...(((....)))...";
const LOOSE_B: &str = "(((**********)))";
const LOOSE_C: &str = "***(((****)))***";

const STATES: [&str; 4] = [OPEN, HALF_B, HALF_C, NATIVE];
const RATE: Rate = 1e6;

/// a single-strand complex whose moves walk a fixed graph of
/// structures at fixed rates. no exterior bases, no joins.
struct Scripted {
    at: usize,
    flux: Rate,
}

impl Scripted {
    fn new() -> Self {
        let mut scripted = Self { at: 0, flux: 0. };
        scripted.generate_loops();
        scripted
    }
    /// both folding paths pass through a half-zipped
    /// intermediate; the native stem is never one move away
    /// from the open state
    fn edges(&self) -> &'static [usize] {
        match self.at {
            0 => &[1, 2],
            1 => &[0, 3],
            2 => &[0, 3],
            3 => &[1, 2],
            _ => unreachable!("scripted state out of range"),
        }
    }
}

impl Complex for Scripted {
    type Move = usize;

    fn generate_loops(&mut self) {
        self.flux = self.edges().len() as Rate * RATE;
    }
    fn display_moves(&self) {}
    fn total_flux(&self) -> Rate {
        self.flux
    }
    fn energy(&self) -> f64 {
        0.
    }
    fn strand_count(&self) -> usize {
        1
    }
    fn exterior_bases(&self) -> Tally {
        Tally::default()
    }
    fn select_move(&self, budget: &mut Rate) -> usize {
        for &to in self.edges() {
            if *budget < RATE {
                return to;
            }
            *budget -= RATE;
        }
        unreachable!("selection budget exceeds scripted flux");
    }
    fn apply(&mut self, mv: usize) -> Option<Self> {
        self.at = mv;
        self.generate_loops();
        None
    }
    fn structure(&self) -> String {
        STATES[self.at].to_string()
    }
    fn strand_names(&self) -> String {
        "hairpin".to_string()
    }
    fn sequence(&self) -> String {
        "GCATGCAAAAGCATGC".to_string()
    }
    fn check_id_bound(&self, _: usize) -> bool {
        false
    }
    fn check_id_list(&self, ids: &[usize]) -> bool {
        ids == [0]
    }
    fn join(_: Self, _: Self, _: JoinSite, _: JoinSite) -> Self {
        unreachable!("scripted complexes never join");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Waypoint {
    A,
    B,
    C,
}

/// run one trial and report (reached stop, last waypoint seen
/// strictly before the stop structure matched)
fn trial(waypoints: &[(Waypoint, ComplexItem)], seed: u64) -> (bool, Waypoint) {
    let stop = StopCondition::new("native", vec![ComplexItem::exact(vec![0], NATIVE)]);
    let mut ensemble = Ensemble::new(Metropolis::default());
    ensemble.add(Scripted::new());
    let options = Options::default().with_t_max(0.01).with_seed(seed);
    let mut sim = Simulation::new(ensemble, vec![stop], options);
    let mut evaluator = Evaluator::default();
    let guard = StopCondition::new("native", vec![ComplexItem::exact(vec![0], NATIVE)]);
    let mut last = Waypoint::A;
    let status = sim.run_with(|_, _, ensemble| {
        if evaluator.matches(ensemble, &guard) {
            return;
        }
        for (waypoint, item) in waypoints {
            let condition = StopCondition::new("waypoint", vec![item.clone()]);
            if evaluator.matches(ensemble, &condition) {
                last = *waypoint;
                break;
            }
        }
    });
    (status.tag() == Some("native"), last)
}

fn waypoints_exact() -> Vec<(Waypoint, ComplexItem)> {
    vec![
        (Waypoint::A, ComplexItem::exact(vec![0], OPEN)),
        (Waypoint::B, ComplexItem::exact(vec![0], STEM_B)),
        (Waypoint::C, ComplexItem::exact(vec![0], STEM_C)),
    ]
}

fn waypoints_loose() -> Vec<(Waypoint, ComplexItem)> {
    vec![
        (Waypoint::A, ComplexItem::exact(vec![0], OPEN)),
        (Waypoint::B, ComplexItem::loose(vec![0], LOOSE_B, 2)),
        (Waypoint::C, ComplexItem::loose(vec![0], LOOSE_C, 2)),
    ]
}

#[test]
fn intermediates_sit_inside_the_loose_macrostates() {
    // each half-zipped structure is within tolerance 2 of its
    // own loose stem and outside the other one, and matches no
    // exact waypoint
    assert!(within(HALF_B, LOOSE_B, 2, true));
    assert!(!within(HALF_B, LOOSE_C, 2, true));
    assert!(within(HALF_C, LOOSE_C, 2, true));
    assert!(!within(HALF_C, LOOSE_B, 2, true));
    assert!(HALF_B != STEM_B && HALF_C != STEM_C);
    assert!(!within(OPEN, LOOSE_B, 2, true));
    assert!(!within(OPEN, LOOSE_C, 2, true));
}

#[test]
fn exact_macrostates_see_direct_a_to_d_transitions() {
    // the half-zipped intermediates belong to no exact
    // macrostate, so almost every folding trajectory reads as a
    // direct A -> D transition
    let waypoints = waypoints_exact();
    let mut direct = 0;
    for seed in 0..1000 {
        let (stopped, last) = trial(&waypoints, seed);
        if stopped && last == Waypoint::A {
            direct += 1;
        }
    }
    assert!(direct > 10, "only {} direct transitions", direct);
}

#[test]
fn loose_macrostates_absorb_the_intermediates() {
    // the same trajectories, read through the loose macrostates:
    // every path to the native stem passes through B or C, and
    // direct A -> D transitions vanish
    let waypoints = waypoints_loose();
    let mut direct = 0;
    let mut reached = 0;
    for seed in 0..1000 {
        let (stopped, last) = trial(&waypoints, seed);
        if !stopped {
            continue;
        }
        reached += 1;
        if last == Waypoint::A {
            direct += 1;
        }
        assert!(matches!(last, Waypoint::B | Waypoint::C));
    }
    assert_eq!(direct, 0);
    assert!(reached > 900, "only {} trials reached the stop", reached);
}

#[test]
fn scripted_ensemble_never_carries_join_flux() {
    let mut ensemble = Ensemble::new(Metropolis::default());
    ensemble.add(Scripted::new());
    ensemble.initialize();
    let flux = ensemble.total_flux();
    assert_eq!(ensemble.join_flux(), 0.);
    assert_eq!(flux, 2. * RATE);
}
