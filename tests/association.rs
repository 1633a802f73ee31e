//! bimolecular lifecycle: two free strands associate through
//! the join engine, breathe as a duplex, and eventually fall
//! apart again, with stop conditions watching each phase.

use strandsim::complex::Complex;
use strandsim::energy::EnergyModel;
use strandsim::energy::Metropolis;
use strandsim::ensemble::Ensemble;
use strandsim::ensemble::Outcome;
use strandsim::fold::FoldComplex;
use strandsim::fold::Strand;
use strandsim::macrostate::ComplexItem;
use strandsim::macrostate::StopCondition;
use strandsim::simulate::Options;
use strandsim::simulate::Simulation;
use strandsim::simulate::Status;

fn two_strands(model: Metropolis) -> Ensemble<FoldComplex, Metropolis> {
    let mut ensemble = Ensemble::new(model);
    ensemble.add(FoldComplex::new(vec![Strand::new(0, "top", "AAAA").unwrap()], model));
    ensemble.add(FoldComplex::new(vec![Strand::new(1, "bot", "TTTT").unwrap()], model));
    ensemble
}

#[test]
fn first_event_is_always_the_join() {
    // two inert single-strand complexes have zero unimolecular
    // flux, so the whole initial flux is bimolecular
    let model = Metropolis::default();
    let mut ensemble = two_strands(model);
    ensemble.initialize();
    let flux = ensemble.total_flux();
    assert_eq!(flux, 16. * model.join_rate());
    assert_eq!(ensemble.join_flux(), flux);
    assert!(matches!(ensemble.step(flux * 0.99), Outcome::Join));
    assert_eq!(ensemble.len(), 1);
    let duplex = ensemble.entries().next().unwrap().complex();
    assert_eq!(duplex.strand_count(), 2);
    assert_eq!(duplex.structure().matches('(').count(), 1);
}

#[test]
fn bound_fires_right_after_association() {
    let stop = StopCondition::new("bound", vec![ComplexItem::bound(vec![0])]);
    let mut sim = Simulation::new(
        two_strands(Metropolis::default()),
        vec![stop],
        Options::default().with_seed(11),
    );
    assert_eq!(sim.run(), Status::Stopped("bound".to_string()));
    assert_eq!(sim.steps(), 1);
}

#[test]
fn duplex_eventually_disassociates() {
    let stop = StopCondition::new("apart", vec![ComplexItem::disassoc(vec![1])]);
    let mut sim = Simulation::new(
        two_strands(Metropolis::default()),
        vec![stop],
        Options::default().with_t_max(10.0).with_max_steps(50_000_000).with_seed(7),
    );
    let mut splits = 0;
    let mut joins = 0;
    let status = sim.run_with(|_, outcome, _| match outcome {
        Outcome::Split(_) => splits += 1,
        Outcome::Join => joins += 1,
        Outcome::Moved(_) => {}
    });
    assert_eq!(status, Status::Stopped("apart".to_string()));
    // the stop matched on the split that freed the strand
    assert_eq!(splits, 1);
    assert!(joins >= 1);
    assert_eq!(sim.ensemble().len(), 2);
    for entry in sim.ensemble().entries() {
        assert_eq!(entry.complex().strand_count(), 1);
    }
}
