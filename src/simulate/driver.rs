use super::options::Options;
use super::status::Status;
use crate::complex::Complex;
use crate::energy::EnergyModel;
use crate::ensemble::Ensemble;
use crate::ensemble::Outcome;
use crate::macrostate::Evaluator;
use crate::macrostate::StopCondition;
use crate::Time;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// the per-simulation loop: draw an exponential waiting time at
/// rate total_flux, draw a uniform event deviate, dispatch, and
/// test the stop conditions after every move. the ensemble is
/// mutated by nothing else while a simulation runs.
pub struct Simulation<C: Complex, M: EnergyModel> {
    ensemble: Ensemble<C, M>,
    conditions: Vec<StopCondition>,
    evaluator: Evaluator,
    options: Options,
    rng: SmallRng,
    time: Time,
    steps: u64,
    status: Status,
}

impl<C: Complex, M: EnergyModel> Simulation<C, M> {
    pub fn new(ensemble: Ensemble<C, M>, conditions: Vec<StopCondition>, options: Options) -> Self {
        let rng = SmallRng::seed_from_u64(options.seed);
        Self {
            ensemble,
            conditions,
            evaluator: Evaluator::default(),
            options,
            rng,
            time: 0.,
            steps: 0,
            status: Status::Initialized,
        }
    }

    /// swap in a diagnostic sink other than stderr
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn ensemble(&self) -> &Ensemble<C, M> {
        &self.ensemble
    }
    pub fn time(&self) -> Time {
        self.time
    }
    pub fn steps(&self) -> u64 {
        self.steps
    }
    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn run(&mut self) -> Status {
        self.run_with(|_, _, _| {})
    }

    /// run to a terminal state, handing every committed step to
    /// the observer. stop conditions are evaluated after each
    /// move, in order; the first match wins and its tag is
    /// surfaced in the terminal status.
    pub fn run_with<F>(&mut self, mut observe: F) -> Status
    where
        F: FnMut(Time, Outcome, &Ensemble<C, M>),
    {
        if self.status.is_terminal() {
            return self.status.clone();
        }
        self.ensemble.initialize();
        self.status = Status::Running;
        loop {
            let flux = self.ensemble.total_flux();
            if flux <= 0. {
                log::debug!("dead state after {} steps at t={:.3e}", self.steps, self.time);
                self.status = Status::Dead;
                break;
            }
            self.time += -self.rng.random::<f64>().ln() / flux;
            if self.time >= self.options.t_max {
                self.status = Status::Expired;
                break;
            }
            let choice = self.rng.random::<f64>() * flux;
            let outcome = self.ensemble.step(choice);
            self.steps += 1;
            log::trace!("t={:.6e} flux={:.3e} {:?}", self.time, flux, outcome);
            observe(self.time, outcome, &self.ensemble);
            if let Some(tag) = self.matched() {
                self.status = Status::Stopped(tag);
                break;
            }
            if self.steps >= self.options.max_steps {
                self.status = Status::Expired;
                break;
            }
        }
        self.status.clone()
    }

    fn matched(&mut self) -> Option<String> {
        let Self {
            ensemble,
            conditions,
            evaluator,
            ..
        } = self;
        conditions
            .iter()
            .find(|condition| evaluator.matches(ensemble, condition))
            .map(|condition| condition.tag().to_string())
    }
}
