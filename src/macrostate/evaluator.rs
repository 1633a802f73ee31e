use super::condition::ComplexItem;
use super::condition::StopCondition;
use super::distance;
use super::kind::Kind;
use crate::complex::Complex;
use crate::energy::EnergyModel;
use crate::ensemble::Ensemble;
use std::io::Write;

/// pure reader over the live ensemble: does a stop condition
/// hold right now? configuration errors go to the injected
/// diagnostic writer rather than any process-wide stream.
pub struct Evaluator {
    diag: Box<dyn Write>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }
}

impl Evaluator {
    pub fn new(diag: Box<dyn Write>) -> Self {
        Self { diag }
    }

    /// every item of the condition must be satisfied by at
    /// least one live complex; a single complex may satisfy
    /// more than one item.
    pub fn matches<C, M>(&mut self, ensemble: &Ensemble<C, M>, condition: &StopCondition) -> bool
    where
        C: Complex,
        M: EnergyModel,
    {
        let items = condition.items();
        if items.is_empty() {
            return false;
        }
        if items.iter().any(|item| item.kind() == Kind::Bound) {
            if items.len() != 1 {
                // known limitation: bound predicates cannot be
                // combined with other complex items
                writeln!(
                    self.diag,
                    "stop condition {}: BOUND predicates must stand alone",
                    condition.tag(),
                )
                .ok();
                return false;
            }
            return items[0]
                .ids()
                .iter()
                .all(|id| ensemble.entries().any(|e| e.complex().check_id_bound(*id)));
        }
        if items.len() > ensemble.len() {
            return false;
        }
        items.iter().all(|item| {
            ensemble
                .entries()
                .any(|e| Self::satisfied(item, e.complex()))
        })
    }

    /// per-kind test against one candidate complex
    fn satisfied<C: Complex>(item: &ComplexItem, complex: &C) -> bool {
        if !complex.check_id_list(item.ids()) {
            return false;
        }
        match item.kind() {
            Kind::Disassoc => true,
            Kind::Exact => complex.structure() == item.structure(),
            Kind::Loose => {
                distance::within(&complex.structure(), item.structure(), item.tolerance(), true)
            }
            Kind::Count => {
                distance::within(&complex.structure(), item.structure(), item.tolerance(), false)
            }
            Kind::Bound => unreachable!("bound predicates are handled at the head"),
        }
    }
}
