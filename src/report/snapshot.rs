use super::view::EnergyView;
use crate::complex::Complex;
use crate::energy::EnergyModel;
use crate::ensemble::Ensemble;
use crate::Energy;
use serde::Serialize;

/// one entry of the per-entry diagnostic dump
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub id: u64,
    pub names: String,
    pub sequence: String,
    pub structure: String,
    pub energy: Energy,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "#{} {}", self.id, self.names)?;
        writeln!(f, "{}", self.sequence)?;
        write!(f, "{} {:>8.3}", self.structure, self.energy)
    }
}

/// dump every live entry under the requested energy convention
pub fn snapshot<C, M>(ensemble: &Ensemble<C, M>, view: EnergyView) -> Vec<Snapshot>
where
    C: Complex,
    M: EnergyModel,
{
    ensemble
        .entries()
        .map(|entry| Snapshot {
            id: u64::from(entry.id()),
            names: entry.complex().strand_names(),
            sequence: entry.complex().sequence(),
            structure: entry.complex().structure(),
            energy: entry.energy() - view.correction(ensemble.model(), entry.complex().strand_count()),
        })
        .collect()
}
