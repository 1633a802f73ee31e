use crate::complex::Complex;
use crate::energy::EnergyModel;
use crate::Energy;
use crate::Rate;

/// ensemble-unique entry identity. assigned monotonically on
/// insertion, never reused within a run.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryId(u64);

impl From<u64> for EntryId {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
impl From<EntryId> for u64 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// one live complex plus its cached scalars. the caches are
/// owned here and refreshed only by the dispatcher; between
/// moves they are authoritative.
#[derive(Debug)]
pub struct Entry<C> {
    id: EntryId,
    complex: C,
    energy: Energy,
    flux: Rate,
}

impl<C: Complex> Entry<C> {
    pub fn new(id: EntryId, complex: C) -> Self {
        Self {
            id,
            complex,
            energy: 0.,
            flux: 0.,
        }
    }
    pub fn id(&self) -> EntryId {
        self.id
    }
    pub fn complex(&self) -> &C {
        &self.complex
    }
    pub fn complex_mut(&mut self) -> &mut C {
        &mut self.complex
    }
    pub fn into_complex(self) -> C {
        self.complex
    }
    /// cached corrected energy: raw complex energy plus the
    /// per-excess-strand volume and association corrections
    pub fn energy(&self) -> Energy {
        self.energy
    }
    /// cached unimolecular flux out of the complex
    pub fn flux(&self) -> Rate {
        self.flux
    }
    /// re-derive both caches from the complex and the model
    pub fn refresh<M: EnergyModel>(&mut self, model: &M) {
        let excess = (self.complex.strand_count() - 1) as Energy;
        self.energy = self.complex.energy() + (model.volume_energy() + model.assoc_energy()) * excess;
        self.flux = self.complex.total_flux();
        log::trace!("refresh {}: energy {:.4} flux {:.4e}", self.id, self.energy, self.flux);
    }
}
