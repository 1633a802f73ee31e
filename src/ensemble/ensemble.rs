use super::entry::Entry;
use super::entry::EntryId;
use super::join;
use crate::base::Tally;
use crate::complex::Complex;
use crate::energy::EnergyModel;
use crate::Rate;
use std::collections::VecDeque;

/// the live set of strand complexes. entries are kept in
/// insertion-reverse order (new at head); iteration order and
/// the head-to-tail float summation in total_flux are part of
/// the reproducibility contract.
#[derive(Debug)]
pub struct Ensemble<C, M> {
    entries: VecDeque<Entry<C>>,
    next: u64,
    join_flux: Rate,
    model: M,
}

impl<C: Complex, M: EnergyModel> Ensemble<C, M> {
    pub fn new(model: M) -> Self {
        Self {
            entries: VecDeque::new(),
            next: 0,
            join_flux: 0.,
            model,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// aggregate bimolecular rate as of the last total_flux
    pub fn join_flux(&self) -> Rate {
        self.join_flux
    }

    /// insert at head under a fresh id. caches are not derived
    /// here; initialize() or a dispatcher refresh must run
    /// before the entry participates in selection.
    pub fn add(&mut self, complex: C) -> EntryId {
        let id = EntryId::from(self.next);
        self.next += 1;
        self.entries.push_front(Entry::new(id, complex));
        log::debug!("add {} ({} entries)", id, self.entries.len());
        id
    }

    /// unlink an entry and hand its complex back to the caller
    pub fn remove(&mut self, id: EntryId) -> Option<C> {
        let idx = self.entries.iter().position(|e| e.id() == id)?;
        let entry = self.entries.remove(idx)?;
        log::debug!("remove {} ({} entries)", id, self.entries.len());
        Some(entry.into_complex())
    }

    /// trigger loop generation on every complex and derive all
    /// caches. idempotent immediately after construction.
    pub fn initialize(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.complex_mut().generate_loops();
            entry.complex().display_moves();
            entry.refresh(&self.model);
        }
    }

    /// total rate out of the current ensemble: unimolecular
    /// fluxes summed head-to-tail plus the re-derived join flux
    pub fn total_flux(&mut self) -> Rate {
        assert!(!self.entries.is_empty(), "ensemble must hold at least one complex");
        self.join_flux = self.compute_join_flux();
        self.entries.iter().map(Entry::flux).fold(0., |acc, f| acc + f) + self.join_flux
    }

    pub(super) fn compute_join_flux(&self) -> Rate {
        if self.entries.len() <= 1 {
            return 0.;
        }
        join::count(&self.tallies()) as Rate * self.model.join_rate()
    }

    pub(super) fn tallies(&self) -> Vec<Tally> {
        self.entries
            .iter()
            .map(|e| e.complex().exterior_bases())
            .collect()
    }

    /// stable forward walk in intrinsic order
    pub fn entries(&self) -> impl Iterator<Item = &Entry<C>> + Clone {
        self.entries.iter()
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry<C>> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub(super) fn entry_at(&self, idx: usize) -> &Entry<C> {
        &self.entries[idx]
    }
    pub(super) fn entry_at_mut(&mut self, idx: usize) -> &mut Entry<C> {
        &mut self.entries[idx]
    }
    pub(super) fn refresh_at(&mut self, idx: usize) {
        let Self { entries, model, .. } = self;
        entries[idx].refresh(model);
    }
    pub(super) fn remove_at(&mut self, idx: usize) -> Entry<C> {
        self.entries.remove(idx).expect("entry index in range")
    }
}
