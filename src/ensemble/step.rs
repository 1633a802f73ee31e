use super::ensemble::Ensemble;
use super::entry::EntryId;
use super::join;
use crate::complex::Complex;
use crate::energy::EnergyModel;
use crate::Rate;

/// what a single dispatcher step did to the ensemble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// two complexes merged; no single entry represents the event
    Join,
    /// an in-place unimolecular move on the picked entry
    Moved(EntryId),
    /// a disassociation; the id is the freshly inserted child
    Split(EntryId),
}

impl<C: Complex, M: EnergyModel> Ensemble<C, M> {
    /// single step of the event dispatcher. choice is a uniform
    /// deviate in [0, total_flux()) drawn by the driver against
    /// the flux returned by the immediately preceding
    /// total_flux() call.
    pub fn step(&mut self, mut choice: Rate) -> Outcome {
        assert!(!self.is_empty(), "stepping an empty ensemble");
        if choice < self.join_flux() {
            self.do_join(choice);
            return Outcome::Join;
        }
        choice -= self.join_flux();
        let mut picked = None;
        for (idx, entry) in self.entries().enumerate() {
            if choice < entry.flux() {
                picked = Some(idx);
                break;
            }
            choice -= entry.flux();
        }
        let Some(idx) = picked else {
            unreachable!("dispatcher walked past the end of the ensemble");
        };
        let mv = self.entry_at(idx).complex().select_move(&mut choice);
        let id = self.entry_at(idx).id();
        match self.entry_at_mut(idx).complex_mut().apply(mv) {
            Some(child) => {
                let born = self.add(child);
                // the parent shifted one slot toward the tail
                self.refresh_at(0);
                self.refresh_at(idx + 1);
                log::trace!("split {} off {}", born, id);
                Outcome::Split(born)
            }
            None => {
                self.refresh_at(idx);
                log::trace!("move on {}", id);
                Outcome::Moved(id)
            }
        }
    }

    /// resolve a deviate under the cached join flux to a
    /// concrete pairing, merge the two entries, and insert the
    /// survivor at the head under a fresh id.
    fn do_join(&mut self, choice: Rate) {
        let deviate = (choice / self.model().join_rate()).floor() as u64;
        let pick = join::resolve(&self.tallies(), deviate);
        log::trace!(
            "join {} {} via {:?}/{:?}",
            self.entry_at(pick.first).id(),
            self.entry_at(pick.second).id(),
            pick.first_site,
            pick.second_site,
        );
        // the second index is the larger; removing it first
        // keeps the first index stable
        let second = self.remove_at(pick.second);
        let first = self.remove_at(pick.first);
        let merged = C::join(
            first.into_complex(),
            second.into_complex(),
            pick.first_site,
            pick.second_site,
        );
        self.add(merged);
        self.refresh_at(0);
    }
}
