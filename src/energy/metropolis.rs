use super::model::EnergyModel;
use crate::base::Base;
use crate::Energy;
use crate::Rate;

/// Metropolis kinetics over a flat base-pair energy table.
/// downhill moves fire at k0; uphill moves are damped by the
/// Boltzmann factor at the simulated temperature.
#[derive(Debug, Clone, Copy)]
pub struct Metropolis {
    kt: Energy, // k_B * T in kcal/mol
    k0: Rate,
    kjoin: Rate,
    volume: Energy,
    assoc: Energy,
}

impl Metropolis {
    pub fn new(kelvin: f64) -> Self {
        assert!(kelvin > 0.);
        Self {
            kt: crate::KB * kelvin,
            k0: crate::K_UNI,
            kjoin: crate::K_JOIN,
            volume: 0.,
            assoc: 0.,
        }
    }
    pub fn celsius(celsius: f64) -> Self {
        Self::new(celsius + crate::K0)
    }
    pub fn with_k0(mut self, k0: Rate) -> Self {
        assert!(k0 > 0.);
        self.k0 = k0;
        self
    }
    pub fn with_join_rate(mut self, kjoin: Rate) -> Self {
        assert!(kjoin >= 0.);
        self.kjoin = kjoin;
        self
    }
    pub fn with_corrections(mut self, volume: Energy, assoc: Energy) -> Self {
        self.volume = volume;
        self.assoc = assoc;
        self
    }
    pub fn kt(&self) -> Energy {
        self.kt
    }
}

impl Default for Metropolis {
    fn default() -> Self {
        Self::new(310.15) // 37 C
    }
}

impl EnergyModel for Metropolis {
    fn volume_energy(&self) -> Energy {
        self.volume
    }
    fn assoc_energy(&self) -> Energy {
        self.assoc
    }
    fn join_rate(&self) -> Rate {
        self.kjoin
    }
    fn rate(&self, delta: Energy) -> Rate {
        if delta <= 0. {
            self.k0
        } else {
            self.k0 * (-delta / self.kt).exp()
        }
    }
    fn bond(&self, a: Base, b: Base) -> Energy {
        if !a.complements(&b) {
            0.
        } else if matches!((a, b), (Base::G, Base::C) | (Base::C, Base::G)) {
            -3.0
        } else {
            -2.0
        }
    }
}
