//! Reproducible generation of random lepton events, for testing purposes

use crate::{
    event::{Kinematics, NUM_LEPTONS},
    numeric::{floats::consts::PI, Charge, Float},
};
use rand::{Rng, SeedableRng};

// Select random number generation engine in use
#[cfg(feature = "f32")]
type Engine = rand_xoshiro::Xoshiro128Plus;
#[cfg(not(feature = "f32"))]
type Engine = rand_xoshiro::Xoshiro256Plus;

/// Lepton columns of a randomly generated event
#[derive(Clone, Debug)]
pub struct LeptonEvent {
    pub pt: [Float; NUM_LEPTONS],
    pub eta: [Float; NUM_LEPTONS],
    pub phi: [Float; NUM_LEPTONS],
    pub mass: [Float; NUM_LEPTONS],
    pub charge: [Charge; NUM_LEPTONS],
}
//
impl LeptonEvent {
    /// View the lepton kinematics
    pub fn kinematics(&self) -> Kinematics<'_> {
        Kinematics::new(&self.pt, &self.eta, &self.phi, &self.mass)
            .expect("Generated events always have four leptons")
    }

    /// Same event, where the i-th lepton is the order[i]-th lepton of self
    pub fn permuted(&self, order: &[usize; NUM_LEPTONS]) -> Self {
        Self {
            pt: order.map(|lepton| self.pt[lepton]),
            eta: order.map(|lepton| self.eta[lepton]),
            phi: order.map(|lepton| self.phi[lepton]),
            mass: order.map(|lepton| self.mass[lepton]),
            charge: order.map(|lepton| self.charge[lepton]),
        }
    }
}

/// Generator of muon-like lepton events, with a fixed seed
pub struct RandomLeptons {
    rng: Engine,
}
//
impl RandomLeptons {
    /// Muon rest mass (GeV)
    const MUON_MASS: Float = 0.105_658;

    // Spawn a new random event generator
    pub fn new() -> Self {
        Self {
            rng: Engine::seed_from_u64(12345),
        }
    }

    /// Generate an event with 4 leptons of random kinematics and charges
    pub fn event(&mut self) -> LeptonEvent {
        LeptonEvent {
            pt: std::array::from_fn(|_| self.rng.gen_range(5. ..100.)),
            eta: std::array::from_fn(|_| self.rng.gen_range(-2.4..2.4)),
            phi: std::array::from_fn(|_| self.rng.gen_range(-PI..PI)),
            mass: [Self::MUON_MASS; NUM_LEPTONS],
            charge: std::array::from_fn(|_| if self.rng.gen_bool(0.5) { 1 } else { -1 }),
        }
    }
}
