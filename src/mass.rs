//! Invariant masses of the Z and Higgs boson candidates

use crate::{event::Kinematics, momentum, numeric::Float, pairing::PairOrdering};

/// Invariant masses of the two lepton pairs of an ordering
///
/// The first mass is that of the best Z candidate, the second one that of the
/// remaining leptons. The charges of the remaining leptons are not checked.
///
pub fn pair_masses(ordering: &PairOrdering, kinematics: &Kinematics) -> [Float; 2] {
    let pair_mass = |[i1, i2]: [usize; 2]| {
        momentum::combined_mass([kinematics.momentum(i1), kinematics.momentum(i2)])
    };
    [
        pair_mass(ordering.best_pair()),
        pair_mass(ordering.other_pair()),
    ]
}

/// Invariant mass of the four leptons, i.e. of the Higgs boson candidate
pub fn quad_mass(kinematics: &Kinematics) -> Float {
    momentum::combined_mass(kinematics.momenta())
}
