//! Full reconstruction of an H → ZZ* → 4ℓ candidate from one event

use crate::{
    error::Result,
    event::Kinematics,
    mass::{pair_masses, quad_mass},
    numeric::{Charge, Float},
    pairing::{opposite_charges, PairFinder, PairOrdering},
};

/// Derived quantities of a four-lepton event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZZCandidate {
    /// Grouping of the leptons into an on-shell and an off-shell Z candidate
    pub ordering: PairOrdering,

    /// Invariant mass of the best Z candidate (GeV)
    pub z1_mass: Float,

    /// Invariant mass of the other lepton pair (GeV)
    pub z2_mass: Float,

    /// Invariant mass of the four leptons (GeV)
    pub higgs_mass: Float,
}

/// Pair up the leptons of an event and compute the candidate boson masses
///
/// The remaining lepton pair is not required to have opposite charges. Events
/// where it does not are kept, since selecting events is up to the caller.
///
pub fn reconstruct(
    finder: &PairFinder,
    kinematics: &Kinematics,
    charge: &[Charge],
) -> Result<ZZCandidate> {
    let charges = kinematics.charges(charge)?;
    let ordering = finder.find(kinematics, &charges)?;
    let [o1, o2] = ordering.other_pair();
    if !opposite_charges(charges[o1], charges[o2]) {
        log::debug!(
            "Remaining lepton pair ({}, {}) has charges ({}, {})",
            o1,
            o2,
            charges[o1],
            charges[o2]
        );
    }
    let [z1_mass, z2_mass] = pair_masses(&ordering, kinematics);
    Ok(ZZCandidate {
        ordering,
        z1_mass,
        z2_mass,
        higgs_mass: quad_mass(kinematics),
    })
}
