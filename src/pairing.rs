//! Selection of the lepton pair that best matches a Z boson decay

use crate::{
    config::Configuration,
    error::{Error, Result, ValidationError},
    event::{Kinematics, NUM_LEPTONS},
    momentum,
    numeric::{Charge, Float},
};
use prefix_num_ops::real::*;

/// Nominal Z⁰ boson mass (GeV)
pub const Z_MASS: Float = 91.2;

/// Unordered lepton pairs, in the order in which they are considered
///
/// Ties between pairs that are equally close to the reference mass are broken
/// in favor of the pair which comes first in this list.
///
pub const LEPTON_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Position of the leptons from the best Z candidate in a PairOrdering
pub const BEST_PAIR: [usize; 2] = [0, 1];

/// Position of the remaining leptons in a PairOrdering
pub const OTHER_PAIR: [usize; 2] = [2, 3];

/// Lepton indices, grouped into two pairs
///
/// The first two indices designate the pair whose mass is closest to the
/// reference Z mass, the last two designate the remaining leptons in ascending
/// order. Indices always refer to positions in the original lepton columns.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairOrdering([usize; NUM_LEPTONS]);
//
impl PairOrdering {
    /// Check that some lepton indices form a valid pair ordering
    pub fn new(indices: [usize; NUM_LEPTONS]) -> Result<Self> {
        let mut seen = [false; NUM_LEPTONS];
        for &lepton in &indices {
            if lepton >= NUM_LEPTONS || seen[lepton] {
                return Err(ValidationError::InvalidOrdering { indices }.into());
            }
            seen[lepton] = true;
        }
        Ok(Self(indices))
    }

    /// Group the leptons around a chosen pair
    fn around_pair(i1: usize, i2: usize) -> Self {
        debug_assert!(i1 < i2 && i2 < NUM_LEPTONS);
        let mut indices = [i1, i2, 0, 0];
        let remaining = (0..NUM_LEPTONS).filter(|&lepton| lepton != i1 && lepton != i2);
        for (slot, lepton) in indices[2..].iter_mut().zip(remaining) {
            *slot = lepton;
        }
        Self(indices)
    }

    /// Lepton indices of the best Z candidate
    pub fn best_pair(&self) -> [usize; 2] {
        BEST_PAIR.map(|pos| self.0[pos])
    }

    /// Lepton indices of the remaining pair
    pub fn other_pair(&self) -> [usize; 2] {
        OTHER_PAIR.map(|pos| self.0[pos])
    }

    /// Access the raw lepton indices
    pub fn indices(&self) -> [usize; NUM_LEPTONS] {
        self.0
    }
}

impl TryFrom<[usize; NUM_LEPTONS]> for PairOrdering {
    type Error = Error;

    fn try_from(indices: [usize; NUM_LEPTONS]) -> Result<Self> {
        Self::new(indices)
    }
}

impl From<PairOrdering> for [usize; NUM_LEPTONS] {
    fn from(ordering: PairOrdering) -> Self {
        ordering.0
    }
}

/// Truth that two leptons could come from the decay of a neutral boson
pub fn opposite_charges(c1: Charge, c2: Charge) -> bool {
    c1 == -c2
}

/// Finder of the lepton pair that is closest to a reference mass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairFinder {
    /// Reference mass of the decaying boson (GeV)
    z_mass: Float,
}
//
impl PairFinder {
    /// Look for pairs around an arbitrary reference mass
    pub fn new(z_mass: Float) -> Self {
        Self { z_mass }
    }

    /// Reference mass that this finder compares pairs with
    pub fn z_mass(&self) -> Float {
        self.z_mass
    }

    /// Find the opposite-charge lepton pair whose invariant mass is closest to
    /// the reference mass, and group the leptons around it
    pub fn find(&self, kinematics: &Kinematics, charge: &[Charge]) -> Result<PairOrdering> {
        let charges = kinematics.charges(charge)?;

        // Best (pair, distance to reference mass) seen so far
        let mut best: Option<((usize, usize), Float)> = None;
        for (i1, i2) in LEPTON_PAIRS {
            if !opposite_charges(charges[i1], charges[i2]) {
                continue;
            }
            let mass = momentum::combined_mass([kinematics.momentum(i1), kinematics.momentum(i2)]);
            log::trace!("Lepton pair ({}, {}) has mass {} GeV", i1, i2, mass);

            let distance = abs(mass - self.z_mass);
            if improves_on(distance, best.map(|(_, best_distance)| best_distance)) {
                best = Some(((i1, i2), distance));
            }
        }

        match best {
            Some(((i1, i2), distance)) => {
                log::debug!(
                    "Best Z candidate is lepton pair ({}, {}), {} GeV away from {} GeV",
                    i1,
                    i2,
                    distance,
                    self.z_mass
                );
                Ok(PairOrdering::around_pair(i1, i2))
            }
            None => {
                log::debug!("No opposite-charge lepton pair in event:\n{}", kinematics);
                Err(Error::NoValidPair { charges })
            }
        }
    }
}

/// Truth that a pair at some distance from the reference mass should replace
/// the best pair found so far
///
/// The comparison is strict, so earlier pairs win ties. A NaN distance never
/// wins, even against no pair at all.
///
fn improves_on(distance: Float, best_distance: Option<Float>) -> bool {
    match best_distance {
        Some(best_distance) => distance < best_distance,
        None => !distance.is_nan(),
    }
}

impl Default for PairFinder {
    /// Look for Z⁰ boson candidates
    fn default() -> Self {
        Self::new(Z_MASS)
    }
}

impl From<&Configuration> for PairFinder {
    fn from(cfg: &Configuration) -> Self {
        Self::new(cfg.z_mass)
    }
}
