//! This module defines the lepton content of an event, as handed to us by the
//! columnar analysis framework

use crate::{
    error::{Result, ValidationError},
    momentum::{self, Momentum},
    numeric::{Charge, Float},
};
use std::fmt::Display;

/// Number of leptons in an event (two Z candidates with two leptons each)
pub const NUM_LEPTONS: usize = 4;

/// Per-lepton column, as stored by the analysis framework
type Column<'data, T> = &'data [T; NUM_LEPTONS];

/// Kinematics of the four leptons of an event
///
/// Each column is indexed by lepton: `pt[i]`, `eta[i]`, `phi[i]` and `mass[i]`
/// all refer to the same lepton. Building this struct checks that there are
/// exactly four leptons with finite coordinates, so downstream code can index
/// it freely.
///
#[derive(Clone, Copy, Debug)]
pub struct Kinematics<'data> {
    /// Transverse momenta (GeV)
    pt: Column<'data, Float>,

    /// Pseudorapidities
    eta: Column<'data, Float>,

    /// Azimuthal angles (radians)
    phi: Column<'data, Float>,

    /// Rest masses (GeV)
    mass: Column<'data, Float>,
}
//
impl<'data> Kinematics<'data> {
    /// Check the lepton columns of an event and wrap them
    pub fn new(
        pt: &'data [Float],
        eta: &'data [Float],
        phi: &'data [Float],
        mass: &'data [Float],
    ) -> Result<Self> {
        let pt: Column<Float> = pt
            .try_into()
            .map_err(|_| ValidationError::WrongLeptonCount { actual: pt.len() })?;
        let kinematics = Self {
            pt,
            eta: matching_column("eta", eta)?,
            phi: matching_column("phi", phi)?,
            mass: matching_column("mass", mass)?,
        };

        // A single NaN would otherwise poison every pair it takes part in
        for (column, data) in [
            ("pt", kinematics.pt),
            ("eta", kinematics.eta),
            ("phi", kinematics.phi),
            ("mass", kinematics.mass),
        ] {
            if let Some(lepton) = data.iter().position(|x| !x.is_finite()) {
                return Err(ValidationError::NonFinite { column, lepton }.into());
            }
        }
        Ok(kinematics)
    }

    /// Check that a charge column matches these kinematics
    pub fn charges(&self, charge: &[Charge]) -> Result<[Charge; NUM_LEPTONS]> {
        matching_column("charge", charge).map(|charges| *charges)
    }

    /// Compute the 4-momentum of one lepton
    ///
    /// # Panics
    ///
    /// If `lepton` is not smaller than `NUM_LEPTONS`.
    ///
    pub fn momentum(&self, lepton: usize) -> Momentum {
        momentum::from_pt_eta_phi_m(
            self.pt[lepton],
            self.eta[lepton],
            self.phi[lepton],
            self.mass[lepton],
        )
    }

    /// Compute the 4-momenta of all leptons, in index order
    pub fn momenta(&self) -> [Momentum; NUM_LEPTONS] {
        std::array::from_fn(|lepton| self.momentum(lepton))
    }
}

impl Display for Kinematics<'_> {
    /// Dump the collider coordinates of the 4 leptons
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(fmt, "#\tpt\teta\tphi\tmass")?;
        for lepton in 0..NUM_LEPTONS {
            writeln!(
                fmt,
                "{}\t{}\t{}\t{}\t{}",
                lepton, self.pt[lepton], self.eta[lepton], self.phi[lepton], self.mass[lepton]
            )?;
        }
        Ok(())
    }
}

/// Check that a secondary column has as many entries as there are leptons
fn matching_column<'data, T>(
    column: &'static str,
    data: &'data [T],
) -> Result<Column<'data, T>> {
    data.try_into().map_err(|_| {
        ValidationError::MismatchedLength {
            column,
            expected: NUM_LEPTONS,
            actual: data.len(),
        }
        .into()
    })
}
