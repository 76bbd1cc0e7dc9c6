//! 4 leptons: Z and Higgs boson candidates from four-lepton events
//!
//!
//! # Introduction (for the physicist)
//!
//! This small library reconstructs the H → ZZ* → 4ℓ decay chain from the four
//! leptons of a collision event. It picks the opposite-charge lepton pair
//! whose invariant mass is closest to the Z⁰ boson mass (the on-shell Z), pairs
//! up the two remaining leptons (the off-shell Z*), and computes the invariant
//! masses of both Z candidates and of the four-lepton system (the Higgs boson
//! candidate).
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Everything boils down to sums of relativistic 4-momenta, built from the
//! (pt, η, φ, m) coordinates that detectors report, followed by extraction of
//! their Minkowski norm. There are only six lepton pairs to try, so no search
//! strategy is needed beyond brute force.
//!
//!
//! # Introduction (for the computer guy)
//!
//! The analysis framework hands us per-event lepton columns, and we hand it
//! back a few derived columns. Each step is a pure function of one event:
//!
//! * check the lepton columns and wrap them into [`Kinematics`]
//! * find the best Z candidate with a [`PairFinder`], yielding a
//!   [`PairOrdering`] of the lepton indices
//! * compute the masses of the two lepton pairs with [`pair_masses`]
//! * compute the mass of the four leptons with [`quad_mass`]
//!
//! [`reconstruct`] chains all of these. Malformed events and events without an
//! opposite-charge lepton pair are reported as an [`Error`], which the caller
//! is expected to handle by skipping the event.

#![warn(missing_docs)]

mod candidate;
mod config;
mod error;
mod event;
mod mass;
pub mod momentum;
pub mod numeric;
mod pairing;
#[cfg(test)]
mod random;

pub use crate::{
    candidate::{reconstruct, ZZCandidate},
    config::Configuration,
    error::{Error, Result, ValidationError},
    event::{Kinematics, NUM_LEPTONS},
    mass::{pair_masses, quad_mass},
    numeric::{Charge, Float},
    pairing::{opposite_charges, PairFinder, PairOrdering, LEPTON_PAIRS, Z_MASS},
};
