//! Failures that can occur while reconstructing a single event

use crate::{event::NUM_LEPTONS, numeric::Charge};
use thiserror::Error;

/// Per-event reconstruction error
///
/// None of these are fatal for an analysis: the caller will usually skip the
/// offending event and carry on with the next one.
///
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The lepton data of the event is malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No two leptons of the event carry opposite charges
    #[error("no opposite-charge lepton pair in event (charges: {charges:?})")]
    NoValidPair {
        /// Charges of the event's leptons
        charges: [Charge; NUM_LEPTONS],
    },
}

/// Malformed lepton data
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The event does not contain exactly four leptons
    #[error("expected {} leptons, got {actual}", NUM_LEPTONS)]
    WrongLeptonCount {
        /// Number of leptons that was provided
        actual: usize,
    },

    /// Some lepton column does not have the same length as the others
    #[error("{column} column has {actual} entries, expected {expected}")]
    MismatchedLength {
        /// Name of the offending column
        column: &'static str,

        /// Length of the reference (pt) column
        expected: usize,

        /// Length of the offending column
        actual: usize,
    },

    /// Some lepton coordinate is infinite or NaN
    #[error("{column} of lepton {lepton} is not a finite number")]
    NonFinite {
        /// Name of the offending column
        column: &'static str,

        /// Index of the offending lepton
        lepton: usize,
    },

    /// A lepton pair ordering is not a permutation of the lepton indices
    #[error("{indices:?} is not a permutation of the lepton indices")]
    InvalidOrdering {
        /// Rejected lepton indices
        indices: [usize; NUM_LEPTONS],
    },
}

/// Result type used by per-event reconstruction functions
pub type Result<T> = std::result::Result<T, Error>;
