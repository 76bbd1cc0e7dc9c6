//! This module implements some domain-specific 4-momentum handling logic.

use crate::numeric::Float;
use nalgebra::SVector;
use num_traits::Zero;
use prefix_num_ops::real::*;

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Relativistic 4-momentum
pub type Momentum = SVector<Float, MOMENTUM_DIM>;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 2;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 3;

/// Build a 4-momentum from collider coordinates
///
/// The transverse momentum `pt` and rest mass `mass` are in GeV, the azimuthal
/// angle `phi` in radians. `eta` is the pseudorapidity.
///
pub fn from_pt_eta_phi_m(pt: Float, eta: Float, phi: Float, mass: Float) -> Momentum {
    // |p| = pt * cosh(eta), computed directly to avoid summing three squares
    let p_norm = pt * cosh(eta);
    Momentum::new(
        pt * cos(phi),
        pt * sin(phi),
        pt * sinh(eta),
        sqrt(p_norm * p_norm + mass * mass),
    )
}

/// Invariant mass of a 4-momentum
///
/// Rounding errors can make the squared mass of a (nearly) massless system
/// slightly negative. We clamp it to zero so that the result is always a
/// valid, non-negative mass. A NaN squared mass is propagated as is.
///
pub fn invariant_mass(p: &Momentum) -> Float {
    let m2 = p[E] * p[E] - p.xyz().norm_squared();
    if m2 < 0. {
        0.
    } else {
        sqrt(m2)
    }
}

/// Invariant mass of the sum of several 4-momenta
pub fn combined_mass(momenta: impl IntoIterator<Item = Momentum>) -> Float {
    let total = momenta
        .into_iter()
        .fold(Momentum::zero(), |acc, p| acc + p);
    invariant_mass(&total)
}
