//! Peak directivity of the two-slot radiation model.

use std::f64::consts::PI;

use crate::constants::{free_space_wavenumber, wavelength_from_frequency};
use crate::geometry::effective_length;
use crate::math::{power_db, Scalar};
use crate::quadrature::{integrate_2d, Tolerance};
use crate::radiation::slot_pattern;

/// Per-axis tolerances for the directivity integral. The inner (azimuth)
/// axis is tighter so its residual error does not masquerade as roughness
/// to the outer elevation pass.
const OUTER_TOL: Tolerance = Tolerance::new(1.0e-9, 1.0e-7);
const INNER_TOL: Tolerance = Tolerance::new(1.0e-10, 1.0e-8);

/// Peak directivity in dBi via 2-D quadrature over (θ, φ) ∈ [0, π]².
///
/// The radiated-power integral is
/// `I₁ = ∬ [sin(k₀W/2·cosθ)/cosθ]²·sin³θ·cos²(k₀Leff/2·sinθ·sinφ) dφ dθ`,
/// where `Leff` is the unfringed free-space-equivalent length from
/// [`effective_length`] — not the fringing-corrected physical length. Then
/// `D = (2πW/λ₀)²·(π/I₁)`, reported as `10·log₁₀(D)`.
///
/// If the integral comes back non-positive (underflow or noise for an
/// essentially non-radiating geometry), 0 dBi is reported instead of
/// propagating a log-domain failure.
#[must_use]
pub fn directivity_dbi(width_m: Scalar, fr_hz: Scalar, epsilon_eff: Scalar) -> Scalar {
    let k0 = free_space_wavenumber(fr_hz);
    let lambda0 = wavelength_from_frequency(fr_hz);
    let u = k0 * width_m / 2.0;
    let half_arc = k0 * effective_length(fr_hz, epsilon_eff) / 2.0;

    let i1 = integrate_2d(
        &|theta: Scalar, phi: Scalar| {
            let slot = slot_pattern(u, theta).powi(2) * theta.sin().powi(3);
            let array = (half_arc * theta.sin() * phi.sin()).cos().powi(2);
            slot * array
        },
        (0.0, PI),
        (0.0, PI),
        OUTER_TOL,
        INNER_TOL,
    );

    if i1 <= 0.0 {
        return 0.0;
    }
    let d = (2.0 * PI * width_m / lambda0).powi(2) * (PI / i1);
    power_db(d)
}
