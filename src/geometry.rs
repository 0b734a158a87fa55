//! Closed-form transmission-line geometry of the rectangular patch.
//!
//! These are the standard Hammerstad-style design equations: the patch width
//! for efficient radiation, the quasi-static effective permittivity of the
//! mixed air/substrate field, and the physical resonant length after
//! correcting for fringing at the two radiating edges.

use crate::constants::SPEED_OF_LIGHT;
use crate::math::Scalar;

/// Patch width for efficient radiation: `W = (c/2f)·√(2/(εr+1))`.
///
/// Callers guarantee `fr > 0` and `εr ≥ 1` (see [`crate::design::PatchInputs`]).
#[must_use]
pub fn patch_width(fr_hz: Scalar, epsilon_r: Scalar) -> Scalar {
    (SPEED_OF_LIGHT / (2.0 * fr_hz)) * (2.0 / (epsilon_r + 1.0)).sqrt()
}

/// Quasi-static effective permittivity of the microstrip patch.
///
/// `εreff = (εr+1)/2 + (εr−1)/2 · (1 + 12h/W)^(−1/2)`. Monotonically
/// decreasing in `h/W`: it equals `εr` in the thin-substrate limit and
/// approaches `(εr+1)/2` as the substrate grows thick relative to the patch.
#[must_use]
pub fn effective_permittivity(epsilon_r: Scalar, height_m: Scalar, width_m: Scalar) -> Scalar {
    let term = 1.0 / (1.0 + 12.0 * height_m / width_m).sqrt();
    (epsilon_r + 1.0) / 2.0 + (epsilon_r - 1.0) / 2.0 * term
}

/// Fringing-field length extension ΔL at one radiating edge.
///
/// `ΔL = 0.412h · (εreff+0.3)(W/h+0.264) / [(εreff−0.258)(W/h+0.8)]`.
/// The denominator only vanishes at εreff = 0.258 or W/h = −0.8, neither of
/// which is reachable for physical permittivities and positive dimensions.
#[must_use]
pub fn fringing_extension(epsilon_eff: Scalar, height_m: Scalar, width_m: Scalar) -> Scalar {
    let ratio = width_m / height_m;
    let numerator = (epsilon_eff + 0.3) * (ratio + 0.264);
    let denominator = (epsilon_eff - 0.258) * (ratio + 0.8);
    0.412 * height_m * numerator / denominator
}

/// Physical resonant length: `L = c/(2f√εreff) − 2ΔL`.
///
/// Can be non-positive for extreme height/permittivity combinations; the
/// pipeline rejects that case as degenerate rather than clamping.
#[must_use]
pub fn patch_length(
    fr_hz: Scalar,
    epsilon_eff: Scalar,
    height_m: Scalar,
    width_m: Scalar,
) -> Scalar {
    effective_length(fr_hz, epsilon_eff) - 2.0 * fringing_extension(epsilon_eff, height_m, width_m)
}

/// Unfringed half-wave resonant length `c/(2f√εreff)`.
///
/// Used directly by the directivity model, which works with the free-space
/// equivalent radiating length rather than the fringing-corrected physical
/// length. Deliberately independent of [`patch_length`]; collapsing the two
/// would change the directivity estimate.
#[must_use]
pub fn effective_length(fr_hz: Scalar, epsilon_eff: Scalar) -> Scalar {
    SPEED_OF_LIGHT / (2.0 * fr_hz * epsilon_eff.sqrt())
}
