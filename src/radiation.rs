//! Slot radiation conductances, edge resistance, and feed placement.
//!
//! The two radiating edges of the patch are modeled as a pair of slots. The
//! self-conductance of one slot and the mutual conductance between the pair
//! follow from integrating the slot radiation pattern over the elevation
//! angle; neither integral has a closed form.

use std::f64::consts::PI;

use crate::constants::free_space_wavenumber;
use crate::math::{bessel_j0, Scalar};
use crate::quadrature::{integrate, Tolerance};

/// Feed-line impedance the inset position is matched to, in ohms.
pub const FEED_TARGET_OHM: Scalar = 50.0;

/// Floor applied to both conductances, in siemens. Guards the downstream
/// `1/(2(G1+G12))` against integration noise that lands at or below zero.
pub const CONDUCTANCE_FLOOR_S: Scalar = 1.0e-12;

/// Self- and mutual conductance of the two radiating slots, in siemens.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotConductances {
    /// Self-conductance G₁ of a single radiating slot.
    pub single: Scalar,
    /// Mutual conductance G₁₂ between the two slots.
    pub mutual: Scalar,
}

/// Radiation pattern factor of one slot, `sin(u·cosθ)/cosθ`.
///
/// The ratio has a removable singularity at θ = π/2; near it the analytic
/// limit `u` (l'Hôpital) is substituted so the quadrature never sees a 0/0.
#[inline]
#[must_use]
pub fn slot_pattern(u: Scalar, theta: Scalar) -> Scalar {
    let cos_t = theta.cos();
    if cos_t.abs() < 1.0e-9 {
        u
    } else {
        (u * cos_t).sin() / cos_t
    }
}

/// Computes G₁ and G₁₂ by adaptive quadrature over θ ∈ [0, π].
///
/// The G₁ integrand is `[sin(k₀W/2·cosθ)/cosθ]²·sin³θ`; G₁₂ carries an extra
/// `J₀(k₀L·sinθ)` factor coupling the two slots across the patch length.
/// Both results are normalized by 120π² and floored at
/// [`CONDUCTANCE_FLOOR_S`], so the returned values are strictly positive.
/// Pure in its arguments; deterministic up to the quadrature tolerance.
#[must_use]
pub fn slot_conductances(width_m: Scalar, length_m: Scalar, fr_hz: Scalar) -> SlotConductances {
    let k0 = free_space_wavenumber(fr_hz);
    let u = k0 * width_m / 2.0;
    let tol = Tolerance::DEFAULT;

    let g1 = integrate(
        &|theta: Scalar| slot_pattern(u, theta).powi(2) * theta.sin().powi(3),
        0.0,
        PI,
        tol,
    );
    let g12 = integrate(
        &|theta: Scalar| {
            slot_pattern(u, theta).powi(2)
                * bessel_j0(k0 * length_m * theta.sin())
                * theta.sin().powi(3)
        },
        0.0,
        PI,
        tol,
    );

    let norm = 120.0 * PI * PI;
    SlotConductances {
        single: (g1 / norm).max(CONDUCTANCE_FLOOR_S),
        mutual: (g12 / norm).max(CONDUCTANCE_FLOOR_S),
    }
}

/// Input resistance at the radiating edge: `R = 1/(2(G₁+G₁₂))`.
///
/// Finite by construction since both conductances are floored; the ceiling
/// is `1/(4·10⁻¹²) = 2.5×10¹¹ Ω` when both sit at the floor.
#[must_use]
pub fn edge_resistance(conductances: SlotConductances) -> Scalar {
    1.0 / (2.0 * (conductances.single + conductances.mutual))
}

/// Inset distance from the radiating edge that presents [`FEED_TARGET_OHM`].
///
/// When the edge resistance is already below the target, the 50 Ω point does
/// not exist along the slot and the feed goes at the edge (`y₀ = 0`).
/// Otherwise `y₀ = (L/π)·acos(√(50/R))`, which lies in `[0, L/2]` and meets
/// the first branch continuously at R = 50 Ω.
#[must_use]
pub fn feed_inset(edge_resistance_ohm: Scalar, length_m: Scalar) -> Scalar {
    if edge_resistance_ohm < FEED_TARGET_OHM {
        return 0.0;
    }
    let arg = (FEED_TARGET_OHM / edge_resistance_ohm).sqrt();
    debug_assert!((0.0..=1.0).contains(&arg));
    (length_m / PI) * arg.acos()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn slot_pattern_is_finite_at_broadside() {
        let u = 1.234;
        let at_singularity = slot_pattern(u, PI / 2.0);
        assert!(at_singularity.is_finite());
        assert_relative_eq!(at_singularity, u, epsilon = 1.0e-9);
        // Approach from both sides matches the limit.
        assert_relative_eq!(slot_pattern(u, PI / 2.0 - 1.0e-6), u, epsilon = 1.0e-5);
        assert_relative_eq!(slot_pattern(u, PI / 2.0 + 1.0e-6), u, epsilon = 1.0e-5);
    }

    #[test]
    fn conductances_positive_for_typical_patch() {
        // 2.4 GHz FR-4 patch, W ≈ 38 mm, L ≈ 29.4 mm.
        let g = slot_conductances(0.038, 0.0294, 2.4e9);
        assert!(g.single > CONDUCTANCE_FLOOR_S);
        assert!(g.mutual > CONDUCTANCE_FLOOR_S);
        // Textbook order of magnitude for a narrow patch: ~1e-3 S.
        assert!(g.single > 1.0e-4 && g.single < 1.0e-2);
    }

    #[test]
    fn conductances_respect_floor_for_vanishing_patch() {
        // A patch much smaller than the wavelength radiates almost nothing;
        // the floor keeps both conductances strictly positive.
        let g = slot_conductances(1.0e-6, 1.0e-6, 1.0e8);
        assert!(g.single >= CONDUCTANCE_FLOOR_S);
        assert!(g.mutual >= CONDUCTANCE_FLOOR_S);
    }

    #[test]
    fn edge_resistance_bounded_by_floor_ceiling() {
        let floored = SlotConductances {
            single: CONDUCTANCE_FLOOR_S,
            mutual: CONDUCTANCE_FLOOR_S,
        };
        let r = edge_resistance(floored);
        assert_relative_eq!(r, 2.5e11, max_relative = 1.0e-12);
    }

    #[test]
    fn feed_at_edge_below_target() {
        assert_relative_eq!(feed_inset(49.99, 0.03), 0.0);
        assert_relative_eq!(feed_inset(1.0, 0.03), 0.0);
    }

    #[test]
    fn feed_branches_meet_at_target_impedance() {
        // acos(√(50/50)) = 0, so both branches give y₀ = 0 at exactly 50 Ω.
        assert_relative_eq!(feed_inset(FEED_TARGET_OHM, 0.03), 0.0, epsilon = 1.0e-12);
        // And the inset grows continuously just above the target.
        let just_above = feed_inset(FEED_TARGET_OHM + 1.0e-6, 0.03);
        assert!(just_above >= 0.0 && just_above < 1.0e-5);
    }

    #[test]
    fn feed_inset_stays_in_first_half() {
        let length = 0.0294;
        for r in [50.0, 75.0, 150.0, 400.0, 1.0e6] {
            let y0 = feed_inset(r, length);
            assert!(y0 >= 0.0 && y0 <= length / 2.0, "y0 = {y0} for R = {r}");
        }
    }
}
