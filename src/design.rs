//! Input/result value types and the design pipeline.
//!
//! The pipeline is a straight line: width → effective permittivity →
//! fringed length → slot conductances → edge resistance → feed inset →
//! directivity → snapshot. No stage keeps state, so a [`PatchDesigner`] can
//! be shared freely across threads and every call is reentrant.

use crate::directivity::directivity_dbi;
use crate::errors::DesignError;
use crate::geometry::{effective_permittivity, patch_length, patch_width};
use crate::math::Scalar;
use crate::radiation::{edge_resistance, feed_inset, slot_conductances};

/// Validated design request for a rectangular microstrip patch.
///
/// Construction through [`PatchInputs::new`] is the single place the input
/// domain is enforced; the pipeline itself assumes in-range values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchInputs {
    /// Desired resonant frequency in hertz.
    pub resonant_frequency_hz: Scalar,
    /// Relative permittivity εr of the substrate.
    pub substrate_permittivity: Scalar,
    /// Substrate thickness in meters.
    pub substrate_height_m: Scalar,
}

impl PatchInputs {
    /// Accepted resonant frequency range, 0.1 to 100 GHz.
    pub const FREQUENCY_RANGE_HZ: (Scalar, Scalar) = (0.1e9, 100.0e9);
    /// Accepted relative permittivity range.
    pub const PERMITTIVITY_RANGE: (Scalar, Scalar) = (1.0, 20.0);
    /// Accepted substrate height range, 0.01 to 100 mm.
    pub const HEIGHT_RANGE_M: (Scalar, Scalar) = (0.01e-3, 100.0e-3);

    /// Validates and constructs a design request.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::InvalidInput`] when any input is non-finite or
    /// outside its accepted range.
    pub fn new(
        resonant_frequency_hz: Scalar,
        substrate_permittivity: Scalar,
        substrate_height_m: Scalar,
    ) -> Result<Self, DesignError> {
        check_range(
            "resonant_frequency_hz",
            resonant_frequency_hz,
            Self::FREQUENCY_RANGE_HZ,
            "0.1 GHz to 100 GHz",
        )?;
        check_range(
            "substrate_permittivity",
            substrate_permittivity,
            Self::PERMITTIVITY_RANGE,
            "1 to 20",
        )?;
        check_range(
            "substrate_height_m",
            substrate_height_m,
            Self::HEIGHT_RANGE_M,
            "0.01 mm to 100 mm",
        )?;
        Ok(Self {
            resonant_frequency_hz,
            substrate_permittivity,
            substrate_height_m,
        })
    }
}

fn check_range(
    field: &'static str,
    value: Scalar,
    (lo, hi): (Scalar, Scalar),
    range: &'static str,
) -> Result<(), DesignError> {
    if value.is_finite() && (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(DesignError::InvalidInput { field, value, range })
    }
}

/// Immutable snapshot of every derived antenna parameter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchDesign {
    /// Echo of the requested resonant frequency, in hertz.
    pub resonant_frequency_hz: Scalar,
    /// Echo of the substrate relative permittivity.
    pub substrate_permittivity: Scalar,
    /// Echo of the substrate thickness, in meters.
    pub substrate_height_m: Scalar,
    /// Radiating patch width W, in meters.
    pub patch_width_m: Scalar,
    /// Effective permittivity εreff of the mixed air/substrate field.
    pub effective_permittivity: Scalar,
    /// Fringing-corrected physical patch length L, in meters.
    pub patch_length_m: Scalar,
    /// Self-conductance G₁ of one radiating slot, in siemens.
    pub slot_conductance_s: Scalar,
    /// Mutual conductance G₁₂ between the two slots, in siemens.
    pub mutual_conductance_s: Scalar,
    /// Input resistance at the radiating edge, in ohms.
    pub edge_resistance_ohm: Scalar,
    /// Inset feed distance from the edge for a 50 Ω match, in meters.
    pub feed_inset_m: Scalar,
    /// Peak directivity, in dBi.
    pub directivity_dbi: Scalar,
}

/// Stateless design service.
///
/// Exists so callers that want a long-lived handle (dependency injection,
/// trait objects) have one; the free function [`design_patch`] covers the
/// common case. Never mutated, so sharing one instance needs no locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchDesigner;

impl PatchDesigner {
    /// Creates the service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs the full design pipeline for the given validated inputs.
    ///
    /// # Errors
    ///
    /// [`DesignError::DegenerateGeometry`] when the fringing correction
    /// exceeds the half-wave length and the length formula goes non-positive;
    /// [`DesignError::Numerical`] if an integration stage yields a
    /// non-finite value (an internal defect surfaced as an error rather than
    /// a panic).
    pub fn design(&self, inputs: &PatchInputs) -> Result<PatchDesign, DesignError> {
        let fr = inputs.resonant_frequency_hz;
        let epsilon_r = inputs.substrate_permittivity;
        let h = inputs.substrate_height_m;

        let width = patch_width(fr, epsilon_r);
        let epsilon_eff = effective_permittivity(epsilon_r, h, width);
        let length = patch_length(fr, epsilon_eff, h, width);
        if length <= 0.0 {
            return Err(DesignError::DegenerateGeometry { length_m: length });
        }

        let conductances = slot_conductances(width, length, fr);
        if !conductances.single.is_finite() || !conductances.mutual.is_finite() {
            return Err(DesignError::Numerical {
                stage: "slot conductance integration",
            });
        }
        let resistance = edge_resistance(conductances);
        let inset = feed_inset(resistance, length);

        let directivity = directivity_dbi(width, fr, epsilon_eff);
        if !directivity.is_finite() {
            return Err(DesignError::Numerical {
                stage: "directivity integration",
            });
        }

        Ok(PatchDesign {
            resonant_frequency_hz: fr,
            substrate_permittivity: epsilon_r,
            substrate_height_m: h,
            patch_width_m: width,
            effective_permittivity: epsilon_eff,
            patch_length_m: length,
            slot_conductance_s: conductances.single,
            mutual_conductance_s: conductances.mutual,
            edge_resistance_ohm: resistance,
            feed_inset_m: inset,
            directivity_dbi: directivity,
        })
    }
}

/// Designs a patch antenna for the given validated inputs.
///
/// Convenience wrapper over [`PatchDesigner::design`].
///
/// # Errors
///
/// Same as [`PatchDesigner::design`].
pub fn design_patch(inputs: &PatchInputs) -> Result<PatchDesign, DesignError> {
    PatchDesigner::new().design(inputs)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn fr4_2g4() -> PatchInputs {
        PatchInputs::new(2.4e9, 4.4, 1.6e-3).expect("valid inputs")
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        assert!(matches!(
            PatchInputs::new(50.0e6, 4.4, 1.6e-3),
            Err(DesignError::InvalidInput { field: "resonant_frequency_hz", .. })
        ));
        assert!(matches!(
            PatchInputs::new(2.4e9, 0.9, 1.6e-3),
            Err(DesignError::InvalidInput { field: "substrate_permittivity", .. })
        ));
        assert!(matches!(
            PatchInputs::new(2.4e9, 4.4, 0.5),
            Err(DesignError::InvalidInput { field: "substrate_height_m", .. })
        ));
        assert!(PatchInputs::new(Scalar::NAN, 4.4, 1.6e-3).is_err());
    }

    #[test]
    fn accepts_range_endpoints() {
        assert!(PatchInputs::new(0.1e9, 1.0, 0.01e-3).is_ok());
        assert!(PatchInputs::new(100.0e9, 20.0, 100.0e-3).is_ok());
    }

    #[test]
    fn scenario_fr4_at_2g4() {
        // 2.4 GHz, εr = 4.4, h = 1.6 mm: the classic FR-4 WiFi patch.
        let design = design_patch(&fr4_2g4()).expect("pipeline succeeds");
        assert_relative_eq!(design.patch_width_m, 0.038, epsilon = 0.5e-3);
        assert_relative_eq!(design.effective_permittivity, 4.0, epsilon = 0.3);
        assert_relative_eq!(design.patch_length_m, 0.029, epsilon = 1.0e-3);
        assert!(design.directivity_dbi > 5.5 && design.directivity_dbi < 8.5);
        assert!(design.slot_conductance_s > 0.0 && design.mutual_conductance_s > 0.0);
        assert!(design.edge_resistance_ohm > 0.0 && design.edge_resistance_ohm < 5.0e11);
        assert!(design.feed_inset_m >= 0.0 && design.feed_inset_m <= design.patch_length_m / 2.0);
    }

    #[test]
    fn scenario_fr4_at_5g() {
        let inputs = PatchInputs::new(5.0e9, 4.4, 1.0e-3).expect("valid inputs");
        let design = design_patch(&inputs).expect("pipeline succeeds");
        assert_relative_eq!(design.patch_width_m, 0.018, epsilon = 1.0e-3);
        let reference = design_patch(&fr4_2g4()).expect("pipeline succeeds");
        assert!(design.patch_length_m < reference.patch_length_m);
        assert!(design.directivity_dbi > 5.5 && design.directivity_dbi < 9.0);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let inputs = fr4_2g4();
        let first = design_patch(&inputs).expect("pipeline succeeds");
        let second = design_patch(&inputs).expect("pipeline succeeds");
        assert_eq!(first, second);
    }

    #[test]
    fn directivity_is_scale_invariant() {
        // Doubling the frequency while halving the substrate keeps the
        // geometry electrically identical, so directivity must agree to
        // within the quadrature tolerance.
        let base = design_patch(&fr4_2g4()).expect("pipeline succeeds");
        let scaled_inputs = PatchInputs::new(4.8e9, 4.4, 0.8e-3).expect("valid inputs");
        let scaled = design_patch(&scaled_inputs).expect("pipeline succeeds");
        assert_relative_eq!(base.directivity_dbi, scaled.directivity_dbi, epsilon = 0.1);
    }

    #[test]
    fn air_substrate_is_supported() {
        let inputs = PatchInputs::new(10.0e9, 1.0, 0.5e-3).expect("valid inputs");
        let design = design_patch(&inputs).expect("pipeline succeeds");
        assert_relative_eq!(design.effective_permittivity, 1.0, epsilon = 1.0e-12);
        assert!(design.patch_length_m > 0.0);
    }

    #[test]
    fn thick_low_frequency_geometry_degenerates() {
        // 100 mm of εr = 20 at 100 GHz: the fringing correction dwarfs the
        // sub-millimeter half-wave length and the formula goes negative.
        let inputs = PatchInputs::new(100.0e9, 20.0, 100.0e-3).expect("valid inputs");
        assert!(matches!(
            design_patch(&inputs),
            Err(DesignError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn echoed_inputs_round_trip() {
        let inputs = fr4_2g4();
        let design = design_patch(&inputs).expect("pipeline succeeds");
        assert_eq!(design.resonant_frequency_hz, inputs.resonant_frequency_hz);
        assert_eq!(design.substrate_permittivity, inputs.substrate_permittivity);
        assert_eq!(design.substrate_height_m, inputs.substrate_height_m);
    }
}
