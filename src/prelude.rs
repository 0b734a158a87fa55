//! Convenience re-exports for designing patch antennas.

pub use crate::constants::*;
pub use crate::design::{design_patch, PatchDesign, PatchDesigner, PatchInputs};
pub use crate::directivity::directivity_dbi;
pub use crate::errors::DesignError;
pub use crate::geometry::{
    effective_length, effective_permittivity, fringing_extension, patch_length, patch_width,
};
pub use crate::math::{bessel_j0, power_db, Scalar};
pub use crate::quadrature::{integrate, integrate_2d, Tolerance};
pub use crate::radiation::{
    edge_resistance, feed_inset, slot_conductances, slot_pattern, SlotConductances,
    CONDUCTANCE_FLOOR_S, FEED_TARGET_OHM,
};
pub use crate::report::write_design_report;
