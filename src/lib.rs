#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Shared mathematical utilities (scalar type, special functions).
pub mod math;
/// Adaptive numerical quadrature in one and two dimensions.
pub mod quadrature;
/// Closed-form transmission-line geometry of the rectangular patch.
pub mod geometry;
/// Slot radiation conductances, edge resistance, and feed placement.
pub mod radiation;
/// Peak directivity from the two-slot radiation integral.
pub mod directivity;
/// Input/result value types and the design pipeline.
pub mod design;
/// Human-readable report export.
pub mod report;
/// Error types shared across modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use design::{design_patch, PatchDesign, PatchDesigner, PatchInputs};
pub use errors::DesignError;
