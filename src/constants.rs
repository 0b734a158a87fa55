//! Baseline physical constants and frequency helpers.
//!
//! ## Accuracy
//!
//! The speed of light is exact by SI definition (2019 revision). The classic
//! patch-antenna literature often rounds it to 3 × 10⁸ m/s; using the exact
//! value shifts every derived length by about 0.07% relative to tables
//! computed with the rounded constant.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Mohr, P. J., Newell, D. B., Taylor, B. N., & Tiesinga, E. (2019). CODATA Recommended Values of the Fundamental Physical Constants: 2018.

use std::f64::consts::PI;

/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Characteristic impedance of free space Z₀ in ohms (Ω).
/// Derived from Z₀ = √(μ₀/ε₀) ≈ 376.730313668 Ω.
pub const FREE_SPACE_IMPEDANCE: f64 = 376.730_313_668;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Returns the free-space wavelength in meters for a given frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: f64) -> f64 {
    SPEED_OF_LIGHT / hz
}

/// Returns the free-space wavenumber k₀ = 2πf/c in radians per meter.
#[inline]
#[must_use]
pub fn free_space_wavenumber(hz: f64) -> f64 {
    angular_frequency(hz) / SPEED_OF_LIGHT
}
