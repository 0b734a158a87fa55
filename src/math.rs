//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Converts a linear power ratio to decibels, clamping very small values.
#[must_use]
pub fn power_db(ratio: Scalar) -> Scalar {
    const MIN: Scalar = 1e-300;
    10.0 * ratio.max(MIN).log10()
}

/// Zeroth-order Bessel function of the first kind, J₀(x).
///
/// Rational approximations from Abramowitz & Stegun §9.4 (max error below
/// 1e-7 over the whole real line), with the asymptotic form used for
/// |x| ≥ 8. Accurate enough for the radiation integrals, whose arguments
/// stay below k₀L ≈ π for physical patches.
#[must_use]
pub fn bessel_j0(x: Scalar) -> Scalar {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let p1 = 57_568_490_574.0
            + y * (-13_362_590_354.0
                + y * (651_619_640.7
                    + y * (-11_214_424.18 + y * (77_392.330_17 + y * (-184.905_245_6)))));
        let p2 = 57_568_490_411.0
            + y * (1_029_532_985.0
                + y * (9_494_680.718 + y * (59_272.648_53 + y * (267.853_271_2 + y))));
        p1 / p2
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 0.785_398_164;
        let p1 = 1.0
            + y * (-0.109_862_862_7e-2
                + y * (0.273_451_040_7e-4 + y * (-0.207_337_063_9e-5 + y * 0.209_388_721_1e-6)));
        let p2 = -0.156_249_999_5e-1
            + y * (0.143_048_876_5e-3
                + y * (-0.691_114_765_1e-5 + y * (0.762_109_516_1e-6 + y * (-0.934_935_152e-7))));
        (0.636_619_772 / ax).sqrt() * (xx.cos() * p1 - z * xx.sin() * p2)
    }
}
