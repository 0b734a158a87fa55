//! Adaptive Simpson quadrature in one and two dimensions.
//!
//! The radiation integrands this crate evaluates are smooth but oscillatory
//! and ill-conditioned near broadside (θ = π/2), so a fixed-step rule either
//! wastes samples or misses the narrow features. The scheme here is the
//! classic recursive adaptive Simpson rule with a mixed absolute/relative
//! tolerance: each interval is accepted when the Richardson error estimate
//! `(S_left + S_right - S_whole)/15` falls below the local budget, and the
//! budget halves with each bisection. An initial multi-panel split seeds the
//! recursion so an integrand that happens to be symmetric about the first
//! midpoint cannot fool the error estimate.

use crate::math::Scalar;

/// Mixed absolute/relative tolerance for one integration axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute error budget for the whole interval.
    pub abs: Scalar,
    /// Relative error budget, scaled by the running estimate of the integral.
    pub rel: Scalar,
}

impl Tolerance {
    /// Tolerance comparable to double-precision library defaults (~1e-8).
    pub const DEFAULT: Self = Self {
        abs: 1.0e-10,
        rel: 1.0e-8,
    };

    /// Creates a tolerance with the given absolute and relative budgets.
    #[must_use]
    pub const fn new(abs: Scalar, rel: Scalar) -> Self {
        Self { abs, rel }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Number of equal panels the interval is split into before adaptation.
const INITIAL_PANELS: usize = 8;
/// Maximum bisection depth per panel. 2^40 subdivisions of a panel is far
/// beyond anything a smooth integrand needs; hitting it means the local
/// error budget has shrunk below representable resolution, and the best
/// available estimate is returned.
const MAX_DEPTH: u32 = 40;

/// Composite Simpson estimate over `[a, b]` from endpoint/midpoint samples.
#[inline]
fn simpson(fa: Scalar, fm: Scalar, fb: Scalar, h: Scalar) -> Scalar {
    (fa + 4.0 * fm + fb) * h / 6.0
}

#[allow(clippy::too_many_arguments)]
fn adapt<F: Fn(Scalar) -> Scalar>(
    f: &F,
    a: Scalar,
    b: Scalar,
    fa: Scalar,
    fm: Scalar,
    fb: Scalar,
    whole: Scalar,
    eps: Scalar,
    depth: u32,
) -> Scalar {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);
    let h = b - a;
    let left = simpson(fa, flm, fm, 0.5 * h);
    let right = simpson(fm, frm, fb, 0.5 * h);
    let delta = left + right - whole;

    if depth >= MAX_DEPTH || delta.abs() <= 15.0 * eps {
        // Richardson extrapolation: one order better than plain Simpson.
        return left + right + delta / 15.0;
    }
    let half_eps = 0.5 * eps;
    adapt(f, a, m, fa, flm, fm, left, half_eps, depth + 1)
        + adapt(f, m, b, fm, frm, fb, right, half_eps, depth + 1)
}

/// Integrates `f` over `[a, b]` with adaptive Simpson subdivision.
///
/// The integrand must be finite everywhere on the interval; removable
/// singularities have to be patched by the caller (see
/// [`crate::radiation::slot_pattern`]).
#[must_use]
pub fn integrate<F: Fn(Scalar) -> Scalar>(f: &F, a: Scalar, b: Scalar, tol: Tolerance) -> Scalar {
    if a == b {
        return 0.0;
    }
    let step = (b - a) / INITIAL_PANELS as Scalar;

    // Coarse pass to scale the relative part of the tolerance.
    let mut coarse = 0.0;
    let mut samples = [(0.0, 0.0, 0.0); INITIAL_PANELS];
    for (i, slot) in samples.iter_mut().enumerate() {
        let x0 = a + step * i as Scalar;
        let x1 = x0 + step;
        let xm = 0.5 * (x0 + x1);
        let (f0, fm, f1) = (f(x0), f(xm), f(x1));
        *slot = (f0, fm, f1);
        coarse += simpson(f0, fm, f1, step);
    }
    let eps = (tol.abs + tol.rel * coarse.abs()) / INITIAL_PANELS as Scalar;

    let mut total = 0.0;
    for (i, &(f0, fm, f1)) in samples.iter().enumerate() {
        let x0 = a + step * i as Scalar;
        let x1 = x0 + step;
        let whole = simpson(f0, fm, f1, step);
        total += adapt(f, x0, x1, f0, fm, f1, whole, eps, 0);
    }
    total
}

/// Integrates `f(x, y)` over `[x0, x1] × [y0, y1]` as nested 1-D passes.
///
/// The inner (y) axis gets its own tolerance; it should be at least as tight
/// as the outer one, since inner-integral noise looks like roughness to the
/// outer adaptive pass and inflates its subdivision count.
#[must_use]
pub fn integrate_2d<F: Fn(Scalar, Scalar) -> Scalar>(
    f: &F,
    x_range: (Scalar, Scalar),
    y_range: (Scalar, Scalar),
    tol_x: Tolerance,
    tol_y: Tolerance,
) -> Scalar {
    let inner = |x: Scalar| integrate(&|y| f(x, y), y_range.0, y_range.1, tol_y);
    integrate(&inner, x_range.0, x_range.1, tol_x)
}
