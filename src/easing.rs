//! Cubic Bézier easing: the CSS `cubic-bezier()` timing function.
//!
//! A curve is defined by two control points `(x1, y1)` and `(x2, y2)`; the
//! end points are fixed at `(0, 0)` and `(1, 1)`. Evaluating the curve at an
//! input fraction `x` means finding the curve parameter `t` with
//! `bx(t) == x` and returning `by(t)`.
//!
//! ## Solver
//!
//! `bx(t)` has no closed-form inverse, so [`BezierEasing`] inverts it
//! numerically:
//! 1. An 11-entry sample table of `bx` gives the interval containing `x`
//!    and a linear initial guess for `t`
//! 2. Newton-Raphson refines the guess when the slope is usable
//! 3. Bisection takes over in flat regions where Newton would diverge
//!
//! Bisection stops once `bx(t)` is within `1e-7` of `x` or after 10
//! halvings of the 0.1-wide sample interval, whichever comes first, so in
//! the worst case `t` is only known to within `0.1 / 2^10`. Bisection only
//! runs where the slope at the initial guess is below `0.001`, so the
//! remaining error in `x` stays around `1e-6` or less. Newton steps on a
//! usable slope converge well past that.

use serde::{Deserialize, Serialize};

const NEWTON_ITERATIONS: usize = 4;
const NEWTON_MIN_SLOPE: f64 = 0.001;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 10;

const SPLINE_TABLE_SIZE: usize = 11;
const SAMPLE_STEP_SIZE: f64 = 1.0 / (SPLINE_TABLE_SIZE as f64 - 1.0);

// ============================================================================
// Curve definition
// ============================================================================

/// Control points `[x1, y1, x2, y2]` of a cubic Bézier timing function.
///
/// Values are conventionally in `0..=1`, but nothing is enforced: out of
/// range points simply produce an unusual curve.
///
/// Serializes as a four element array, matching how curves are written in
/// JSON configuration (`"offsetEasing": [0.7, 0.1, 0.9, 0.3]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct EasingCurve {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl EasingCurve {
    /// The identity curve, `cubic-bezier(0, 0, 1, 1)`.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// True when the curve maps every input to itself.
    pub fn is_linear(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// Build a reusable evaluator with a precomputed sample table.
    pub fn solver(&self) -> BezierEasing {
        BezierEasing::new(*self)
    }

    /// Evaluate the curve once at `x`.
    ///
    /// Prefer [`EasingCurve::solver`] when sampling the same curve
    /// repeatedly.
    pub fn ease(&self, x: f64) -> f64 {
        self.solver().ease(x)
    }
}

impl From<[f64; 4]> for EasingCurve {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<EasingCurve> for [f64; 4] {
    fn from(curve: EasingCurve) -> Self {
        [curve.x1, curve.y1, curve.x2, curve.y2]
    }
}

// ============================================================================
// Polynomial helpers
// ============================================================================

/// Coefficients of one axis of the curve in Horner form: `((a t + b) t + c) t`.
#[derive(Debug, Clone, Copy)]
struct AxisPolynomial {
    a: f64,
    b: f64,
    c: f64,
}

impl AxisPolynomial {
    fn new(p1: f64, p2: f64) -> Self {
        Self {
            a: 1.0 - 3.0 * p2 + 3.0 * p1,
            b: 3.0 * p2 - 6.0 * p1,
            c: 3.0 * p1,
        }
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    #[inline]
    fn slope(&self, t: f64) -> f64 {
        3.0 * self.a * t * t + 2.0 * self.b * t + self.c
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Evaluator for a single [`EasingCurve`].
///
/// Construction samples the x polynomial once; evaluation is allocation
/// free and the evaluator is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct BezierEasing {
    curve: EasingCurve,
    x: AxisPolynomial,
    y: AxisPolynomial,
    samples: [f64; SPLINE_TABLE_SIZE],
}

impl BezierEasing {
    pub fn new(curve: EasingCurve) -> Self {
        let x = AxisPolynomial::new(curve.x1, curve.x2);
        let y = AxisPolynomial::new(curve.y1, curve.y2);

        let mut samples = [0.0; SPLINE_TABLE_SIZE];
        if !curve.is_linear() {
            for (i, sample) in samples.iter_mut().enumerate() {
                *sample = x.at(i as f64 * SAMPLE_STEP_SIZE);
            }
        }

        Self { curve, x, y, samples }
    }

    pub fn curve(&self) -> EasingCurve {
        self.curve
    }

    /// Map an input fraction to its eased output.
    ///
    /// # Arguments
    /// * `x` - Input progress, normally `0.0..=1.0`
    ///
    /// # Returns
    /// `by(t)` for the `t` solving `bx(t) == x`. The end points are exact:
    /// `ease(0.0) == 0.0` and `ease(1.0) == 1.0`.
    pub fn ease(&self, x: f64) -> f64 {
        if self.curve.is_linear() {
            return x;
        }
        if x == 0.0 || x == 1.0 {
            return x;
        }
        self.y.at(self.t_for_x(x))
    }

    fn t_for_x(&self, x: f64) -> f64 {
        // Locate the sample interval holding x
        let last = SPLINE_TABLE_SIZE - 1;
        let mut interval_start = 0.0;
        let mut current = 1;
        while current != last && self.samples[current] <= x {
            interval_start += SAMPLE_STEP_SIZE;
            current += 1;
        }
        current -= 1;

        let span = self.samples[current + 1] - self.samples[current];
        let dist = (x - self.samples[current]) / span;
        let guess = interval_start + dist * SAMPLE_STEP_SIZE;

        let initial_slope = self.x.slope(guess);
        if initial_slope >= NEWTON_MIN_SLOPE {
            self.newton_raphson(x, guess)
        } else if initial_slope == 0.0 {
            guess
        } else {
            self.bisect(x, interval_start, interval_start + SAMPLE_STEP_SIZE)
        }
    }

    fn newton_raphson(&self, x: f64, mut t: f64) -> f64 {
        for _ in 0..NEWTON_ITERATIONS {
            let slope = self.x.slope(t);
            if slope == 0.0 {
                return t;
            }
            t -= (self.x.at(t) - x) / slope;
        }
        t
    }

    fn bisect(&self, x: f64, mut lo: f64, mut hi: f64) -> f64 {
        let mut t = lo;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            t = lo + (hi - lo) / 2.0;
            let err = self.x.at(t) - x;
            if err > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            if err.abs() <= SUBDIVISION_PRECISION {
                break;
            }
        }
        t
    }
}

impl From<EasingCurve> for BezierEasing {
    fn from(curve: EasingCurve) -> Self {
        Self::new(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EASE: EasingCurve = EasingCurve::new(0.25, 0.1, 0.25, 1.0);

    #[test]
    fn test_linear_is_identity() {
        let solver = EasingCurve::LINEAR.solver();
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            assert_eq!(solver.ease(x), x);
        }
    }

    #[test]
    fn test_end_points_are_exact() {
        let solver = EasingCurve::new(0.7, 0.1, 0.9, 0.3).solver();
        assert_eq!(solver.ease(0.0), 0.0);
        assert_eq!(solver.ease(1.0), 1.0);
    }

    #[test]
    fn test_css_ease_midpoint() {
        // cubic-bezier(0.25, 0.1, 0.25, 1) at 0.5 is ~0.8024 in browsers
        let y = EASE.ease(0.5);
        assert!((y - 0.8024).abs() < 1e-3, "got {y}");
    }

    #[test]
    fn test_symmetric_curve_midpoint() {
        // ease-in-out is point symmetric around (0.5, 0.5)
        let y = EasingCurve::new(0.42, 0.0, 0.58, 1.0).ease(0.5);
        assert!((y - 0.5).abs() < 1e-6, "got {y}");
    }

    #[test]
    fn test_flat_start_uses_bisection() {
        // x1 = x2 = 0 makes bx(t) = t^3, whose slope vanishes near 0
        let curve = EasingCurve::new(0.0, 0.0, 0.0, 1.0);
        let solver = curve.solver();
        let x = 0.0001;
        let t = solver.t_for_x(x);
        assert!((solver.x.at(t) - x).abs() < 1e-5, "t = {t}");
    }

    #[test]
    fn test_bisection_is_bounded_by_halvings() {
        // bx(t) = t^3 here, so the exact parameter is the cube root
        let solver = EasingCurve::new(0.0, 0.0, 0.0, 1.0).solver();
        let max_error = SAMPLE_STEP_SIZE / (1u32 << SUBDIVISION_MAX_ITERATIONS) as f64;
        for x in [0.00005, 0.0001, 0.00015] {
            let t = solver.t_for_x(x);
            assert!((t - x.cbrt()).abs() <= max_error, "x = {x}, t = {t}");
            assert!((solver.x.at(t) - x).abs() < 1e-6, "x = {x}, t = {t}");
        }
    }

    #[test]
    fn test_serde_as_array() {
        let curve: EasingCurve = serde_json::from_str("[0.1, 0.5, 0.9, 0.5]").unwrap();
        assert_eq!(curve, EasingCurve::new(0.1, 0.5, 0.9, 0.5));
        assert_eq!(serde_json::to_string(&curve).unwrap(), "[0.1,0.5,0.9,0.5]");
    }

    proptest! {
        #[test]
        fn prop_solved_t_reproduces_x(
            x1 in 0.05f64..=0.95,
            y1 in 0.0f64..=1.0,
            x2 in 0.05f64..=0.95,
            y2 in 0.0f64..=1.0,
            x in 0.01f64..0.99,
        ) {
            let solver = EasingCurve::new(x1, y1, x2, y2).solver();
            prop_assume!(!solver.curve().is_linear());
            let t = solver.t_for_x(x);
            prop_assert!((solver.x.at(t) - x).abs() < 1e-9, "t = {}", t);
        }

        #[test]
        fn prop_monotonic_curve_stays_monotonic(a in 0.0f64..0.98, step in 0.01f64..0.02) {
            let solver = EasingCurve::new(0.7, 0.1, 0.9, 0.3).solver();
            let b = a + step;
            prop_assert!(solver.ease(b) >= solver.ease(a) - 1e-9);
        }
    }
}
