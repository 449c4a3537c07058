use kurbo::{CubicBez, ParamCurve, ParamCurveDeriv, Point};

use crate::foundation::error::{SpinError, SpinResult};

/// Acceptable error on the time axis when inverting `x(t)`.
pub const PROGRESS_TOLERANCE: f64 = 1e-6;
/// Newton steps tried before falling back to bisection.
pub const MAX_NEWTON_ITERATIONS: usize = 8;
/// Bisection steps before giving up and using linear progress.
pub const MAX_BISECTION_ITERATIONS: usize = 64;

const MIN_SLOPE: f64 = 1e-9;

/// Interior control points of a cubic Bézier easing curve anchored at `(0,0)` and `(1,1)`.
///
/// The x axis is the elapsed-time fraction, the y axis the eased progress fraction, the same
/// convention as CSS `cubic-bezier(x1, y1, x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveParameters {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self::LINEAR
    }
}

impl CurveParameters {
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Every coordinate must be finite and inside `[0, 1]`.
    pub fn validate(&self) -> SpinResult<()> {
        for (name, v) in [
            ("x1", self.x1),
            ("y1", self.y1),
            ("x2", self.x2),
            ("y2", self.y2),
        ] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(SpinError::invalid_configuration(format!(
                    "curve control point {name}={v} must be within [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Copy with every coordinate clamped into `[0, 1]`. NaN becomes 0.
    pub fn clamped(self) -> Self {
        fn unit(v: f64) -> f64 {
            if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
        }
        Self::new(unit(self.x1), unit(self.y1), unit(self.x2), unit(self.y2))
    }

    /// Both control points sit on the diagonal, so `y == x` everywhere.
    pub fn is_identity(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// Curves whose time axis cannot be inverted meaningfully.
    pub fn is_degenerate(&self) -> bool {
        let non_finite = ![self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite());
        non_finite || (self.x1 == 0.0 && self.x2 == 0.0) || (self.x1 == 1.0 && self.x2 == 1.0)
    }

    fn to_cubic(self) -> CubicBez {
        CubicBez::new(
            (0.0, 0.0),
            (self.x1, self.y1),
            (self.x2, self.y2),
            (1.0, 1.0),
        )
    }

    /// Point on the curve at parameter `t` (clamped to `[0, 1]`), both axes blended
    /// independently.
    pub fn evaluate(&self, t: f64) -> Point {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.to_cubic().eval(t)
    }

    /// Eased progress for an elapsed-time fraction.
    ///
    /// Finds `t*` with `x(t*) == time_fraction` (Newton, then bisection) and returns `y(t*)`.
    /// The endpoints map exactly: `0 -> 0` and `1 -> 1`. Degenerate curves and failed
    /// inversions fall back to linear progress. Overshoot from control points dragged past the
    /// diagonal is passed through untouched.
    pub fn progress_at(&self, time_fraction: f64) -> f64 {
        let x = if time_fraction.is_nan() {
            0.0
        } else {
            time_fraction.clamp(0.0, 1.0)
        };
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        if self.is_identity() || self.is_degenerate() {
            return x;
        }

        let cubic = self.to_cubic();
        match solve_t_for_x(&cubic, x) {
            Some(t) => cubic.eval(t).y,
            None => {
                tracing::warn!(
                    curve = ?self,
                    x,
                    "curve inversion did not converge; using linear progress"
                );
                x
            }
        }
    }

    /// `samples + 1` evenly spaced points along the curve, for drawing a preview graph.
    pub fn sample_points(&self, samples: usize) -> Vec<Point> {
        let samples = samples.max(1);
        let cubic = self.to_cubic();
        (0..=samples)
            .map(|i| cubic.eval(i as f64 / samples as f64))
            .collect()
    }
}

fn solve_t_for_x(cubic: &CubicBez, x: f64) -> Option<f64> {
    let deriv = cubic.deriv();

    let mut t = x;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let err = cubic.eval(t).x - x;
        if err.abs() < PROGRESS_TOLERANCE {
            return Some(t);
        }
        let slope = deriv.eval(t).x;
        if slope.abs() < MIN_SLOPE {
            break;
        }
        t -= err / slope;
        if !(0.0..=1.0).contains(&t) {
            break;
        }
    }

    // x(t) is non-decreasing for control points inside the unit square.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut t = x;
    for _ in 0..MAX_BISECTION_ITERATIONS {
        let err = cubic.eval(t).x - x;
        if err.abs() < PROGRESS_TOLERANCE {
            return Some(t);
        }
        if err < 0.0 {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/curve/bezier.rs"]
mod tests;
