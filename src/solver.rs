//! Scalar root-finder for the implicit log-price equation.
//!
//! A model trained with a log-of-target input cannot be evaluated
//! directly: the output appears on both sides of
//! `y = base + coef_log * ln(y)`. Prediction collapses the linear part
//! into `base` and solves the remaining one-dimensional equation here.

/// Maximum Newton iterations. Bounds worst-case latency; on exhaustion
/// the last iterate is returned as a best-effort estimate.
pub const MAX_ITERATIONS: usize = 50;

/// Step-size threshold accepted as converged.
pub const STEP_TOLERANCE: f64 = 1e-6;

/// Derivative magnitude below which the iteration stops rather than take
/// a numerically unstable step.
pub const DERIVATIVE_FLOOR: f64 = 1e-9;

/// Solve `y - coef_log * ln(y) - base = 0` for `y > 0`.
///
/// Newton–Raphson on `f(y) = y - coef_log*ln(y) - base` with derivative
/// `f'(y) = 1 - coef_log/y`, started at `max(base, 1.0)` to stay inside
/// the domain of `ln`. Guard rails, in evaluation order per step:
///
/// - `|f'(y)| < DERIVATIVE_FLOOR` stops immediately with the current `y`;
/// - a step landing at `y_new <= 0` halves `y` instead of leaving the
///   domain;
/// - `|y_new - y| < STEP_TOLERANCE` accepts `y_new` as converged.
///
/// This function is total: it always returns a positive value, possibly a
/// best-effort estimate when the iteration cap is exhausted. Callers
/// accept that tradeoff in exchange for a hard latency bound.
pub fn solve_price(base: f64, coef_log: f64) -> f64 {
    let mut y = base.max(1.0);

    for _ in 0..MAX_ITERATIONS {
        let f = y - coef_log * y.ln() - base;
        let fp = 1.0 - coef_log / y;

        if fp.abs() < DERIVATIVE_FLOOR {
            break;
        }

        let mut y_new = y - f / fp;
        if y_new <= 0.0 {
            y_new = y * 0.5;
        }

        if (y_new - y).abs() < STEP_TOLERANCE {
            y = y_new;
            break;
        }

        y = y_new;
    }

    y
}
