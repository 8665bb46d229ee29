//! Parallel dot product.

use crate::error::{Result, check_len};
use crate::schedule::{Pool, Schedule};

/// Dot product of `x` and `y` as a parallel reduction.
///
/// Each worker sums `x[i] * y[i]` over its own indices into a private
/// partial; partials are added after the join. Floating-point addition
/// isn't associative, so the last bits can vary with worker count and
/// schedule. Compare against [`dotprod_seq`] with a relative tolerance.
///
/// # Errors
///
/// `LengthMismatch` if `x` and `y` differ in length.
pub fn dotprod(pool: &Pool, schedule: Schedule, x: &[f64], y: &[f64]) -> Result<f64> {
    check_len("y", x.len(), y.len())?;

    pool.reduce(x.len(), schedule, 0.0, |i| x[i] * y[i], |a, b| a + b)
}

/// Sequential dot product, summed left to right.
///
/// Correctness baseline for [`dotprod`].
pub fn dotprod_seq(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

/// Inputs used by the `dotprod` driver: `x[i] = i/n`, `y[i] = 2i/n`.
pub fn ramp_inputs(n: usize) -> (Vec<f64>, Vec<f64>) {
    let scale = n as f64;
    let x = (0..n).map(|i| i as f64 / scale).collect();
    let y = (0..n).map(|i| i as f64 * 2.0 / scale).collect();
    (x, y)
}
