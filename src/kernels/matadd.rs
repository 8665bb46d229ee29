//! Parallel elementwise matrix addition.

use crate::error::{Result, check_len, grid_len};
use crate::schedule::{Pool, Schedule};

/// `out = x + y` for `n x m` row-major matrices.
///
/// Row and column loops are collapsed into a single iteration space of
/// `n * m` items, so the schedule partitions both dimensions jointly.
/// Element `(i, j)` lives at `i * m + j`. Each output slot is written by
/// one worker and the result is exact.
///
/// # Arguments
///
/// * `n` - Rows
/// * `m` - Columns (row stride)
/// * `x`, `y` - Inputs (n × m), row-major
/// * `out` - Output (n × m), row-major, overwritten
///
/// # Errors
///
/// `LengthMismatch` if any buffer isn't `n * m` long, `DimensionOverflow`
/// if `n * m` doesn't fit in `usize`.
pub fn matadd(
    pool: &Pool,
    schedule: Schedule,
    n: usize,
    m: usize,
    x: &[f64],
    y: &[f64],
    out: &mut [f64],
) -> Result<()> {
    let len = grid_len(n, m)?;
    check_len("x", len, x.len())?;
    check_len("y", len, y.len())?;
    check_len("out", len, out.len())?;

    pool.fill(out, schedule, |k| x[k] + y[k])?;
    Ok(())
}
