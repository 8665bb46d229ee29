//! Error type shared by every kernel.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, KernelError>;

/// Everything a kernel or the scheduling layer can reject.
#[derive(Error, Debug)]
pub enum KernelError {
    /// A slice does not have the length its dimensions require.
    #[error("{what}: expected {expected} elements, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// `rows * cols` does not fit in `usize`.
    #[error("matrix dimensions {rows}x{cols} overflow usize")]
    DimensionOverflow { rows: usize, cols: usize },

    /// The iterative Fibonacci table would overflow `u64`.
    #[error("fib table of {n} entries overflows u64 (max {max})")]
    FibOverflow { n: u32, max: u32 },

    /// A pool needs at least one worker.
    #[error("worker pool needs at least one thread")]
    ZeroThreads,

    /// Dynamic scheduling with an empty chunk would never make progress.
    #[error("dynamic schedule chunk size must be at least 1")]
    ZeroChunk,

    /// The rayon pool behind work-stealing could not be started.
    #[error("failed to build work-stealing pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

/// Check that `actual` matches `expected`, naming the offending buffer.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(KernelError::LengthMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Element count of an `rows x cols` flattened matrix.
pub(crate) fn grid_len(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(KernelError::DimensionOverflow { rows, cols })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len() {
        assert!(check_len("x", 3, 3).is_ok());

        let err = check_len("y", 3, 2).unwrap_err();
        assert_eq!(err.to_string(), "y: expected 3 elements, got 2");
    }

    #[test]
    fn test_grid_len_overflow() {
        assert_eq!(grid_len(2, 3).unwrap(), 6);
        assert!(matches!(
            grid_len(usize::MAX, 2),
            Err(KernelError::DimensionOverflow { rows: usize::MAX, cols: 2 })
        ));
    }
}
