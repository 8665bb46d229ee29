//! Static vs dynamic scheduling on a skewed workload.
//!
//! Computes `fib(i)` for every `i` in `[0, n)` with the naive recursive
//! [`fib`]. Cost per item grows exponentially with `i`, so equal-sized
//! static ranges leave the worker holding the top indices running long after
//! the others finish. Dynamic scheduling hands out single items on demand
//! and balances much better, paying a queue pop per item.

pub mod fib;

pub use fib::fib;

use crate::error::{KernelError, Result};
use crate::schedule::{Pool, Schedule};
use crate::timing::timed;
use log::debug;
use std::time::Duration;

/// Problem size used by the `schedule` driver.
pub const FIB_PROBLEM_SIZE: u32 = 45;

/// Longest table [`fib_table`] can build: `fib(92)` is the last value that
/// fits in a `u64`.
pub const FIB_TABLE_MAX: u32 = 93;

/// One timed pass over `fib(0..n)`.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    pub schedule: Schedule,
    pub elapsed: Duration,
    pub workers: usize,
    pub results: Vec<u64>,
}

impl ScheduleRun {
    /// True if every item was computed: `results[i] == fib(i)` for all `i`.
    ///
    /// Always false past [`FIB_TABLE_MAX`], where the reference overflows.
    pub fn is_complete(&self, n: u32) -> bool {
        fib_table(n).is_ok_and(|table| self.results == table)
    }
}

/// Static pass followed by a dynamic pass on the same pool.
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    pub static_run: ScheduleRun,
    pub dynamic_run: ScheduleRun,
}

impl ScheduleReport {
    /// Both passes produced the same values.
    pub fn results_agree(&self) -> bool {
        self.static_run.results == self.dynamic_run.results
    }

    /// Static time over dynamic time. Above 1.0 means dynamic won.
    ///
    /// `None` when either pass took no measurable time.
    pub fn dynamic_speedup(&self) -> Option<f64> {
        if self.static_run.elapsed.is_zero() || self.dynamic_run.elapsed.is_zero() {
            return None;
        }
        Some(self.static_run.elapsed.as_secs_f64() / self.dynamic_run.elapsed.as_secs_f64())
    }
}

/// Compute `fib(i)` for `i in [0, n)` under `schedule` and time it.
pub fn run_schedule(pool: &Pool, schedule: Schedule, n: u32) -> Result<ScheduleRun> {
    let mut results = vec![0u64; n as usize];

    let (workers, elapsed) = timed(|| pool.fill(&mut results, schedule, |i| fib(i as u32)));
    let workers = workers?;

    debug!(
        "{}: fib(0..{}) on {} workers in {:?}",
        schedule, n, workers, elapsed
    );

    Ok(ScheduleRun {
        schedule,
        elapsed,
        workers,
        results,
    })
}

/// Run the static pass, then the dynamic pass with single-item chunks.
pub fn compare(pool: &Pool, n: u32) -> Result<ScheduleReport> {
    compare_with_chunk(pool, n, 1)
}

/// Like [`compare`] with a custom dynamic chunk size.
pub fn compare_with_chunk(pool: &Pool, n: u32, chunk: usize) -> Result<ScheduleReport> {
    let static_run = run_schedule(pool, Schedule::Static, n)?;
    let dynamic_run = run_schedule(pool, Schedule::Dynamic { chunk }, n)?;

    Ok(ScheduleReport {
        static_run,
        dynamic_run,
    })
}

/// `fib(0..n)` computed iteratively, for checking results.
///
/// # Errors
///
/// `FibOverflow` if `n > FIB_TABLE_MAX`.
pub fn fib_table(n: u32) -> Result<Vec<u64>> {
    if n > FIB_TABLE_MAX {
        return Err(KernelError::FibOverflow {
            n,
            max: FIB_TABLE_MAX,
        });
    }

    let len = n as usize;
    let mut table: Vec<u64> = Vec::with_capacity(len);
    for i in 0..len {
        let next = if i < 2 {
            1
        } else {
            table[i - 1] + table[i - 2]
        };
        table.push(next);
    }
    Ok(table)
}
