//! Sequential matrix routines.
//!
//! These stay single-threaded on purpose and serve as serial baselines
//! for the parallel kernels.

pub mod sum_rows;
