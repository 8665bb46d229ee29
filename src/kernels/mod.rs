//! Parallel loop kernels.
//!
//! Each kernel validates its buffers, then runs a single parallel loop on a
//! [`Pool`](crate::schedule::Pool) under the caller's schedule.
//!
//! - `dotprod`: reduction, private partial sums combined at the join
//! - `matadd`: elementwise add over a collapsed `n × m` iteration space

pub mod dotprod;
pub mod matadd;
