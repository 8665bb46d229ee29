//! Loop-level data parallelism in Rust, measured.
//!
//! A handful of tiny numeric kernels, each one a single parallel loop, used
//! to see what fork-join parallelism and scheduling policy actually buy you:
//! a dot product (parallel reduction), matrix addition (collapsed 2D loop),
//! a static vs dynamic scheduling shoot-out on naive Fibonacci, and a
//! sequential row-sum as the serial baseline.
//!
//! ## Usage
//!
//! ```
//! use parloop::{Pool, Schedule, dotprod};
//!
//! let pool = Pool::new(4).unwrap();
//! let x = vec![1.0, 2.0, 3.0];
//! let y = vec![4.0, 5.0, 6.0];
//!
//! assert_eq!(dotprod(&pool, Schedule::Static, &x, &y).unwrap(), 32.0);
//! ```
//!
//! Scheduling policy is picked per call:
//!
//! ```
//! use parloop::{Pool, Schedule, matadd};
//!
//! let pool = Pool::new(4).unwrap();
//! let x = vec![1.0f64; 64 * 32];
//! let y = vec![2.0f64; 64 * 32];
//! let mut out = vec![0.0f64; 64 * 32];
//!
//! matadd(&pool, Schedule::Dynamic { chunk: 256 }, 64, 32, &x, &y, &mut out).unwrap();
//! assert!(out.iter().all(|&v| v == 3.0));
//! ```
//!
//! ## What's inside
//!
//! - Static, dynamic and work-stealing schedules on one `Pool`
//! - Private-partial reductions, no shared accumulator
//! - Adaptive worker count (small loops run inline)
//! - Fibonacci load-imbalance benchmark

pub mod error;
pub mod kernels;
pub mod matrix;
pub mod schedbench;
pub mod schedule;
pub mod timing;

pub use error::{KernelError, Result};
pub use kernels::dotprod::{dotprod, dotprod_seq};
pub use kernels::matadd::matadd;
pub use matrix::sum_rows::sum_rows;
pub use schedbench::{
    FIB_PROBLEM_SIZE, FIB_TABLE_MAX, ScheduleReport, ScheduleRun, compare, fib, run_schedule,
};
pub use schedule::{Pool, Schedule};
