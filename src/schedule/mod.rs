//! Fork-join parallel loops with pluggable scheduling policies.
//!
//! Every parallel call spawns scoped worker threads, hands each one a slice
//! of the iteration space and blocks until all of them have joined. How the
//! slices are handed out is the [`Schedule`]:
//!
//! - `Static`: one contiguous, near-equal range per worker, decided up-front
//! - `Dynamic`: small chunks claimed from a shared queue until it runs dry
//! - `WorkStealing`: delegated to a rayon pool owned by the [`Pool`]
//!
//! Worker count adapts to problem size - tiny loops run inline on the
//! calling thread because spawning isn't worth it.

pub mod dynamic;
pub mod static_chunks;
pub mod work_stealing;

use crate::error::{KernelError, Result};
use log::debug;
use std::fmt;
use std::num::NonZeroUsize;
use std::thread;

/// How an iteration space is partitioned across workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Contiguous equal-sized ranges, one per worker, no reassignment.
    Static,
    /// `chunk`-sized pieces drawn on demand from a shared work queue.
    Dynamic { chunk: usize },
    /// Rayon's work-stealing deque.
    WorkStealing,
}

impl Schedule {
    /// Dynamic scheduling with single-item chunks.
    pub const DYNAMIC: Schedule = Schedule::Dynamic { chunk: 1 };

    fn validate(self) -> Result<Self> {
        match self {
            Schedule::Dynamic { chunk: 0 } => Err(KernelError::ZeroChunk),
            other => Ok(other),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Static => write!(f, "static"),
            Schedule::Dynamic { chunk } => write!(f, "dynamic(chunk={})", chunk),
            Schedule::WorkStealing => write!(f, "work-stealing"),
        }
    }
}

/// A reusable worker configuration.
///
/// Static and dynamic loops spawn scoped threads per call; the rayon pool
/// for work-stealing is started once here and reused.
pub struct Pool {
    threads: usize,
    min_len: usize,
    rayon: rayon::ThreadPool,
}

impl Pool {
    /// Pool with exactly `threads` workers.
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(KernelError::ZeroThreads);
        }

        let rayon = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("parloop-ws-{}", i))
            .build()?;

        debug!("pool ready: {} threads", threads);

        Ok(Self {
            threads,
            min_len: 1,
            rayon,
        })
    }

    /// Pool sized to the machine.
    pub fn with_default_threads() -> Result<Self> {
        Self::new(Self::default_threads())
    }

    /// Available hardware parallelism, or 1 if it can't be queried.
    pub fn default_threads() -> usize {
        thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }

    /// Require at least `min_len` items per worker before adding another.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Workers a loop of `len` items will actually use.
    pub fn workers_for(&self, len: usize) -> usize {
        choose_thread_count(len, self.min_len, self.threads)
    }

    /// `out[i] = f(i)` for every index, in parallel.
    ///
    /// Each slot is written by exactly one worker. Returns the number of
    /// workers that ran.
    pub fn fill<T, F>(&self, out: &mut [T], schedule: Schedule, f: F) -> Result<usize>
    where
        T: Send,
        F: Fn(usize) -> T + Sync,
    {
        let schedule = schedule.validate()?;
        let workers = self.workers_for(out.len());

        debug!(
            "fill: {} items, {} workers, {}",
            out.len(),
            workers,
            schedule
        );

        if schedule == Schedule::WorkStealing {
            work_stealing::fill(&self.rayon, out, self.min_len, &f);
            return Ok(workers);
        }

        if workers == 1 {
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = f(i);
            }
            return Ok(1);
        }

        match schedule {
            Schedule::Dynamic { chunk } => dynamic::fill(out, workers, chunk, &f),
            _ => static_chunks::fill(out, workers, &f),
        }

        Ok(workers)
    }

    /// Fold `map(i)` over `[0, len)` with `combine`.
    ///
    /// Every worker folds a private partial starting from `identity`; the
    /// partials are combined after the join. `combine` must be associative
    /// and `identity` neutral for it, otherwise the result depends on the
    /// partitioning.
    pub fn reduce<T, M, C>(
        &self,
        len: usize,
        schedule: Schedule,
        identity: T,
        map: M,
        combine: C,
    ) -> Result<T>
    where
        T: Copy + Send + Sync,
        M: Fn(usize) -> T + Sync,
        C: Fn(T, T) -> T + Sync,
    {
        let schedule = schedule.validate()?;
        let workers = self.workers_for(len);

        debug!("reduce: {} items, {} workers, {}", len, workers, schedule);

        if schedule == Schedule::WorkStealing {
            return Ok(work_stealing::reduce(
                &self.rayon,
                len,
                self.min_len,
                identity,
                &map,
                &combine,
            ));
        }

        if workers == 1 {
            return Ok((0..len).fold(identity, |acc, i| combine(acc, map(i))));
        }

        let partials = match schedule {
            Schedule::Dynamic { chunk } => {
                dynamic::partials(len, workers, chunk, identity, &map, &combine)
            }
            _ => static_chunks::partials(len, workers, identity, &map, &combine),
        };

        Ok(partials.into_iter().fold(identity, &combine))
    }
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("threads", &self.threads)
            .field("min_len", &self.min_len)
            .finish()
    }
}

fn choose_thread_count(len: usize, min_len: usize, max_threads: usize) -> usize {
    let threads_by_len = len.div_ceil(min_len.max(1)).max(1);

    threads_by_len.min(max_threads).max(1)
}

/// Re-raise a worker panic on the calling thread.
pub(crate) fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}
