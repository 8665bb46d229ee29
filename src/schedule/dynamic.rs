//! Dynamic scheduling: workers claim small chunks until none remain.
//!
//! Read-only loops share an atomic cursor. Loops that write an output
//! buffer take disjoint `&mut` chunks from a shared [`ChunkQueue`], so every
//! slot has exactly one owner.

use super::join;
use log::trace;
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

/// Hands out `[start, end)` ranges of `chunk` items in index order.
pub struct ChunkCursor {
    next: AtomicUsize,
    len: usize,
    chunk: usize,
}

impl ChunkCursor {
    pub fn new(len: usize, chunk: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            len,
            chunk: chunk.max(1),
        }
    }

    /// Claim the next unclaimed range, or `None` once the space is exhausted.
    pub fn claim(&self) -> Option<(usize, usize)> {
        let start = self.next.fetch_add(self.chunk, Ordering::Relaxed);
        if start >= self.len {
            return None;
        }
        Some((start, (start + self.chunk).min(self.len)))
    }
}

/// Hands out disjoint `&mut` chunks of a buffer in index order.
///
/// Chunks are split off only when claimed, so the queue itself is a fixed
/// size however long the buffer is.
pub struct ChunkQueue<'a, T> {
    chunks: Mutex<Enumerate<ChunksMut<'a, T>>>,
    chunk: usize,
}

impl<'a, T> ChunkQueue<'a, T> {
    pub fn new(out: &'a mut [T], chunk: usize) -> Self {
        let chunk = chunk.max(1);
        Self {
            chunks: Mutex::new(out.chunks_mut(chunk).enumerate()),
            chunk,
        }
    }

    /// Claim the next chunk with the index of its first slot.
    pub fn claim(&self) -> Option<(usize, &'a mut [T])> {
        // The lock only guards `next()`, which can't panic mid-update.
        let next = self
            .chunks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next();
        next.map(|(idx, piece)| (idx * self.chunk, piece))
    }
}

pub(crate) fn fill<T, F>(out: &mut [T], workers: usize, chunk: usize, f: &F)
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let queue = ChunkQueue::new(out, chunk);

    let queue = &queue;
    thread::scope(|s| {
        for tid in 0..workers {
            s.spawn(move || {
                let mut claimed = 0usize;
                while let Some((start, piece)) = queue.claim() {
                    for (k, slot) in piece.iter_mut().enumerate() {
                        *slot = f(start + k);
                    }
                    claimed += 1;
                }
                trace!("dynamic worker {}: {} chunks", tid, claimed);
            });
        }
    });
}

pub(crate) fn partials<T, M, C>(
    len: usize,
    workers: usize,
    chunk: usize,
    identity: T,
    map: &M,
    combine: &C,
) -> Vec<T>
where
    T: Copy + Send,
    M: Fn(usize) -> T + Sync,
    C: Fn(T, T) -> T + Sync,
{
    let cursor = ChunkCursor::new(len, chunk);
    let cursor = &cursor;

    thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|tid| {
                s.spawn(move || {
                    let mut acc = identity;
                    let mut claimed = 0usize;
                    while let Some((start, end)) = cursor.claim() {
                        for i in start..end {
                            acc = combine(acc, map(i));
                        }
                        claimed += 1;
                    }
                    trace!("dynamic worker {}: {} chunks", tid, claimed);
                    acc
                })
            })
            .collect();

        handles.into_iter().map(join).collect()
    })
}
