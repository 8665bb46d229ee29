//! Static scheduling: one contiguous range per worker.

use super::join;
use log::trace;
use std::ops::Range;
use std::thread;

/// Split `[0, len)` into `workers` contiguous ranges.
///
/// Sizes differ by at most one; the first `len % workers` ranges take the
/// extra item. Ranges are empty when there are more workers than items.
pub fn static_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let base = len / workers;
    let extra = len % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for w in 0..workers {
        let size = base + usize::from(w < extra);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

pub(crate) fn fill<T, F>(out: &mut [T], workers: usize, f: &F)
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let ranges = static_ranges(out.len(), workers);

    thread::scope(|s| {
        let mut rest = out;
        for (tid, range) in ranges.into_iter().enumerate() {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            rest = tail;

            s.spawn(move || {
                let count = range.len();
                for (slot, i) in chunk.iter_mut().zip(range) {
                    *slot = f(i);
                }
                trace!("static worker {}: {} items", tid, count);
            });
        }
    });
}

pub(crate) fn partials<T, M, C>(
    len: usize,
    workers: usize,
    identity: T,
    map: &M,
    combine: &C,
) -> Vec<T>
where
    T: Copy + Send,
    M: Fn(usize) -> T + Sync,
    C: Fn(T, T) -> T + Sync,
{
    let ranges = static_ranges(len, workers);

    thread::scope(|s| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| s.spawn(move || range.fold(identity, |acc, i| combine(acc, map(i)))))
            .collect();

        handles.into_iter().map(join).collect()
    })
}
