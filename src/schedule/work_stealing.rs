//! Work-stealing scheduling on a rayon pool.

use rayon::ThreadPool;
use rayon::prelude::*;

pub(crate) fn fill<T, F>(pool: &ThreadPool, out: &mut [T], min_len: usize, f: &F)
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    pool.install(|| {
        out.par_iter_mut()
            .with_min_len(min_len)
            .enumerate()
            .for_each(|(i, slot)| *slot = f(i));
    });
}

pub(crate) fn reduce<T, M, C>(
    pool: &ThreadPool,
    len: usize,
    min_len: usize,
    identity: T,
    map: &M,
    combine: &C,
) -> T
where
    T: Copy + Send + Sync,
    M: Fn(usize) -> T + Sync,
    C: Fn(T, T) -> T + Sync,
{
    pool.install(|| {
        (0..len)
            .into_par_iter()
            .with_min_len(min_len)
            .fold(|| identity, |acc, i| combine(acc, map(i)))
            .reduce(|| identity, combine)
    })
}
