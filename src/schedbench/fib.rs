/// Naive recursive Fibonacci with `fib(0) = fib(1) = 1`.
///
/// Exponential time on purpose: cost grows ~1.6× per index, which makes
/// `fib(0..n)` a heavily skewed workload for loop scheduling.
pub fn fib(n: u32) -> u64 {
    if n <= 1 {
        1
    } else {
        fib(n - 1) + fib(n - 2)
    }
}
