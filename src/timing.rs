//! Wall-clock timing.

use std::time::{Duration, Instant};

/// Run `f` once and return its value with the elapsed time.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_value() {
        let (v, elapsed) = timed(|| 6 * 7);
        assert_eq!(v, 42);
        assert!(elapsed < Duration::from_secs(1));
    }
}
