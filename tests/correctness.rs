use parloop::kernels::dotprod::ramp_inputs;
use parloop::schedbench::{compare_with_chunk, fib_table};
use parloop::schedule::static_chunks::static_ranges;
use parloop::{
    FIB_PROBLEM_SIZE, KernelError, Pool, Schedule, compare, dotprod, dotprod_seq, fib, matadd,
    run_schedule, sum_rows,
};

const SCHEDULES: [Schedule; 5] = [
    Schedule::Static,
    Schedule::DYNAMIC,
    Schedule::Dynamic { chunk: 16 },
    Schedule::Dynamic { chunk: 1000 },
    Schedule::WorkStealing,
];

fn assert_close(expected: f64, actual: f64, name: &str) {
    let scale = expected.abs().max(1.0);
    assert!(
        (expected - actual).abs() / scale < 1e-9,
        "{}: expected {}, got {}",
        name,
        expected,
        actual
    );
}

fn assert_complete(results: &[u64], n: u32, name: &str) {
    assert_eq!(results.len(), n as usize, "{}: length mismatch", name);
    for (i, (got, want)) in results.iter().zip(fib_table(n).unwrap()).enumerate() {
        assert_eq!(*got, want, "{}: wrong fib at index {}", name, i);
    }
}

// ============================================================
// Dot product
// ============================================================

#[test]
fn test_dotprod_known_values() {
    let pool = Pool::new(4).unwrap();

    for schedule in SCHEDULES {
        assert_eq!(dotprod(&pool, schedule, &[], &[]).unwrap(), 0.0);
        assert_eq!(
            dotprod(&pool, schedule, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(),
            32.0
        );
    }
}

#[test]
fn test_dotprod_odd_lengths() {
    let lengths = [1, 2, 3, 7, 63, 64, 65, 1023, 4097];
    let pool = Pool::new(4).unwrap();

    for n in lengths {
        let (x, y) = ramp_inputs(n);
        let expected = dotprod_seq(&x, &y);

        for schedule in SCHEDULES {
            let got = dotprod(&pool, schedule, &x, &y).unwrap();
            assert_close(expected, got, &format!("n={} {}", n, schedule));
        }
    }
}

#[test]
fn test_dotprod_thread_counts() {
    let (x, y) = ramp_inputs(50_000);
    let expected = dotprod_seq(&x, &y);

    for threads in [1, 2, 3, 5, 8] {
        let pool = Pool::new(threads).unwrap();
        let got = dotprod(&pool, Schedule::Static, &x, &y).unwrap();
        assert_close(expected, got, &format!("{} threads", threads));
    }
}

#[test]
fn test_dotprod_ramp_closed_form() {
    // sum 2 i^2 / n^2 for i < n = (n-1)(2n-1) / (3n)
    let n = 10_000;
    let (x, y) = ramp_inputs(n);
    let pool = Pool::new(4).unwrap().with_min_len(1024);

    let n = n as f64;
    let expected = (n - 1.0) * (2.0 * n - 1.0) / (3.0 * n);
    let got = dotprod(&pool, Schedule::Static, &x, &y).unwrap();
    assert_close(expected, got, "ramp");
}

// ============================================================
// Matrix add
// ============================================================

#[test]
fn test_matadd_shapes() {
    let shapes = [(1, 1), (2, 3), (3, 2), (7, 13), (64, 1), (1, 64), (33, 65)];
    let pool = Pool::new(4).unwrap();

    for (n, m) in shapes {
        let x: Vec<f64> = (0..n * m).map(|i| (i % 10) as f64 * 0.1).collect();
        let y: Vec<f64> = (0..n * m).map(|i| (i % 7) as f64 * 0.3).collect();

        for schedule in SCHEDULES {
            let mut out = vec![0.0; n * m];
            matadd(&pool, schedule, n, m, &x, &y, &mut out).unwrap();

            for i in 0..n {
                for j in 0..m {
                    assert_eq!(
                        out[i * m + j],
                        x[i * m + j] + y[i * m + j],
                        "{}x{} {}: mismatch at ({}, {})",
                        n,
                        m,
                        schedule,
                        i,
                        j
                    );
                }
            }
        }
    }
}

#[test]
fn test_matadd_rejects_bad_buffers() {
    let pool = Pool::new(2).unwrap();
    let mut out = vec![0.0; 6];

    let err = matadd(&pool, Schedule::Static, 2, 3, &[0.0; 5], &[0.0; 6], &mut out).unwrap_err();
    assert!(matches!(
        err,
        KernelError::LengthMismatch {
            what: "x",
            expected: 6,
            actual: 5
        }
    ));

    let err = matadd(&pool, Schedule::Static, usize::MAX, 2, &[], &[], &mut out).unwrap_err();
    assert!(matches!(err, KernelError::DimensionOverflow { .. }));
}

// ============================================================
// Row sums
// ============================================================

#[test]
fn test_sum_rows_2x3() {
    let mut vector = vec![0.0; 2];
    sum_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &mut vector).unwrap();
    assert_eq!(vector, vec![6.0, 15.0]);
}

#[test]
fn test_sum_rows_is_deterministic() {
    let (n, m) = (17, 301);
    let matrix: Vec<f64> = (0..n * m).map(|i| (i as f64).sin()).collect();

    let mut first = vec![0.0; n];
    let mut second = vec![0.0; n];
    sum_rows(n, m, &matrix, &mut first).unwrap();
    sum_rows(n, m, &matrix, &mut second).unwrap();

    for i in 0..n {
        assert_eq!(first[i].to_bits(), second[i].to_bits(), "row {}", i);
    }
}

// ============================================================
// Scheduling benchmark
// ============================================================

#[test]
fn test_fib_values() {
    assert_eq!(fib(0), 1);
    assert_eq!(fib(1), 1);
    assert_eq!(fib(5), 8);
    assert_eq!(fib(10), 89);
}

#[test]
fn test_fib_table_reaches_problem_size() {
    let table = fib_table(FIB_PROBLEM_SIZE).unwrap();
    assert_eq!(table.len(), 45);
    assert_eq!(table[44], 1_134_903_170);
}

#[test]
fn test_schedule_report_complete() {
    let n = 27;

    for threads in [1, 2, 4, 7] {
        let pool = Pool::new(threads).unwrap();
        let report = compare(&pool, n).unwrap();

        assert_complete(&report.static_run.results, n, "static");
        assert_complete(&report.dynamic_run.results, n, "dynamic");
        assert!(report.results_agree());
        assert!(report.static_run.workers <= threads);
    }
}

#[test]
fn test_schedule_chunk_sizes() {
    let pool = Pool::new(4).unwrap();

    for chunk in [1, 2, 3, 10, 100] {
        let report = compare_with_chunk(&pool, 24, chunk).unwrap();
        assert_complete(&report.dynamic_run.results, 24, &format!("chunk {}", chunk));
    }

    let err = compare_with_chunk(&pool, 24, 0).unwrap_err();
    assert!(matches!(err, KernelError::ZeroChunk));
}

#[test]
fn test_work_stealing_run() {
    let pool = Pool::new(4).unwrap();
    let run = run_schedule(&pool, Schedule::WorkStealing, 26).unwrap();
    assert_complete(&run.results, 26, "work-stealing");
}

#[test]
fn test_static_ranges_cover_fib_space() {
    let ranges = static_ranges(FIB_PROBLEM_SIZE as usize, 8);
    assert_eq!(ranges.len(), 8);
    assert_eq!(ranges[0].start, 0);
    assert_eq!(ranges[7].end, 45);
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}
