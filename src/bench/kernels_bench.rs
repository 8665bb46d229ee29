//! Criterion benchmarks for the parloop kernels.
//!
//! Sizes: 4K, 64K, 1M elements for the loops; fib(0..30) for scheduling.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use parloop::kernels::dotprod::ramp_inputs;
use parloop::{Pool, Schedule, dotprod, dotprod_seq, matadd, run_schedule, sum_rows};

const SIZES: &[usize] = &[4096, 65536, 1 << 20];

const SCHEDULES: [Schedule; 3] = [
    Schedule::Static,
    Schedule::Dynamic { chunk: 4096 },
    Schedule::WorkStealing,
];

fn bench_dotprod(c: &mut Criterion) {
    let pool = Pool::with_default_threads().unwrap().with_min_len(4096);
    let mut group = c.benchmark_group("dotprod");

    for &n in SIZES {
        let (x, y) = ramp_inputs(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, _| {
            b.iter(|| dotprod_seq(black_box(&x), black_box(&y)))
        });

        for schedule in SCHEDULES {
            group.bench_with_input(BenchmarkId::new(schedule.to_string(), n), &n, |b, _| {
                b.iter(|| dotprod(&pool, schedule, black_box(&x), black_box(&y)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_matadd(c: &mut Criterion) {
    let pool = Pool::with_default_threads().unwrap().with_min_len(4096);
    let mut group = c.benchmark_group("matadd");

    for &len in SIZES {
        let (n, m) = (len / 256, 256);
        let x: Vec<f64> = (0..len).map(|i| (i % 100) as f64).collect();
        let y: Vec<f64> = (0..len).map(|i| (i % 37) as f64).collect();
        let mut out = vec![0.0; len];
        group.throughput(Throughput::Elements(len as u64));

        for schedule in SCHEDULES {
            group.bench_with_input(BenchmarkId::new(schedule.to_string(), len), &len, |b, _| {
                b.iter(|| {
                    matadd(&pool, schedule, n, m, black_box(&x), black_box(&y), &mut out).unwrap()
                })
            });
        }
    }
    group.finish();
}

fn bench_sum_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_rows");

    for &len in SIZES {
        let (n, m) = (len / 256, 256);
        let matrix: Vec<f64> = (0..len).map(|i| (i % 100) as f64).collect();
        let mut vector = vec![0.0; n];
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| sum_rows(n, m, black_box(&matrix), &mut vector).unwrap())
        });
    }
    group.finish();
}

fn bench_schedule(c: &mut Criterion) {
    let pool = Pool::with_default_threads().unwrap();
    let mut group = c.benchmark_group("fib_schedule");
    group.sample_size(10);

    for schedule in [Schedule::Static, Schedule::DYNAMIC, Schedule::WorkStealing] {
        group.bench_function(schedule.to_string(), |b| {
            b.iter(|| run_schedule(&pool, schedule, black_box(30)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_dotprod,
    bench_matadd,
    bench_sum_rows,
    bench_schedule
);
criterion_main!(benches);
