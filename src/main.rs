//! Benchmark driver for the parloop kernels.

use clap::{Parser, Subcommand};
use log::{info, warn};
use parloop::kernels::dotprod::ramp_inputs;
use parloop::schedbench::compare_with_chunk;
use parloop::timing::timed;
use parloop::{FIB_PROBLEM_SIZE, Pool, Schedule, dotprod, run_schedule};

#[derive(Parser)]
#[command(name = "parloop")]
#[command(about = "Loop-level parallelism micro-benchmarks")]
#[command(version)]
struct Cli {
    /// Worker threads (defaults to available parallelism)
    #[arg(long, global = true, env = "PARLOOP_THREADS")]
    threads: Option<usize>,

    /// Minimum loop items per worker before another worker is added
    #[arg(long, global = true, default_value = "1")]
    min_len: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time a parallel dot product of two length-N ramps
    Dotprod {
        /// Vector length
        n: usize,
    },

    /// Compare static and dynamic scheduling on naive Fibonacci
    Schedule {
        /// Compute fib(i) for i in [0, size)
        #[arg(long, default_value_t = FIB_PROBLEM_SIZE)]
        size: u32,

        /// Items per chunk for dynamic scheduling
        #[arg(long, default_value = "1")]
        chunk: usize,

        /// Also time rayon's work-stealing scheduler
        #[arg(long)]
        work_stealing: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = build_pool(cli.threads, cli.min_len).and_then(|pool| match cli.command {
        Commands::Dotprod { n } => cmd_dotprod(&pool, n),
        Commands::Schedule {
            size,
            chunk,
            work_stealing,
        } => cmd_schedule(&pool, size, chunk, work_stealing),
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn build_pool(threads: Option<usize>, min_len: usize) -> parloop::Result<Pool> {
    let threads = threads.unwrap_or_else(Pool::default_threads);
    let pool = Pool::new(threads)?.with_min_len(min_len);
    info!("{} threads, min_len {}", pool.threads(), pool.min_len());
    Ok(pool)
}

fn cmd_dotprod(pool: &Pool, n: usize) -> parloop::Result<()> {
    let (x, y) = ramp_inputs(n);

    let (result, elapsed) = timed(|| dotprod(pool, Schedule::Static, &x, &y));
    let result = result?;

    println!("Result: {:.6}", result);
    println!("Time (s): {:.6}", elapsed.as_secs_f64());
    Ok(())
}

fn cmd_schedule(pool: &Pool, size: u32, chunk: usize, work_stealing: bool) -> parloop::Result<()> {
    let report = compare_with_chunk(pool, size, chunk)?;

    println!(
        "Static scheduling:  {:.6}s",
        report.static_run.elapsed.as_secs_f64()
    );
    println!(
        "Dynamic scheduling: {:.6}s",
        report.dynamic_run.elapsed.as_secs_f64()
    );

    if work_stealing {
        let run = run_schedule(pool, Schedule::WorkStealing, size)?;
        println!("Work-stealing:      {:.6}s", run.elapsed.as_secs_f64());
    }

    if !report.results_agree() {
        warn!("static and dynamic passes produced different results");
    }
    if let Some(speedup) = report.dynamic_speedup() {
        info!("dynamic speedup over static: {:.2}x", speedup);
    }

    Ok(())
}
