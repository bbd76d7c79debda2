//! Tick-time benchmark for each neighbor-counting algorithm

use std::time::Instant;

use decay_life::{Algorithm, Stepper};
use log::info;

const SEED: u64 = 5;

/// Average milliseconds per tick over `iterations` ticks
fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> Option<f64> {
    let mut stepper = Stepper::with_seed(size, size, SEED).ok()?;
    stepper.set_algorithm(algorithm);

    // One warm-up tick so rayon's pool is spun up before timing
    stepper.tick();

    let start = Instant::now();
    for _ in 0..iterations {
        stepper.tick();
    }
    Some(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() {
    env_logger::init();
    info!("rayon pool: {} threads", rayon::current_num_threads());

    println!("=== Decay Life Tick Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000, 4000];
    let iterations = 20;
    let algorithms = Algorithm::all();

    print!("{:>8}", "Size");
    for algorithm in &algorithms {
        print!(" {:>12}", algorithm.name());
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        let times: Vec<f64> = algorithms
            .iter()
            .map(|&a| benchmark(a, size, iterations).unwrap_or(f64::NAN))
            .collect();

        print!("{:>8}", format!("{size}x{size}"));
        for ms in &times {
            print!(" {:>10.2}ms", ms);
        }
        let best = times.iter().copied().fold(f64::INFINITY, f64::min);
        println!(" {:>9.1}x", times[0] / best);
    }

    println!("\nSpeedup = shifted / fastest");
}
