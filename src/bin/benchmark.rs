//! Timing of serial vs rayon generation steps across grid sizes

use std::time::Instant;

use neon_life::domain::{GridBuffer, PatternId, seed, step, step_parallel};
use rand::{SeedableRng, rngs::SmallRng};

fn random_grid(size: usize) -> GridBuffer {
    seed(PatternId::Random, size, &mut SmallRng::seed_from_u64(size as u64))
}

fn benchmark(size: usize, iterations: u32, stepper: fn(&GridBuffer) -> GridBuffer) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = stepper(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Neon Life Step Benchmark ===\n");

    let sizes = [30, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, step);
        let parallel_ms = benchmark(size, iterations, step_parallel);

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 1000;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(size, iterations, step_parallel);
    println!(
        "\nThroughput at {size}x{size}: {:.1}M cells/sec",
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
