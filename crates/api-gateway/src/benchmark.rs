//! Benchmark runner for `GET /api/benchmark`.
//!
//! For each size in the configured ladder: build a random digit vector,
//! warm the engine up once, then time the duplex engine and the
//! schoolbook reference convolution over the same input. The reference
//! arm times the raw convolution only, mirroring what the endpoint has
//! always reported.

use crate::domain::config::BenchmarkConfig;
use crate::domain::types::BenchmarkRecord;
use duplex_engine::reference::schoolbook_column_sums;
use duplex_engine::square_digits;
use rand::Rng;
use std::hint::black_box;
use std::time::Instant;
use tracing::debug;

/// Run the full size ladder and collect one record per size.
///
/// Pure CPU work; callers on an async runtime should wrap this in
/// `spawn_blocking`.
pub fn run_benchmark(config: &BenchmarkConfig) -> Vec<BenchmarkRecord> {
    let mut rng = rand::thread_rng();
    let mut records = Vec::with_capacity(config.sizes.len());

    for &d in &config.sizes {
        let digits: Vec<u8> = (0..d).map(|_| rng.gen_range(0..10)).collect();

        // Warmup
        let _ = square_digits(&digits);

        let vedic = time_mean(config.iterations, || {
            let _ = black_box(square_digits(black_box(&digits)));
        });

        let numpy = time_mean(config.iterations, || {
            let _ = black_box(schoolbook_column_sums(black_box(&digits)));
        });

        debug!(digits = d, vedic, reference = numpy, "benchmark point");

        let ops = (d * d) as u64;
        records.push(BenchmarkRecord {
            digits: d,
            vedic,
            numpy,
            standard_ops: ops,
            vedic_ops: ops / 2,
        });
    }

    records
}

/// Mean seconds per call over `iterations` invocations.
fn time_mean(iterations: u32, mut f: impl FnMut()) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    start.elapsed().as_secs_f64() / f64::from(iterations)
}
