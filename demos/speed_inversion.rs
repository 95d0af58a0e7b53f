use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use matrices_rs::{Mat, MatError};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of random matrices to invert
    #[arg(short, long, default_value_t=100_000)]
    count: usize,
    /// Matrix dimension
    #[arg(short='n', long, default_value_t=3)]
    size: usize,
    /// Repeat the whole run this many times
    #[arg(short, long, default_value_t=1)]
    iters: usize,
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .try_init()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n = args.size;
    let mut src = Mat::<f64>::empty(n, n)?;
    let mut dst = Mat::<f64>::empty(n, n)?;
    let mut times = Vec::with_capacity(args.iters);

    for iter in 0..args.iters {
        let mut singular = 0usize;
        let start = Instant::now();
        for _ in 0..args.count {
            for v in src.data_mut()?.iter_mut() {
                *v = rng.gen_range(0..64) as f64;
            }
            match src.inverse_into(&mut dst) {
                Ok(()) => {},
                Err(MatError::SingularMatrix) => singular += 1,
                Err(e) => return Err(e.into()),
            }
        }
        let elapsed = start.elapsed();
        log::info!(
            "iter {} / {}: inverted {} {n}x{n} matrices in {:.3} ms ({singular} singular)",
            iter + 1,
            args.iters,
            args.count,
            elapsed.as_secs_f64() * 1e3,
        );
        times.push(elapsed);
    }

    let total: Duration = times.iter().sum();
    let min = times.iter().min().copied().unwrap_or_default();
    let max = times.iter().max().copied().unwrap_or_default();
    let per_matrix = total.as_secs_f64() / (args.count.max(1) * times.len().max(1)) as f64;
    println!("{:>15} {:>15} {:>15} {:>15}", "Total", "Min", "Max", "Per matrix");
    println!(
        "{:12.3} ms {:12.3} ms {:12.3} ms {:12.3} us",
        total.as_secs_f64() * 1e3,
        min.as_secs_f64() * 1e3,
        max.as_secs_f64() * 1e3,
        per_matrix * 1e6,
    );

    Ok(())
}
