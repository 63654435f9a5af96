use semicircle::env_config;
use semicircle::sample::expected_probability;
use semicircle::simulation::{
    aggregate_statistics, save_statistics, simulate_batch, simulate_batch_serial,
};

struct Args {
    points: usize,
    iterations: usize,
    seed: Option<u64>,
    serial: bool,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut points = 5usize;
    let mut iterations = 100_000usize;
    let mut seed: Option<u64> = None;
    let mut serial = false;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--points" => {
                i += 1;
                if i < args.len() {
                    points = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --points value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--iterations" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --iterations value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = Some(args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--serial" => {
                serial = true;
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: simulate [--points N] [--iterations K] [--seed S] [--serial] [--output DIR]"
                );
                println!();
                println!("Options:");
                println!("  --points N       Points per trial (default: 5)");
                println!("  --iterations K   Number of trials (default: 100000)");
                println!("  --seed S         Base RNG seed (default: OS entropy, echoed)");
                println!("  --serial         Run trials on a single thread");
                println!("  --output DIR     Write statistics.json to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: simulate [--points N] [--iterations K] [--seed S] [--serial] [--output DIR]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if points < 1 {
        eprintln!("Invalid --points value: must be at least 1");
        std::process::exit(1);
    }
    if iterations < 1 {
        eprintln!("Invalid --iterations value: must be at least 1");
        std::process::exit(1);
    }

    Args {
        points,
        iterations,
        seed,
        serial,
        output,
    }
}

fn main() {
    let args = parse_args();
    if !args.serial {
        env_config::init_rayon_threads();
    }

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    println!(
        "Simulating {} trials with {} points (seed {}{})",
        args.iterations,
        args.points,
        seed,
        if args.serial { ", serial" } else { "" }
    );

    let result = if args.serial {
        simulate_batch_serial(args.points, args.iterations, seed)
    } else {
        simulate_batch(args.points, args.iterations, seed)
    };

    let expected = expected_probability(args.points);
    println!(
        "points={} iterations={} hits={} observed={:.4}% expected={:.4}%",
        result.points,
        result.iterations,
        result.hits,
        result.observed() * 100.0,
        expected * 100.0
    );
    println!(
        "Elapsed: {:.2}s ({:.0} trials/s)",
        result.elapsed.as_secs_f64(),
        result.iterations as f64 / result.elapsed.as_secs_f64()
    );

    if let Some(dir) = &args.output {
        let stats = aggregate_statistics(&result);
        match save_statistics(&stats, dir) {
            Ok(path) => println!("Statistics written to {}", path),
            Err(e) => {
                eprintln!("Failed to write statistics to {}: {}", dir, e);
                std::process::exit(1);
            }
        }
    }
}
