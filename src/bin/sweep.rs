//! Point-count sweep: run one batch per n and tabulate observed vs expected.
//!
//! With `--output DIR`, writes `sweep_results.csv` with one row per point
//! count.

use std::fs;
use std::io::Write;

use semicircle::env_config;
use semicircle::simulation::{range_grid, resolve_grid, run_sweep};

struct Args {
    grid: Vec<usize>,
    iterations: usize,
    seed: Option<u64>,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut grid_name = "default".to_string();
    let mut from: Option<usize> = None;
    let mut to: Option<usize> = None;
    let mut iterations = 50_000usize;
    let mut seed: Option<u64> = None;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--grid" => {
                i += 1;
                if i < args.len() {
                    grid_name = args[i].clone();
                }
            }
            "--from" => {
                i += 1;
                if i < args.len() {
                    from = Some(args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --from value: {}", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--to" => {
                i += 1;
                if i < args.len() {
                    to = Some(args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --to value: {}", args[i]);
                        std::process::exit(1);
                    }));
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
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: sweep [--grid NAME | --from LO --to HI] [--iterations K] [--seed S] [--output DIR]"
                );
                println!();
                println!("Options:");
                println!("  --grid NAME      Named grid: default (1-12), small (2-6), wide (1-50)");
                println!("  --from LO        Start of an explicit point-count range");
                println!("  --to HI          End (inclusive) of an explicit range");
                println!("  --iterations K   Trials per point count (default: 50000)");
                println!("  --seed S         Base RNG seed (default: OS entropy, echoed)");
                println!("  --output DIR     Write sweep_results.csv to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: sweep [--grid NAME | --from LO --to HI] [--iterations K] [--seed S] [--output DIR]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if iterations < 1 {
        eprintln!("Invalid --iterations value: must be at least 1");
        std::process::exit(1);
    }

    let grid = match (from, to) {
        (Some(lo), Some(hi)) => {
            if lo < 1 {
                eprintln!("Invalid --from value: must be at least 1");
                std::process::exit(1);
            }
            if hi < lo {
                eprintln!("Invalid --to value: must be >= --from");
                std::process::exit(1);
            }
            range_grid(lo, hi)
        }
        (None, None) => resolve_grid(&grid_name).unwrap_or_else(|| {
            eprintln!("Unknown grid: {}", grid_name);
            eprintln!("Known grids: default, small, wide");
            std::process::exit(1);
        }),
        _ => {
            eprintln!("--from and --to must be given together");
            std::process::exit(1);
        }
    };

    Args {
        grid,
        iterations,
        seed,
        output,
    }
}

fn main() {
    let args = parse_args();
    let num_threads = env_config::init_rayon_threads();
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);

    println!("═══════════════════════════════════════════════════════════════════");
    println!("  Semicircle Coverage Sweep: Observed vs n / 2^(n-1)");
    println!("═══════════════════════════════════════════════════════════════════");
    println!("  Trials per n: {:>10}", args.iterations);
    println!("  Seed:         {:>10}", seed);
    println!("  Threads:      {:>10}", num_threads);
    println!("  Point counts: {:>10}", args.grid.len());
    if let Some(ref dir) = args.output {
        println!("  Output:       {}", dir);
    }
    println!();

    println!(
        "  {:>4} {:>10} {:>10} {:>10} {:>10} {:>10} {:>7}",
        "n", "trials", "hits", "observed", "expected", "|error|", "z"
    );
    println!("  {}", "─".repeat(68));

    let entries = run_sweep(&args.grid, args.iterations, seed);
    for e in &entries {
        println!(
            "  {:>4} {:>10} {:>10} {:>10.6} {:>10.6} {:>10.6} {:>7.2}",
            e.points, e.iterations, e.hits, e.observed, e.expected, e.abs_error, e.z
        );
    }
    println!();

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir).unwrap_or_else(|e| {
            eprintln!("Failed to create output directory {}: {}", dir, e);
            std::process::exit(1);
        });
        let path = format!("{}/sweep_results.csv", dir);
        let mut f = std::io::BufWriter::new(fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {}", path, e);
            std::process::exit(1);
        }));
        writeln!(
            f,
            "points,iterations,seed,hits,observed,expected,abs_error,std_error,z,ci95_lower,ci95_upper,elapsed_secs"
        )
        .unwrap();
        for e in &entries {
            writeln!(
                f,
                "{},{},{},{},{:.8},{:.8},{:.8},{:.8},{:.4},{:.8},{:.8},{:.4}",
                e.points,
                e.iterations,
                e.seed,
                e.hits,
                e.observed,
                e.expected,
                e.abs_error,
                e.std_error,
                e.z,
                e.ci95_lower,
                e.ci95_upper,
                e.elapsed_secs
            )
            .unwrap();
        }
        println!("Results written to {}", path);
    }
}
