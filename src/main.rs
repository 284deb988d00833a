//! rangeand - verify and time range-AND strategies
//!
//! Checks every strategy against literal fixtures and seeded random ranges,
//! then times each one over the random batch.

use clap::Parser;
use rangeand::fixtures::{
    generate_pairs, BOUNDARY_FIXTURES, DEFAULT_PAIR_COUNT, DEFAULT_SEED, FIXTURES,
};
use rangeand::harness::{perf_test_iterations, select_strategy, verify, Mismatch};
use rangeand::solver::{NamedStrategy, STRATEGIES};

#[derive(Parser, Debug)]
#[command(name = "rangeand")]
#[command(about = "Verify and time bitwise-AND-of-range strategies", long_about = None)]
struct Args {
    /// Seed for the random range generator
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of random ranges to generate
    #[arg(short, long, default_value_t = DEFAULT_PAIR_COUNT)]
    count: usize,

    /// Number of timed passes over the random ranges
    #[arg(short, long, default_value = "1")]
    iterations: usize,

    /// Limit each random range to this many values past its low bound
    #[arg(short, long, value_name = "SPAN")]
    max_span: Option<u32>,

    /// Only time this strategy
    #[arg(long, value_name = "NAME")]
    strategy: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn report(mismatches: &[Mismatch]) -> bool {
    for m in mismatches {
        eprintln!("{}", m);
    }
    mismatches.is_empty()
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let timed: Vec<&NamedStrategy> = match &args.strategy {
        Some(name) => match select_strategy(name) {
            Ok(s) => vec![s],
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => STRATEGIES.iter().collect(),
    };

    let mut ok = true;

    for s in STRATEGIES {
        ok &= report(&verify(s, FIXTURES));
        if !s.is_oracle {
            ok &= report(&verify(s, BOUNDARY_FIXTURES));
        }
    }
    log::debug!("literal fixtures checked");

    println!("Generating integers");
    let values = generate_pairs(args.seed, args.count, args.max_span);
    log::debug!(
        "generated {} ranges with seed {} (max span {:?})",
        values.len(),
        args.seed,
        args.max_span
    );

    // Expected values came from the oracle; check the others against it.
    for s in STRATEGIES.iter().filter(|s| !s.is_oracle) {
        ok &= report(&verify(s, &values));
    }

    for s in timed {
        println!("Running {} perf test", s.name);
        let perf = perf_test_iterations(s, &values, args.iterations);
        println!("Time: {}ns", perf.elapsed_ns());
        if args.iterations > 1 {
            println!("Mean: {}ns per pass", perf.mean_ns());
        }
    }

    if !ok {
        log::error!("verification failed");
        std::process::exit(1);
    }
}
