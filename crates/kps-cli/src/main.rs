use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kps_core::{Bounds, KPrimeSumOracle, Verdict};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "kps", about = "k-prime-sum decision oracle CLI")]
struct Cli {
    /// Exclusive upper bound on n (default: 25551)
    #[arg(long, global = true)]
    n_max: Option<usize>,

    /// Inclusive upper bound on k (default: 6)
    #[arg(long, global = true)]
    k_max: Option<usize>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask whether n is a sum of exactly k primes
    Query {
        n: usize,
        k: usize,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the prime sieve for the configured bounds
    Sieve,

    /// Randomized self-verification: sums of known prime multisets
    /// must come back yes
    Check {
        /// Number of random cases to generate
        #[arg(long, default_value_t = 5000)]
        cases: u32,

        /// RNG seed for reproducible case generation
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Run a probe workload and report memo fill statistics
    Stats,
}

fn build_oracle(cli: &Cli) -> Result<KPrimeSumOracle> {
    let defaults = Bounds::default();
    let n_max = cli.n_max.unwrap_or(defaults.n_max());
    let k_max = cli.k_max.unwrap_or(defaults.k_max());
    let bounds = Bounds::new(n_max, k_max).context("invalid bounds")?;

    let start = Instant::now();
    let oracle = KPrimeSumOracle::new(bounds);
    tracing::debug!(
        "oracle ready in {:?} ({} primes below {})",
        start.elapsed(),
        oracle.sieve().count(),
        bounds.n_max()
    );
    Ok(oracle)
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Query { n, k, json } => cmd_query(&cli, n, k, json),
        Commands::Sieve => cmd_sieve(&cli),
        Commands::Check { cases, seed } => cmd_check(&cli, cases, seed),
        Commands::Stats => cmd_stats(&cli),
    }
}

#[derive(Serialize)]
struct QueryReport {
    n: usize,
    k: usize,
    verdict: Verdict,
    n_max: usize,
    k_max: usize,
}

fn cmd_query(cli: &Cli, n: usize, k: usize, json: bool) -> Result<()> {
    let mut oracle = build_oracle(cli)?;
    let verdict = oracle.query(n, k);

    if json {
        let report = QueryReport {
            n,
            k,
            verdict,
            n_max: oracle.bounds().n_max(),
            k_max: oracle.bounds().k_max(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{verdict}");
    }
    Ok(())
}

fn cmd_sieve(cli: &Cli) -> Result<()> {
    let oracle = build_oracle(cli)?;
    let sieve = oracle.sieve();

    println!("range:    [0, {})", sieve.limit());
    println!("primes:   {}", sieve.count());
    match sieve.largest() {
        Some(p) => println!("largest:  {p}"),
        None => println!("largest:  none"),
    }
    Ok(())
}

fn cmd_check(cli: &Cli, cases: u32, seed: u64) -> Result<()> {
    let mut oracle = build_oracle(cli)?;
    let bounds = oracle.bounds();
    let primes: Vec<usize> = oracle.sieve().primes().collect();
    if primes.is_empty() {
        bail!("no primes below {} to build cases from", bounds.n_max());
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let max_parts = bounds.k_max().min(5);
    let mut checked = 0u32;
    let mut skipped = 0u32;

    for _ in 0..cases {
        let j = rng.random_range(1..=max_parts);
        let parts: Vec<usize> = (0..j)
            .map(|_| primes[rng.random_range(0..primes.len())])
            .collect();
        let sum: usize = parts.iter().sum();

        if sum >= bounds.n_max() {
            skipped += 1;
            continue;
        }

        let verdict = oracle.query(sum, j);
        if verdict != Verdict::Yes {
            bail!(
                "self-check failed: query({sum}, {j}) = {verdict}, \
                 but {sum} is the sum of primes {parts:?}"
            );
        }
        checked += 1;
    }

    println!("checked {checked} cases ({skipped} skipped, sum out of range): all yes");
    Ok(())
}

fn cmd_stats(cli: &Cli) -> Result<()> {
    let mut oracle = build_oracle(cli)?;
    let bounds = oracle.bounds();

    println!("n_max:     {}", bounds.n_max());
    println!("k_max:     {}", bounds.k_max());
    println!("primes:    {}", oracle.sieve().count());
    println!("resolved:  {} (after sieve)", oracle.resolved());

    // Probe: one worst-case query per row, highest n first.
    let probe_n = bounds.n_max() - 1;
    for k in 1..=bounds.k_max() {
        let verdict = oracle.query(probe_n, k);
        tracing::debug!("probe query({probe_n}, {k}) = {verdict}");
    }
    println!("resolved:  {} (after probes)", oracle.resolved());
    Ok(())
}
