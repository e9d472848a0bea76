// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use anyhow::Result;
use clap::Parser;
use lacuna_model::range::SearchRange;
use lacuna_solver::solver::GapSolverBuilder;
use num_bigint::BigUint;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Finds the largest gap between consecutive primes below an upper bound.
#[derive(Parser)]
#[command(name = "lacuna")]
#[command(author, version)]
#[command(about = "Find the largest gap between consecutive primes below an upper bound")]
struct Cli {
    /// Upper bound of the search
    #[arg(default_value = "1000000000")]
    upper_bound: BigUint,

    /// Number of worker threads (defaults to the available parallelism)
    #[arg(short, long)]
    workers: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let range = SearchRange::new(cli.upper_bound)?;
    let mut builder = GapSolverBuilder::new();
    if let Some(workers) = cli.workers {
        builder = builder.with_workers(workers);
    }
    let solver = builder.build();

    tracing::info!(
        upper_bound = %range.upper_bound(),
        workers = solver.worker_count(),
        "starting search"
    );

    let outcome = solver.solve(&range)?;

    println!("{}", outcome.result());
    println!(
        "runtime is {:.3}s",
        outcome.statistics().elapsed.as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["lacuna"]);
        assert_eq!(cli.upper_bound, BigUint::from(1_000_000_000u64));
        assert!(cli.workers.is_none());
    }

    #[test]
    fn test_cli_accepts_bound_and_workers() {
        let cli = Cli::parse_from(["lacuna", "100", "--workers", "4"]);
        assert_eq!(cli.upper_bound, BigUint::from(100u32));
        assert_eq!(cli.workers, Some(4));
    }

    #[test]
    fn test_cli_accepts_bounds_beyond_machine_words() {
        let cli = Cli::parse_from(["lacuna", "340282366920938463463374607431768211456"]);
        assert_eq!(cli.upper_bound, BigUint::from(1u32) << 128);
    }

    #[test]
    fn test_cli_rejects_garbage_bounds() {
        assert!(Cli::try_parse_from(["lacuna", "not-a-number"]).is_err());
    }
}
