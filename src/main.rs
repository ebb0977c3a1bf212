//! Standalone benchmark runner: repeats the three size strategies for a
//! fixed number of rounds, printing each trial's checksum and timing.
//!
//! Usage:
//!   cargo run --release

use std::process;

use anyhow::{Context, Result};

use strsize_bench::generate::GenParams;
use strsize_bench::strategy::raw::{RawLayoutStrategy, RawLenAccess};
use strsize_bench::strategy::{ByteEncodeStrategy, LenStrategy, SizeStrategy};
use strsize_bench::trial::run_trial;

const ROUNDS: u32 = 10;

fn run() -> Result<()> {
    // The probe must precede any trial output: a failed probe is a fatal
    // configuration error, not a per-trial one.
    let access = RawLenAccess::probe().context("setting up raw String length access")?;

    let raw = RawLayoutStrategy::new(access);
    let len = LenStrategy;
    let bytes = ByteEncodeStrategy;
    let strategies: Vec<&dyn SizeStrategy> = vec![&raw, &len, &bytes];

    let params = GenParams::standard();
    let mut trial_no = 1u32;
    for _ in 0..ROUNDS {
        for strategy in &strategies {
            run_trial(&mut trial_no, *strategy, &params)?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}
