//! Trial runner: one generate, time, sum, report cycle.

use std::time::Instant;

use anyhow::{Context, Result};

use crate::generate::{generate_batch, GenParams};
use crate::report::{self, TrialResult};
use crate::strategy::SizeStrategy;

/// Run one trial: print the header, generate a fresh batch, then measure
/// `strategy` over it. The counter is incremented once per trial.
pub fn run_trial(
    trial_no: &mut u32,
    strategy: &dyn SizeStrategy,
    params: &GenParams,
) -> Result<TrialResult> {
    report::print_header(*trial_no, strategy.name());
    let batch = generate_batch(params);
    time_batch(trial_no, strategy, &batch)
}

/// Run one trial against a caller-supplied batch instead of a generated one.
pub fn run_trial_on(
    trial_no: &mut u32,
    strategy: &dyn SizeStrategy,
    batch: &[String],
) -> Result<TrialResult> {
    report::print_header(*trial_no, strategy.name());
    time_batch(trial_no, strategy, batch)
}

/// Timed section shared by both entry points.
///
/// The timing line prints whether or not the summation succeeded; only after
/// it (and the counter increment) does a strategy error propagate.
fn time_batch(
    trial_no: &mut u32,
    strategy: &dyn SizeStrategy,
    batch: &[String],
) -> Result<TrialResult> {
    let start = Instant::now();
    let outcome = sum_sizes(strategy, batch);
    let elapsed = start.elapsed();

    if let Ok(checksum) = &outcome {
        report::print_checksum(*checksum);
    }
    report::print_timing(batch.len(), elapsed);
    *trial_no += 1;

    let checksum = outcome
        .with_context(|| format!("strategy {} failed mid-trial", strategy.name()))?;
    Ok(TrialResult {
        checksum,
        elapsed,
        count: batch.len(),
    })
}

/// Sum per-string sizes into a 64-bit accumulator.
fn sum_sizes(strategy: &dyn SizeStrategy, batch: &[String]) -> Result<u64> {
    let mut sum = 0u64;
    for s in batch {
        sum += strategy.size_of(s)?;
    }
    Ok(sum)
}
