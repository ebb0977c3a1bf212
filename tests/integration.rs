//! Integration tests: verify batch generation, cross-strategy agreement,
//! and the trial runner's counter and result semantics.

use strsize_bench::generate::{generate_batch, GenParams};
use strsize_bench::strategy::raw::{RawLayoutStrategy, RawLenAccess};
use strsize_bench::strategy::{ByteEncodeStrategy, LenStrategy, SizeStrategy};
use strsize_bench::trial::{run_trial, run_trial_on};

fn small_params() -> GenParams {
    GenParams {
        count: 500,
        min_len: 20,
        max_len: 40,
    }
}

fn all_strategies() -> (RawLayoutStrategy, LenStrategy, ByteEncodeStrategy) {
    let access = RawLenAccess::probe().expect("probe");
    (RawLayoutStrategy::new(access), LenStrategy, ByteEncodeStrategy)
}

// ── Generator ───────────────────────────────────────────────────────

#[test]
fn generator_produces_exact_count() {
    let params = small_params();
    let batch = generate_batch(&params);
    assert_eq!(batch.len(), params.count);
}

#[test]
fn generator_respects_length_bounds() {
    let params = small_params();
    let batch = generate_batch(&params);
    for s in &batch {
        assert!(s.len() >= params.min_len, "too short: {}", s.len());
        assert!(s.len() < params.max_len, "too long: {}", s.len());
    }
}

#[test]
fn generator_emits_alphanumeric_only() {
    let batch = generate_batch(&small_params());
    for s in &batch {
        assert!(
            s.chars().all(|c| c.is_ascii_alphanumeric()),
            "non-alphanumeric character in {s:?}"
        );
    }
}

// ── Strategy agreement ──────────────────────────────────────────────

#[test]
fn strategies_agree_per_string() {
    let (raw, len, bytes) = all_strategies();
    let batch = generate_batch(&small_params());
    for s in &batch {
        let a = raw.size_of(s).unwrap();
        let b = len.size_of(s).unwrap();
        let c = bytes.size_of(s).unwrap();
        assert_eq!(a, b, "raw vs len for {s:?}");
        assert_eq!(b, c, "len vs bytes for {s:?}");
    }
}

#[test]
fn strategies_agree_on_checksum() {
    let (raw, len, bytes) = all_strategies();
    let batch = generate_batch(&small_params());
    let strategies: Vec<&dyn SizeStrategy> = vec![&raw, &len, &bytes];

    let mut trial_no = 1u32;
    let sums: Vec<u64> = strategies
        .iter()
        .map(|s| run_trial_on(&mut trial_no, *s, &batch).unwrap().checksum)
        .collect();

    assert_eq!(sums[0], sums[1]);
    assert_eq!(sums[1], sums[2]);
}

// ── Trial runner ────────────────────────────────────────────────────

#[test]
fn fixed_batch_checksum_is_six_for_every_strategy() {
    let (raw, len, bytes) = all_strategies();
    let batch: Vec<String> = ["ab", "cde", "f"].iter().map(|s| s.to_string()).collect();
    let strategies: Vec<&dyn SizeStrategy> = vec![&raw, &len, &bytes];

    let mut trial_no = 1u32;
    for strategy in strategies {
        let result = run_trial_on(&mut trial_no, strategy, &batch).unwrap();
        assert_eq!(result.checksum, 6, "strategy {}", strategy.name());
        assert_eq!(result.count, 3);
    }
}

#[test]
fn counter_increments_once_per_trial() {
    let (raw, len, bytes) = all_strategies();
    let strategies: Vec<&dyn SizeStrategy> = vec![&raw, &len, &bytes];
    let params = GenParams {
        count: 3,
        min_len: 1,
        max_len: 4,
    };

    let mut trial_no = 1u32;
    for round in 0u32..2 {
        for (i, strategy) in strategies.iter().enumerate() {
            assert_eq!(trial_no, 1 + round * 3 + i as u32);
            run_trial(&mut trial_no, *strategy, &params).unwrap();
        }
    }
    assert_eq!(trial_no, 7);
}

#[test]
fn trial_reports_whole_millisecond_elapsed() {
    let (_raw, len, _bytes) = all_strategies();
    let batch = generate_batch(&small_params());

    let mut trial_no = 1u32;
    let result = run_trial_on(&mut trial_no, &len, &batch).unwrap();

    // as_millis is non-negative by construction; the accessor must agree
    // with the underlying duration.
    assert_eq!(result.elapsed_ms(), result.elapsed.as_millis());
}
