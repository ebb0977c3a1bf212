//! Batch generation: produces the random strings each trial measures.
//!
//! Every trial allocates a fresh batch, so allocation cost is exercised
//! alongside the measured size computation. Batches are never reused.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Parameters describing the batch generated for one trial.
#[derive(Debug, Clone, Copy)]
pub struct GenParams {
    /// Number of strings per batch.
    pub count: usize,
    /// Inclusive lower bound on string length.
    pub min_len: usize,
    /// Exclusive upper bound on string length.
    pub max_len: usize,
}

impl GenParams {
    /// Standard benchmark batch: 20 million strings of 20 to 39 characters.
    pub fn standard() -> Self {
        Self {
            count: 20_000_000,
            min_len: 20,
            max_len: 40,
        }
    }
}

/// Generate a fresh batch of random alphanumeric strings.
///
/// Lengths are uniform in `min_len..max_len`. Uses the thread-local RNG, so
/// every invocation yields different content; there is no seed control.
pub fn generate_batch(params: &GenParams) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut batch = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let len = rng.gen_range(params.min_len..params.max_len);
        let s: String = (&mut rng)
            .sample_iter(Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        batch.push(s);
    }
    batch
}
