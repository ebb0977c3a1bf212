//! String Size Micro-Benchmark
//!
//! Generates a large batch of random alphanumeric strings per trial and
//! measures the wall-clock cost of three ways to compute a string's byte
//! length:
//! - **Raw layout**: read the length word of `String`'s in-memory
//!   representation through a raw pointer, bypassing the public accessor
//! - **Length method**: the public `String::len()` accessor
//! - **Byte encoding**: copy the bytes into a transient `Vec<u8>` and take
//!   its length
//!
//! All three agree on the checksum for single-byte input; the comparison is
//! about access cost, not correctness.
//!
//! Run the full comparison: `cargo run --release`
//! Run benchmarks: `cargo bench`
//! Run tests: `cargo test`

pub mod generate;
pub mod report;
pub mod strategy;
pub mod trial;
