//! Size strategies and the common `SizeStrategy` trait.
//!
//! Three implementations are compared:
//! - [`raw::RawLayoutStrategy`] — reads the length word of `String`'s
//!   in-memory representation directly
//! - [`LenStrategy`] — the public `String::len()` accessor
//! - [`ByteEncodeStrategy`] — copies into a transient byte buffer and takes
//!   its length

pub mod raw;

use anyhow::Result;

/// Trait implemented by each size-calculation strategy under comparison.
///
/// Given one string, return its size in bytes. Only the raw-layout strategy
/// has a failure mode; the other two always succeed.
pub trait SizeStrategy {
    /// Human-readable name for trial headers.
    fn name(&self) -> &'static str;

    /// Compute the size of one string.
    fn size_of(&self, s: &String) -> Result<u64>;
}

/// Public length accessor: reads the pre-existing length metadata.
pub struct LenStrategy;

impl SizeStrategy for LenStrategy {
    fn name(&self) -> &'static str {
        "String::len()"
    }

    fn size_of(&self, s: &String) -> Result<u64> {
        Ok(s.len() as u64)
    }
}

/// Byte-encoding pass: copies the contents into a transient `Vec<u8>` on
/// every call, paying an allocation plus a full copy per string.
pub struct ByteEncodeStrategy;

impl SizeStrategy for ByteEncodeStrategy {
    fn name(&self) -> &'static str {
        "as_bytes().to_vec().len()"
    }

    fn size_of(&self, s: &String) -> Result<u64> {
        let bytes = s.as_bytes().to_vec();
        Ok(bytes.len() as u64)
    }
}
