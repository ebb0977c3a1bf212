//! Raw-layout strategy: reads `String`'s length word without calling the
//! public accessor.
//!
//! A `String` occupies three pointer-sized words (buffer pointer, capacity,
//! length), but their order inside the standard library is an implementation
//! detail. A one-time probe at process start locates the length and capacity
//! words by building strings whose length and capacity are known, distinct
//! values and searching the word view for them. If the probe cannot uniquely
//! identify the length word, setup fails and the process aborts before any
//! trial runs.

use anyhow::{anyhow, bail, Context, Result};

use super::SizeStrategy;

const WORDS: usize = 3;

// The raw word view is only meaningful while `String` stays three
// pointer-sized words.
const _: () = assert!(std::mem::size_of::<String>() == WORDS * std::mem::size_of::<usize>());

/// One-time handle recording where the length and capacity words live in
/// `String`'s layout. Probed once at startup, read-only afterwards.
#[derive(Debug, Clone, Copy)]
pub struct RawLenAccess {
    len_word: usize,
    cap_word: usize,
}

impl RawLenAccess {
    /// Probe `String`'s layout and locate its length and capacity words.
    ///
    /// Two probe strings with distinct lengths and capacities are used; a
    /// word only qualifies if it matches the expected value in both, which
    /// rules out a buffer pointer that happens to collide with one of them.
    pub fn probe() -> Result<Self> {
        let a = probe_string(29, 64);
        let b = probe_string(47, 128);
        let words_a = words_of(&a);
        let words_b = words_of(&b);

        let len_word = find_word(&words_a, a.len(), &words_b, b.len())
            .context("locating the length word of String's layout")?;
        let cap_word = find_word(&words_a, a.capacity(), &words_b, b.capacity())
            .context("locating the capacity word of String's layout")?;
        if len_word == cap_word {
            bail!("length and capacity words of String's layout coincide");
        }

        Ok(Self { len_word, cap_word })
    }

    /// Read the length word of `s` directly.
    ///
    /// The `len <= cap` check guards against the probed layout no longer
    /// matching the live representation; it is not expected to fire.
    pub fn read_len(&self, s: &String) -> Result<u64> {
        let words = words_of(s);
        let len = words[self.len_word];
        let cap = words[self.cap_word];
        if len > cap {
            bail!("raw length read out of range: len={len} cap={cap}");
        }
        Ok(len as u64)
    }
}

/// Strategy adapter over a probed [`RawLenAccess`] handle.
pub struct RawLayoutStrategy {
    access: RawLenAccess,
}

impl RawLayoutStrategy {
    pub fn new(access: RawLenAccess) -> Self {
        Self { access }
    }
}

impl SizeStrategy for RawLayoutStrategy {
    fn name(&self) -> &'static str {
        "Raw layout (String.vec.len)"
    }

    fn size_of(&self, s: &String) -> Result<u64> {
        self.access.read_len(s)
    }
}

/// View a `String` as its three pointer-sized words.
fn words_of(s: &String) -> [usize; WORDS] {
    // SAFETY: `String` is exactly WORDS pointer-sized words (checked at
    // compile time above) and `s` is valid for reads of that size.
    unsafe { *(s as *const String as *const [usize; WORDS]) }
}

/// Build a string with the given length and at least the given capacity.
fn probe_string(len: usize, cap: usize) -> String {
    let mut s = String::with_capacity(cap);
    for _ in 0..len {
        s.push('x');
    }
    s
}

/// Find the unique word index holding `needle_a` in `a` and `needle_b` in
/// `b`. Errors if no word matches in both, or if more than one does.
fn find_word(
    a: &[usize; WORDS],
    needle_a: usize,
    b: &[usize; WORDS],
    needle_b: usize,
) -> Result<usize> {
    let mut found = None;
    for i in 0..WORDS {
        if a[i] == needle_a && b[i] == needle_b {
            if let Some(prev) = found {
                bail!("ambiguous String layout: words {prev} and {i} both match");
            }
            found = Some(i);
        }
    }
    found.ok_or_else(|| anyhow!("no word of String's layout holds the expected value"))
}
