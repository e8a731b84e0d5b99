//! Shared helpers for stepwise benchmark suites.

use stepwise_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Collection sizes every suite sweeps.
pub const SIZES: [usize; 3] = [64, 1_024, 16_384];

/// Sorted, evenly spaced collection `[1, 3, 5, ...]` of length `n`.
///
/// Even spacing keeps interpolation search on its best case, so its numbers
/// are comparable with binary search rather than dominated by skew.
#[must_use]
pub fn sorted_odds(n: usize) -> Vec<i64> {
    (0..n)
        .map(|i| i64::try_from(i).map_or(i64::MAX, |i| 2 * i + 1))
        .collect()
}

/// Unsorted collection of length `n` from a fixed-seed LCG.
///
/// Values fall in `[0, 4n)` so sorted strategies pay a real sort and
/// duplicates stay rare.
#[must_use]
pub fn scrambled(n: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    let width = u64::try_from(n).unwrap_or(u64::MAX).saturating_mul(4).max(1);
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            i64::try_from((state >> 33) % width).unwrap_or(0)
        })
        .collect()
}

/// Target that is present and sits three quarters of the way in.
#[must_use]
pub fn late_member(values: &[i64]) -> i64 {
    values.get(values.len() * 3 / 4).copied().unwrap_or(0)
}

/// Fingerprint of a benchmark input, printed alongside results so a report
/// can be tied to the exact collection it measured.
///
/// # Panics
///
/// Panics if the collection cannot be serialized. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn input_fingerprint(values: &[i64]) -> ContentHash {
    let bytes = serde_json::to_vec(values).expect("serialize bench input");
    canonical_hash(HashDomain::BenchInput, &bytes)
}
