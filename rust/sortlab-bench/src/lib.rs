//! Input generators shared by the SortLab benchmarks.

/// Deterministic pseudo-random fill (LCG), values in `0..modulus`.
pub fn pseudo_random(n: usize, modulus: u32) -> Vec<i64> {
    let mut val: u32 = 42;
    (0..n)
        .map(|_| {
            val = val.wrapping_mul(1103515245).wrapping_add(12345);
            i64::from(val % modulus)
        })
        .collect()
}

/// `n - 1, n - 2, ..., 0`.
pub fn descending(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

/// `0, 1, ..., n - 1`.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}
