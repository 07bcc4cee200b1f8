//! Decimal digit extraction used by radix sort.
//!
//! Every helper works on the magnitude `|n|`, so the sign of a value never
//! influences which digit it reports.

use num_traits::PrimInt;

/// Absolute value of any primitive integer, widened to `u128`.
fn magnitude<T: PrimInt>(number: T) -> u128 {
    match number.to_u128() {
        Some(m) => m,
        // Only negative values fail the unsigned conversion, and every
        // negative primitive integer fits in an i128.
        None => number.to_i128().map_or(0, i128::unsigned_abs),
    }
}

/// Returns the decimal digit of `|number|` at `position`, counting from the
/// least-significant digit (position 0).
///
/// Positions past the most significant digit yield `0`.
///
/// ```
/// use sortlab_core::digits::digit_at;
///
/// assert_eq!(digit_at(9805, 0), 5);
/// assert_eq!(digit_at(9805, 2), 8);
/// assert_eq!(digit_at(9805, 7), 0);
/// ```
pub fn digit_at<T: PrimInt>(number: T, position: u32) -> u8 {
    match 10u128.checked_pow(position) {
        Some(divisor) => ((magnitude(number) / divisor) % 10) as u8,
        None => 0,
    }
}

/// Number of decimal digits in `|number|`. Zero has one digit.
pub fn digit_count<T: PrimInt>(number: T) -> u32 {
    match magnitude(number) {
        0 => 1,
        m => m.ilog10() + 1,
    }
}

/// Largest [`digit_count`] across `numbers`; `0` for an empty slice.
///
/// This is the number of passes radix sort performs.
pub fn max_digit_count<T: PrimInt>(numbers: &[T]) -> u32 {
    numbers.iter().map(|&n| digit_count(n)).max().unwrap_or(0)
}
