//! LSD radix sort in base 10.
//!
//! Each pass distributes the working sequence into ten buckets by the digit
//! at the current position and concatenates the buckets in digit order.
//! Appending keeps every pass stable, which is what makes the
//! least-significant-first ordering correct.

use num_traits::PrimInt;

use crate::digits::{digit_at, max_digit_count};
use crate::error::SortError;

const RADIX: usize = 10;

/// Sorts non-negative integers into a new `Vec`.
///
/// Digits are taken from `|n|`, so negative values are bucketed by
/// magnitude and end up among positives of equal magnitude rather than
/// before them. Such input is outside this function's contract; use
/// [`try_radix_sort`] to have it rejected.
///
/// ```
/// use sortlab_core::radix_sort;
///
/// let sorted = radix_sort(&[170, 45, 75, 90, 2, 802, 24, 66]);
/// assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn radix_sort<T: PrimInt>(numbers: &[T]) -> Vec<T> {
    let mut working = numbers.to_vec();
    let passes = max_digit_count(&working);

    for position in 0..passes {
        let mut buckets: [Vec<T>; RADIX] = std::array::from_fn(|_| Vec::new());
        for &n in &working {
            buckets[digit_at(n, position) as usize].push(n);
        }
        working.clear();
        for bucket in buckets {
            working.extend(bucket);
        }
    }

    working
}

/// Like [`radix_sort`], but fails on the first negative value instead of
/// producing a magnitude-only ordering.
pub fn try_radix_sort<T: PrimInt>(numbers: &[T]) -> Result<Vec<T>, SortError> {
    if let Some(index) = numbers.iter().position(|&n| n < T::zero()) {
        return Err(SortError::NegativeRadixInput {
            index,
            value: numbers[index].to_i128().unwrap_or_default(),
        });
    }
    Ok(radix_sort(numbers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_reference_example() {
        let input = [170, 45, 75, 90, 2, 802, 24, 66];
        assert_eq!(radix_sort(&input), vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn radix_empty_and_single() {
        assert!(radix_sort::<u32>(&[]).is_empty());
        assert_eq!(radix_sort(&[5u8]), vec![5]);
    }

    #[test]
    fn radix_all_zero() {
        assert_eq!(radix_sort(&[0, 0, 0]), vec![0, 0, 0]);
    }

    #[test]
    fn radix_mixed_widths_and_duplicates() {
        let input = [1000u64, 1, 10, 100, 1, 0, 999];
        assert_eq!(radix_sort(&input), vec![0, 1, 1, 10, 100, 999, 1000]);
    }

    #[test]
    fn radix_does_not_touch_input() {
        let input = vec![3, 1, 2];
        let _ = radix_sort(&input);
        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn radix_negatives_sort_by_magnitude() {
        // Out of contract: the sign is ignored while bucketing.
        assert_eq!(radix_sort(&[-5i32, 3, -1]), vec![-1, 3, -5]);
    }

    #[test]
    fn try_radix_rejects_first_negative() {
        let err = try_radix_sort(&[4i64, 9, -2, -7]).unwrap_err();
        assert_eq!(
            err,
            SortError::NegativeRadixInput {
                index: 2,
                value: -2
            }
        );
    }

    #[test]
    fn try_radix_accepts_non_negative() {
        assert_eq!(try_radix_sort(&[3i16, 0, 2]).unwrap(), vec![0, 2, 3]);
    }
}
