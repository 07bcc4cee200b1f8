//! In-place comparison sorts.
//!
//! All three functions sort the caller's slice in ascending order and hand
//! the same slice back. Elements only move by adjacent swaps (bubble,
//! insertion) or a single swap per pass (selection), so the slice always
//! holds a permutation of its original contents.
//!
//! Values that are only partially ordered (e.g. `f64::NAN`) compare false
//! against everything and therefore never move by comparison; callers that
//! need a defined order must filter them out first.

/// Bubble sort. Stable, O(n²) in every case.
///
/// Each outer pass runs to completion even if it performed no swap, so an
/// already sorted input still costs a full quadratic scan.
///
/// ```
/// use sortlab_core::bubble_sort;
///
/// let mut xs = [5, 3, 8, 1];
/// bubble_sort(&mut xs);
/// assert_eq!(xs, [1, 3, 5, 8]);
/// ```
pub fn bubble_sort<T: PartialOrd>(values: &mut [T]) -> &mut [T] {
    for bound in (1..=values.len()).rev() {
        for j in 0..bound - 1 {
            // Strict comparison: equal neighbours never swap.
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
    }
    values
}

/// Insertion sort. Stable, O(n²) worst case, O(n) on sorted input.
///
/// The element at `i` is carried left past every strictly greater
/// predecessor, which shifts those predecessors one slot right.
pub fn insertion_sort<T: PartialOrd>(values: &mut [T]) -> &mut [T] {
    for i in 1..values.len() {
        let mut hole = i;
        while hole > 0 && values[hole - 1] > values[hole] {
            values.swap(hole - 1, hole);
            hole -= 1;
        }
    }
    values
}

/// Selection sort. O(n²) comparisons and at most `n - 1` swaps.
///
/// Not stable in general: the swap that brings the minimum forward can
/// jump an element over its equals. The minimum scan keeps the earliest
/// index on ties, so among equal minimal values the first one encountered
/// is the one selected.
pub fn selection_sort<T: PartialOrd>(values: &mut [T]) -> &mut [T] {
    let len = values.len();
    for i in 0..len {
        let mut lowest = i;
        for j in i + 1..len {
            if values[lowest] > values[j] {
                lowest = j;
            }
        }
        if lowest != i {
            values.swap(i, lowest);
        }
    }
    values
}
