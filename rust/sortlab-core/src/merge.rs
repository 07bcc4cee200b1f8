//! Two-way merge and top-down merge sort.

/// Merges two ascending slices into a new ascending `Vec`.
///
/// The left head is emitted only when the right head is strictly greater.
/// On equal values the element from `right` therefore comes out first,
/// which is the reverse of the usual stable merge and makes [`merge_sort`]
/// unstable for equal keys. Callers depend on this exact ordering, so it is
/// kept as is.
///
/// ```
/// use sortlab_core::merge;
///
/// assert_eq!(merge(&[2, 4], &[2, 5]), vec![2, 2, 4, 5]);
/// ```
pub fn merge<T: PartialOrd + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if right[j] > left[i] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Sorts `values` into a new `Vec`, leaving the input untouched.
///
/// Splits at `len / 2`, sorts both halves recursively and combines them
/// with [`merge`]. O(n log n) time; recursion depth is O(log n).
pub fn merge_sort<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }
    let (left, right) = values.split_at(values.len() / 2);
    merge(&merge_sort(left), &merge_sort(right))
}
