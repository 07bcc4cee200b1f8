//! Checks for the two properties every sort output must satisfy.

/// Returns true if every adjacent pair satisfies `a <= b`.
pub fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Returns true if `output` holds exactly the same multiset of values as
/// `input`.
pub fn is_permutation_of<T: Ord + Clone>(output: &[T], input: &[T]) -> bool {
    if output.len() != input.len() {
        return false;
    }
    let mut a = output.to_vec();
    let mut b = input.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
