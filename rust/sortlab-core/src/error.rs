use thiserror::Error;

/// Errors raised by the checked sorting entry points.
///
/// The algorithms themselves are total over well-formed input; these
/// variants only describe input that falls outside an algorithm's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Radix sort buckets by magnitude, so a negative value would be
    /// placed among positives of equal magnitude.
    #[error("radix sort requires non-negative integers, found {value} at index {index}")]
    NegativeRadixInput { index: usize, value: i128 },

    #[error("unknown algorithm '{0}' (expected one of: bubble, insertion, selection, merge, radix)")]
    UnknownAlgorithm(String),
}
