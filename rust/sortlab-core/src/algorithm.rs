use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::debug;

use crate::comparison::{bubble_sort, insertion_sort, selection_sort};
use crate::error::SortError;
use crate::merge::merge_sort;
use crate::radix::try_radix_sort;

/// The five sorting algorithms this crate implements.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    #[default]
    Merge,
    Radix,
}

/// Asymptotic cost of an algorithm, in big-O notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    /// Auxiliary space.
    pub space: &'static str,
}

impl Algorithm {
    /// Parse an algorithm name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, SortError> {
        name.trim()
            .parse()
            .map_err(|_| SortError::UnknownAlgorithm(name.to_string()))
    }

    pub fn all() -> impl Iterator<Item = Algorithm> {
        Algorithm::iter()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns true if equal elements keep their input order.
    ///
    /// Merge sort is unstable here because its merge emits the right-hand
    /// element first on ties.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Radix
        )
    }

    /// Returns true if the algorithm sorts the caller's storage rather than
    /// allocating a new sequence.
    pub fn is_in_place(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Selection
        )
    }

    /// Radix sort only accepts non-negative integers.
    pub fn requires_non_negative(self) -> bool {
        self == Algorithm::Radix
    }

    pub fn complexity(self) -> Complexity {
        match self {
            // No early exit, so sorted input still costs a full scan.
            Algorithm::Bubble => Complexity {
                best: "O(n^2)",
                average: "O(n^2)",
                worst: "O(n^2)",
                space: "O(1)",
            },
            Algorithm::Insertion => Complexity {
                best: "O(n)",
                average: "O(n^2)",
                worst: "O(n^2)",
                space: "O(1)",
            },
            Algorithm::Selection => Complexity {
                best: "O(n^2)",
                average: "O(n^2)",
                worst: "O(n^2)",
                space: "O(1)",
            },
            Algorithm::Merge => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            Algorithm::Radix => Complexity {
                best: "O(nk)",
                average: "O(nk)",
                worst: "O(nk)",
                space: "O(n + k)",
            },
        }
    }

    /// Sort `values` ascending with this algorithm.
    ///
    /// In-place algorithms reorder the vector's own buffer; merge and radix
    /// sort build a fresh vector. Radix sort rejects negative input.
    pub fn sort_values(self, mut values: Vec<i64>) -> Result<Vec<i64>, SortError> {
        debug!(algorithm = %self, len = values.len(), "sorting values");
        match self {
            Algorithm::Bubble => {
                bubble_sort(&mut values);
                Ok(values)
            }
            Algorithm::Insertion => {
                insertion_sort(&mut values);
                Ok(values)
            }
            Algorithm::Selection => {
                selection_sort(&mut values);
                Ok(values)
            }
            Algorithm::Merge => Ok(merge_sort(&values)),
            Algorithm::Radix => try_radix_sort(&values),
        }
    }
}
