//! SortLab Core
//!
//! Five classic sorting algorithms over in-memory numeric sequences:
//! bubble, insertion and selection sort work in place on the caller's
//! slice; merge and radix sort return a new `Vec` and leave their input
//! untouched.

pub mod algorithm;
pub mod comparison;
pub mod digits;
pub mod error;
pub mod merge;
pub mod radix;
pub mod verify;

pub use algorithm::{Algorithm, Complexity};
pub use comparison::{bubble_sort, insertion_sort, selection_sort};
pub use digits::{digit_at, digit_count, max_digit_count};
pub use error::SortError;
pub use merge::{merge, merge_sort};
pub use radix::{radix_sort, try_radix_sort};
pub use verify::{is_permutation_of, is_sorted};
