//! SortLab CLI library.
//!
//! Input parsing, configuration, reporting and the command implementations
//! behind the `sortlab` binary.

pub mod colors;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
