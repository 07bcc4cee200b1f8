//! Plain-text and JSON renderings of command results.

use serde::Serialize;
use sortlab_core::{digit_at, digit_count, Algorithm, Complexity};

use crate::colors::{bold, gray, status_label};

/// Outcome of one `sortlab sort` run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SortReport {
    pub algorithm: Algorithm,
    pub input_len: usize,
    pub output: Vec<i64>,
    pub elapsed_us: u64,
    /// `Some(true)` when verification ran and passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl SortReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Status line followed by the sorted numbers on one line.
    pub fn render_plain(&self, color: bool) -> String {
        let numbers: Vec<String> = self.output.iter().map(|n| n.to_string()).collect();
        let mut header = format!(
            "{} {} values with {} sort {}",
            status_label("Sorted", color),
            self.input_len,
            bold(self.algorithm.name(), color),
            gray(&format!("({} µs)", self.elapsed_us), color),
        );
        if self.verified == Some(true) {
            header.push_str(&gray(" verified", color));
        }
        format!("{}\n{}", header, numbers.join(" "))
    }
}

/// One row of `sortlab list`.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmInfo {
    pub name: Algorithm,
    pub stable: bool,
    pub in_place: bool,
    pub non_negative_only: bool,
    pub complexity: Complexity,
}

impl From<Algorithm> for AlgorithmInfo {
    fn from(algo: Algorithm) -> Self {
        Self {
            name: algo,
            stable: algo.is_stable(),
            in_place: algo.is_in_place(),
            non_negative_only: algo.requires_non_negative(),
            complexity: algo.complexity(),
        }
    }
}

pub fn algorithm_table() -> Vec<AlgorithmInfo> {
    Algorithm::all().map(AlgorithmInfo::from).collect()
}

pub fn render_algorithm_table(rows: &[AlgorithmInfo], color: bool) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let mut out = bold(
        &format!(
            "{:<10} {:<7} {:<9} {:<11} {:<11} {:<11} {}",
            "algorithm", "stable", "in-place", "best", "average", "worst", "space"
        ),
        color,
    );
    for row in rows {
        let c = row.complexity;
        let mut line = format!(
            "{:<10} {:<7} {:<9} {:<11} {:<11} {:<11} {}",
            row.name.name(),
            yes_no(row.stable),
            yes_no(row.in_place),
            c.best,
            c.average,
            c.worst,
            c.space
        );
        if row.non_negative_only {
            line.push_str(&gray("  (non-negative integers only)", color));
        }
        out.push('\n');
        out.push_str(&line);
    }
    out
}

/// Result of `sortlab digits`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DigitReport {
    pub number: i64,
    pub digit_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Least-significant first. A single entry when `position` is set.
    pub digits: Vec<u8>,
}

impl DigitReport {
    pub fn new(number: i64, position: Option<u32>) -> Self {
        let count = digit_count(number);
        let digits = match position {
            Some(p) => vec![digit_at(number, p)],
            None => (0..count).map(|p| digit_at(number, p)).collect(),
        };
        Self {
            number,
            digit_count: count,
            position,
            digits,
        }
    }

    pub fn render_plain(&self) -> String {
        match self.position {
            Some(p) => format!(
                "{}: digit count {}, digit at position {} is {}",
                self.number, self.digit_count, p, self.digits[0]
            ),
            None => {
                let ds: Vec<String> = self.digits.iter().map(|d| d.to_string()).collect();
                format!(
                    "{}: digit count {}, digits (least significant first) {}",
                    self.number,
                    self.digit_count,
                    ds.join(" ")
                )
            }
        }
    }
}
