//! Command implementations. Each returns the text to print on stdout so the
//! binary stays a thin dispatcher.

use std::path::{Path, PathBuf};
use std::time::Instant;

use sortlab_core::{is_permutation_of, is_sorted, Algorithm};
use tracing::{debug, info};

use crate::config::{OutputFormat, SortlabConfig, CONFIG_FILE};
use crate::error::CliError;
use crate::input;
use crate::report::{algorithm_table, render_algorithm_table, DigitReport, SortReport};

// =============================================================================
// sort
// =============================================================================

/// Where the numbers come from and how to sort them.
#[derive(Debug, Clone, Default)]
pub struct SortArgs {
    /// Positional numbers; take priority over `input`.
    pub numbers: Vec<String>,
    pub input: Option<PathBuf>,
    pub algorithm: Option<Algorithm>,
    pub json: bool,
    pub check: bool,
}

impl SortArgs {
    fn read_values(&self) -> Result<Vec<i64>, CliError> {
        if !self.numbers.is_empty() {
            input::parse_args(&self.numbers)
        } else if let Some(path) = &self.input {
            input::read_file(path)
        } else {
            input::read_stdin()
        }
    }
}

pub fn run_sort(args: &SortArgs, config: &SortlabConfig) -> Result<SortReport, CliError> {
    let values = args.read_values()?;
    let algorithm = args.algorithm.unwrap_or(config.sort.default_algorithm);
    let verify = args.check || config.sort.verify;
    let input_len = values.len();
    info!(%algorithm, len = input_len, "sorting");

    let original = verify.then(|| values.clone());
    let start = Instant::now();
    let output = algorithm.sort_values(values)?;
    let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    debug!(elapsed_us, "sort finished");

    let verified = match original {
        Some(original) => {
            verify_result(algorithm, &original, &output)?;
            Some(true)
        }
        None => None,
    };

    Ok(SortReport {
        algorithm,
        input_len,
        output,
        elapsed_us,
        verified,
    })
}

fn verify_result(algorithm: Algorithm, input: &[i64], output: &[i64]) -> Result<(), CliError> {
    if !is_sorted(output) {
        return Err(CliError::CheckFailed {
            algorithm: algorithm.to_string(),
            reason: "output is not in ascending order",
        });
    }
    if !is_permutation_of(output, input) {
        return Err(CliError::CheckFailed {
            algorithm: algorithm.to_string(),
            reason: "output is not a permutation of the input",
        });
    }
    Ok(())
}

pub fn cmd_sort(args: &SortArgs, config: &SortlabConfig, color: bool) -> Result<String, CliError> {
    let report = run_sort(args, config)?;
    if wants_json(args.json, config) {
        Ok(report.to_json()?)
    } else {
        Ok(report.render_plain(color))
    }
}

// =============================================================================
// list / digits / init
// =============================================================================

/// `--json` or `[output] format = "json"`. Applies to every command.
pub fn wants_json(flag: bool, config: &SortlabConfig) -> bool {
    flag || config.output.format == OutputFormat::Json
}

pub fn cmd_list(json: bool, config: &SortlabConfig, color: bool) -> Result<String, CliError> {
    let rows = algorithm_table();
    if wants_json(json, config) {
        Ok(serde_json::to_string_pretty(&rows)?)
    } else {
        Ok(render_algorithm_table(&rows, color))
    }
}

pub fn cmd_digits(
    number: i64,
    position: Option<u32>,
    json: bool,
    config: &SortlabConfig,
) -> Result<String, CliError> {
    let report = DigitReport::new(number, position);
    if wants_json(json, config) {
        Ok(serde_json::to_string(&report)?)
    } else {
        Ok(report.render_plain())
    }
}

/// Write a `sortlab.toml` template into `dir`. Refuses to overwrite.
pub fn cmd_init(dir: &Path) -> Result<PathBuf, CliError> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Err(CliError::AlreadyExists(path));
    }
    std::fs::write(&path, SortlabConfig::default_template()).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote config template");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(nums: &[&str]) -> SortArgs {
        SortArgs {
            numbers: nums.iter().map(|s| s.to_string()).collect(),
            ..SortArgs::default()
        }
    }

    #[test]
    fn sort_uses_config_default_algorithm() {
        let mut cfg = SortlabConfig::default();
        cfg.sort.default_algorithm = Algorithm::Insertion;
        let report = run_sort(&args(&["5", "3", "8", "1"]), &cfg).unwrap();
        assert_eq!(report.algorithm, Algorithm::Insertion);
        assert_eq!(report.output, vec![1, 3, 5, 8]);
        assert_eq!(report.input_len, 4);
        assert_eq!(report.verified, None);
    }

    #[test]
    fn explicit_algorithm_wins() {
        let mut a = args(&["4,4,2"]);
        a.algorithm = Some(Algorithm::Selection);
        let report = run_sort(&a, &SortlabConfig::default()).unwrap();
        assert_eq!(report.algorithm, Algorithm::Selection);
        assert_eq!(report.output, vec![2, 4, 4]);
    }

    #[test]
    fn check_marks_report_verified() {
        let mut a = args(&["9", "1", "5", "3", "7"]);
        a.check = true;
        let report = run_sort(&a, &SortlabConfig::default()).unwrap();
        assert_eq!(report.verified, Some(true));
    }

    #[test]
    fn config_verify_enables_check() {
        let mut cfg = SortlabConfig::default();
        cfg.sort.verify = true;
        let report = run_sort(&args(&["2", "1"]), &cfg).unwrap();
        assert_eq!(report.verified, Some(true));
    }

    #[test]
    fn radix_with_negative_input_fails() {
        let mut a = args(&["3", "-1"]);
        a.algorithm = Some(Algorithm::Radix);
        let err = run_sort(&a, &SortlabConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Sort(_)));
    }

    #[test]
    fn sort_reads_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "170 45 75 90 2 802 24 66").unwrap();
        let a = SortArgs {
            input: Some(path),
            algorithm: Some(Algorithm::Radix),
            ..SortArgs::default()
        };
        let report = run_sort(&a, &SortlabConfig::default()).unwrap();
        assert_eq!(report.output, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn json_output_from_flag_or_config() {
        let mut a = args(&["2", "1"]);
        a.json = true;
        let out = cmd_sort(&a, &SortlabConfig::default(), false).unwrap();
        assert!(out.starts_with('{'));

        let mut cfg = SortlabConfig::default();
        cfg.output.format = OutputFormat::Json;
        let out = cmd_sort(&args(&["2", "1"]), &cfg, false).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["output"], serde_json::json!([1, 2]));
    }

    #[test]
    fn verify_result_detects_problems() {
        assert!(verify_result(Algorithm::Merge, &[2, 1], &[1, 2]).is_ok());
        assert!(matches!(
            verify_result(Algorithm::Merge, &[2, 1], &[2, 1]),
            Err(CliError::CheckFailed { .. })
        ));
        assert!(matches!(
            verify_result(Algorithm::Merge, &[2, 1], &[1, 1]),
            Err(CliError::CheckFailed { .. })
        ));
    }

    #[test]
    fn list_json_is_an_array_of_five() {
        let out = cmd_list(true, &SortlabConfig::default(), false).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v.as_array().map(|a| a.len()), Some(5));
        assert_eq!(v[0]["name"], "bubble");
        assert_eq!(v[3]["complexity"]["worst"], "O(n log n)");
    }

    #[test]
    fn digits_json() {
        let out = cmd_digits(9805, Some(0), true, &SortlabConfig::default()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["digits"], serde_json::json!([5]));
        assert_eq!(v["digit_count"], 4);
    }

    #[test]
    fn config_json_format_applies_to_list_and_digits() {
        let mut cfg = SortlabConfig::default();
        cfg.output.format = OutputFormat::Json;

        let out = cmd_list(false, &cfg, false).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v.as_array().map(|a| a.len()), Some(5));

        let out = cmd_digits(9805, None, false, &cfg).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["digits"], serde_json::json!([5, 0, 8, 9]));

        let plain = cmd_digits(9805, None, false, &SortlabConfig::default()).unwrap();
        assert!(plain.starts_with("9805: digit count 4"));
    }

    #[test]
    fn init_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = cmd_init(dir.path()).unwrap();
        assert!(path.is_file());
        let cfg = SortlabConfig::load_from(&path).unwrap();
        assert_eq!(cfg, SortlabConfig::default());
        assert!(matches!(
            cmd_init(dir.path()),
            Err(CliError::AlreadyExists(_))
        ));
    }
}
