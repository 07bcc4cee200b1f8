//! Reading integer sequences from arguments, files and stdin.

use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Parse integers separated by commas and/or whitespace.
///
/// Empty tokens (e.g. from `1,,2` or trailing commas) are skipped.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>, CliError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<i64>().map_err(|source| CliError::InvalidNumber {
                token: tok.to_string(),
                source,
            })
        })
        .collect()
}

/// Parse each command-line argument, allowing `3,1,2` inside a single
/// argument as well.
pub fn parse_args(args: &[String]) -> Result<Vec<i64>, CliError> {
    let mut out = Vec::new();
    for arg in args {
        out.extend(parse_numbers(arg)?);
    }
    Ok(out)
}

pub fn read_file(path: &Path) -> Result<Vec<i64>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_numbers(&text)
}

pub fn read_stdin() -> Result<Vec<i64>, CliError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(CliError::Stdin)?;
    parse_numbers(&text)
}
