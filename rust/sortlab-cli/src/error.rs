//! CLI error type and cause-chain rendering.
//!
//! `CliError` carries the typed failure; `ErrorChain` flattens it and its
//! `source()` chain into the indented "caused by:" form printed on stderr.

use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use sortlab_core::SortError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read standard input")]
    Stdin(#[source] std::io::Error),

    #[error("cannot determine the current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("'{token}' is not an integer")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid config '{}'", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{} already exists, not overwriting", .0.display())]
    AlreadyExists(PathBuf),

    #[error("cannot encode report as JSON")]
    Json(#[from] serde_json::Error),

    #[error("sort failed")]
    Sort(#[from] SortError),

    #[error("{algorithm} sort produced an incorrect result: {reason}")]
    CheckFailed {
        algorithm: String,
        reason: &'static str,
    },
}

// =============================================================================
// ErrorChain
// =============================================================================

/// A primary message plus the ordered causes beneath it.
#[derive(Debug, Clone)]
pub struct ErrorChain {
    pub primary: String,
    /// Outermost first.
    pub causes: Vec<String>,
}

impl ErrorChain {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            causes: Vec::new(),
        }
    }

    /// Walk a `std::error::Error` source chain and collect every message.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let mut chain = ErrorChain::new(err.to_string());
        let mut source = err.source();
        while let Some(cause) = source {
            chain.causes.push(cause.to_string());
            source = cause.source();
        }
        chain
    }
}

/// Renders as:
///
/// ```text
/// <primary message>
///   caused by: <cause 1>
/// ```
impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        for cause in &self.causes {
            write!(f, "\n  caused by: {}", cause)?;
        }
        Ok(())
    }
}

impl From<&CliError> for ErrorChain {
    fn from(err: &CliError) -> Self {
        ErrorChain::from_error(err)
    }
}
