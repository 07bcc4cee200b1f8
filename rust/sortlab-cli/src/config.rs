//! Configuration file parsing for `sortlab.toml`.
//!
//! Searches the current directory then its ancestors, falling back to
//! `~/.config/sortlab/sortlab.toml` if no project-level file is found.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sortlab_core::Algorithm;
use tracing::debug;

use crate::error::CliError;

pub const CONFIG_FILE: &str = "sortlab.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SortlabConfig {
    #[serde(default)]
    pub sort: SortSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SortSection {
    /// Algorithm used when `--algorithm` is not given.
    #[serde(default)]
    pub default_algorithm: Algorithm,
    /// Verify every result as if `--check` were passed.
    #[serde(default)]
    pub verify: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

fn default_true() -> bool {
    true
}

impl SortlabConfig {
    /// Load config from `sortlab.toml`, searching current dir then parents.
    /// Returns `Default` when no file is found or the found file is invalid.
    pub fn load() -> Self {
        Self::find_and_load().unwrap_or_default()
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    fn find_and_load() -> Option<Self> {
        let cwd = std::env::current_dir().ok()?;
        let global = dirs::home_dir()
            .map(|home| home.join(".config").join("sortlab").join(CONFIG_FILE));
        let path = Self::locate(&cwd, global.as_deref())?;
        match Self::load_from(&path) {
            Ok(cfg) => {
                debug!(path = %path.display(), "loaded config");
                Some(cfg)
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring unreadable config");
                None
            }
        }
    }

    /// First `sortlab.toml` found walking up from `start`, else `global` if
    /// it exists.
    pub fn locate(start: &Path, global: Option<&Path>) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                break;
            }
        }
        global.filter(|g| g.is_file()).map(Path::to_path_buf)
    }

    /// Generate a default `sortlab.toml` template.
    pub fn default_template() -> &'static str {
        r#"# SortLab Configuration

[sort]
# bubble | insertion | selection | merge | radix
default_algorithm = "merge"
# Verify sortedness and permutation after every sort
verify = false

[output]
# plain | json
format = "plain"
color = true
"#
    }
}
