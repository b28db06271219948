use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BracketGuardError, Result};

/// Default configuration file name, discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = ".bracket-guard.toml";

const fn default_max_line_count() -> usize {
    1000
}

const fn default_max_line_length() -> usize {
    1000
}

fn default_directive() -> String {
    "#define".to_string()
}

fn default_extensions() -> Vec<String> {
    ["cpp", "cc", "cxx", "c", "h", "hpp"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Ceiling on total line count; reaching it aborts all further checks.
    #[serde(default = "default_max_line_count")]
    pub max_line_count: usize,

    /// Ceiling on per-line length, in characters.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Token whose presence on a line is reported as a violation.
    #[serde(default = "default_directive")]
    pub disallowed_directive: String,

    /// File extensions accepted as input.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_count: default_max_line_count(),
            max_line_length: default_max_line_length(),
            disallowed_directive: default_directive(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or fails
    /// semantic validation.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| BracketGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Discover and load `.bracket-guard.toml` from the working directory,
    /// falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate semantic correctness of the configured values.
    ///
    /// # Errors
    /// Returns a `Config` error naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.max_line_count == 0 {
            return Err(BracketGuardError::Config(
                "max_line_count must be greater than 0".to_string(),
            ));
        }
        if self.max_line_length == 0 {
            return Err(BracketGuardError::Config(
                "max_line_length must be greater than 0".to_string(),
            ));
        }
        if self.disallowed_directive.is_empty() {
            return Err(BracketGuardError::Config(
                "disallowed_directive cannot be empty".to_string(),
            ));
        }
        if self.extensions.is_empty() {
            return Err(BracketGuardError::Config(
                "extensions cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `path` carries one of the accepted extensions.
    #[must_use]
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Commented template written by `bracket-guard init`.
    #[must_use]
    pub fn template() -> &'static str {
        r##"# bracket-guard configuration file

# Ceiling on total line count. An input reaching this many lines is
# rejected outright and no bracket analysis is performed.
max_line_count = 1000

# Ceiling on per-line length, in characters.
max_line_length = 1000

# Token whose presence on any line is reported as a violation.
disallowed_directive = "#define"

# File extensions accepted as input.
extensions = ["cpp", "cc", "cxx", "c", "h", "hpp"]
"##
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
