use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional YAML configuration. Every key may be omitted.
///
/// ```yaml
/// words_csv: data/words.csv
/// normalized_csv: data/words2.csv
/// default_categories: [time, manmade]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct JapankiConfig {
    /// Vocabulary table read by `show` and used as `normalize` input
    pub words_csv: PathBuf,

    /// Where `normalize` writes its output
    pub normalized_csv: PathBuf,

    /// Categories `show` uses when none are given on the command line
    pub default_categories: Vec<String>,
}

impl Default for JapankiConfig {
    fn default() -> Self {
        Self {
            words_csv: PathBuf::from("data/words.csv"),
            normalized_csv: PathBuf::from("data/words2.csv"),
            default_categories: Vec::new(),
        }
    }
}

impl JapankiConfig {
    /// Built-in defaults when `path` is `None`
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|e| {
            CliError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
