// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_MAX_CONCURRENCY;
use crate::errors::{ConfigError, FailureStrategy};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Top-level configuration: a batch of exercises and how to run them.
///
/// # Example
/// ```yaml
/// failure_strategy: continue_on_error
/// runner_options:
///   max_concurrency: 2
/// exercises:
///   - id: averages
///     kind: running_average
///     input: [1, 3, 2, 4]
///   - id: peaks
///     kind: peak_finder
///     input: [1, 3, 2, 4, 1]
///     options:
///       threshold: 3.0
/// ```
#[derive(Debug, Deserialize)]
pub struct WorkbenchConfig {
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub runner_options: RunnerOptions,
    pub exercises: Vec<ExerciseConfig>,
}

/// Runner tuning. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct RunnerOptions {
    pub max_concurrency: Option<usize>,
}

impl RunnerOptions {
    /// Configured concurrency, else the machine's parallelism, never below 1.
    pub fn effective_max_concurrency(&self) -> usize {
        self.max_concurrency
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(DEFAULT_MAX_CONCURRENCY)
            })
            .max(1)
    }
}

/// Which algorithm an exercise runs.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    RunningAverage,
    PeakFinder,
    Palindrome,
    Anagram,
    Factors,
    Permutations,
}

impl ExerciseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::RunningAverage => "running_average",
            ExerciseKind::PeakFinder => "peak_finder",
            ExerciseKind::Palindrome => "palindrome",
            ExerciseKind::Anagram => "anagram",
            ExerciseKind::Factors => "factors",
            ExerciseKind::Permutations => "permutations",
        }
    }

    /// Option keys this kind understands.
    pub fn supported_options(&self) -> &'static [&'static str] {
        match self {
            ExerciseKind::PeakFinder => &[crate::config::consts::THRESHOLD_OPTION],
            _ => &[],
        }
    }
}

/// A single exercise: an id, the algorithm, its input and options.
///
/// `input` is kept dynamically typed so that bad data in a config file
/// surfaces as the algorithm's own input error rather than a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseConfig {
    pub id: String,
    pub kind: ExerciseKind,
    #[serde(default)]
    pub input: Value,
    #[serde(default)]
    pub options: HashMap<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a config document that is already in memory.
pub fn parse_config_str(content: &str, format: ConfigFormat) -> Result<WorkbenchConfig, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<WorkbenchConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&content, format)
}

/// Load a config and reject it if validation finds any problem.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<WorkbenchConfig, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
exercises:
  - id: averages
    kind: running_average
    input: [1, 2.5, 3]
  - id: peaks
    kind: peak_finder
    input: [1, 3, 1]
    options:
      threshold: 2
"#;

        let cfg = parse_config_str(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.failure_strategy, FailureStrategy::FailFast);
        assert_eq!(cfg.runner_options.max_concurrency, None);
        assert_eq!(cfg.exercises.len(), 2);
        assert_eq!(cfg.exercises[0].kind, ExerciseKind::RunningAverage);
        assert_eq!(cfg.exercises[0].input, json!([1, 2.5, 3]));
        assert_eq!(cfg.exercises[1].options.get("threshold"), Some(&json!(2)));
    }

    #[test]
    fn parse_toml_config() {
        let toml = r#"
failure_strategy = "continue_on_error"

[runner_options]
max_concurrency = 3

[[exercises]]
id = "anagram"
kind = "anagram"
input = ["listen", "silent"]
"#;

        let cfg = parse_config_str(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.failure_strategy, FailureStrategy::ContinueOnError);
        assert_eq!(cfg.runner_options.effective_max_concurrency(), 3);
        assert_eq!(cfg.exercises[0].input, json!(["listen", "silent"]));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let yaml = r#"
exercises:
  - id: game
    kind: hangman
"#;
        let err = parse_config_str(yaml, ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn missing_input_defaults_to_null() {
        let yaml = r#"
exercises:
  - id: empty
    kind: palindrome
"#;
        let cfg = parse_config_str(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.exercises[0].input, Value::Null);
    }

    #[test]
    fn effective_max_concurrency_is_at_least_one() {
        let options = RunnerOptions {
            max_concurrency: Some(0),
        };
        assert_eq!(options.effective_max_concurrency(), 1);
        assert!(RunnerOptions::default().effective_max_concurrency() >= 1);
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "exercises:\n  - id: factors\n    kind: factors\n    input: 28\n"
        )
        .unwrap();

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.exercises[0].id, "factors");
    }

    #[test]
    fn test_load_and_validate_duplicate_ids() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        write!(
            file,
            "exercises:\n  - id: a\n    kind: palindrome\n  - id: a\n    kind: anagram\n"
        )
        .unwrap();

        let err = load_and_validate_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate exercise ID: 'a'"));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }
}
