// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while validating a loaded workbench configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two exercises share the same id
    #[error("Duplicate exercise ID: '{exercise_id}'")]
    DuplicateExerciseId { exercise_id: String },

    /// An exercise was declared with an empty or whitespace-only id
    #[error("Exercise #{position} has an empty ID")]
    EmptyExerciseId { position: usize },

    /// An option carries a value the exercise cannot use
    #[error("Exercise '{exercise_id}' has invalid option '{option}': {reason}")]
    InvalidOption {
        exercise_id: String,
        option: String,
        reason: String,
    },
}

/// Errors raised while reading a configuration file from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported config format '{0}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("Configuration validation failed:\n{}", join_lines(.0))]
    Validation(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
