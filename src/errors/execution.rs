// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use thiserror::Error;

/// How the runner reacts when an exercise reports an error.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    /// Abort outstanding exercises and return the first failure
    #[default]
    FailFast,
    /// Record the failure in the report and keep going
    ContinueOnError,
}

impl FailureStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureStrategy::FailFast => "fail_fast",
            FailureStrategy::ContinueOnError => "continue_on_error",
        }
    }
}

/// Errors surfaced by the exercise runner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunError {
    /// An exercise returned an error outcome under `FailFast`
    #[error("Exercise '{exercise_id}' failed: {message}")]
    ExerciseFailed { exercise_id: String, message: String },

    /// A spawned exercise task panicked or was cancelled
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Failure turning an exercise configuration into a runnable exercise.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to create '{kind}' exercise '{exercise_id}': {reason}")]
pub struct ExerciseCreationError {
    pub exercise_id: String,
    pub kind: &'static str,
    pub reason: String,
}
