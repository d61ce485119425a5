// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation warnings and errors.
//!
//! This module contains message types for logging events related to:
//! * Validation lifecycle
//! * Duplicate and empty exercise IDs
//! * Unusable exercise options

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration validation started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_workbench::observability::messages::validation::ValidationStarted;
///
/// let msg = ValidationStarted {
///     exercise_count: 6,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ValidationStarted {
    pub exercise_count: usize,
}

impl Display for ValidationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting configuration validation for {} exercises",
            self.exercise_count
        )
    }
}

impl StructuredLog for ValidationStarted {
    fn log(&self) {
        tracing::info!(exercise_count = self.exercise_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            exercise_count = self.exercise_count,
        )
    }
}

/// Configuration validation finished.
///
/// # Log Level
/// `info!` when clean, `error!` when problems were found
pub struct ValidationCompleted {
    pub exercise_count: usize,
    pub error_count: usize,
}

impl Display for ValidationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.error_count > 0 {
            write!(
                f,
                "Configuration validation failed for {} exercises with {} errors",
                self.exercise_count, self.error_count
            )
        } else {
            write!(
                f,
                "Configuration validation completed successfully for {} exercises",
                self.exercise_count
            )
        }
    }
}

impl StructuredLog for ValidationCompleted {
    fn log(&self) {
        if self.error_count > 0 {
            tracing::error!(
                exercise_count = self.exercise_count,
                error_count = self.error_count,
                "{}", self
            );
        } else {
            tracing::info!(
                exercise_count = self.exercise_count,
                error_count = self.error_count,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            exercise_count = self.exercise_count,
            error_count = self.error_count,
        )
    }
}

/// Duplicate exercise ID detected in configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_workbench::observability::messages::validation::DuplicateExerciseId;
///
/// let msg = DuplicateExerciseId {
///     exercise_id: "peaks",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateExerciseId<'a> {
    pub exercise_id: &'a str,
}

impl Display for DuplicateExerciseId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate exercise ID: '{}'", self.exercise_id)
    }
}

impl StructuredLog for DuplicateExerciseId<'_> {
    fn log(&self) {
        tracing::error!(exercise_id = self.exercise_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            exercise_id = self.exercise_id,
        )
    }
}

/// Exercise declared with an empty or whitespace-only ID.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct EmptyExerciseId {
    pub position: usize,
}

impl Display for EmptyExerciseId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Exercise #{} has an empty ID", self.position)
    }
}

impl StructuredLog for EmptyExerciseId {
    fn log(&self) {
        tracing::error!(position = self.position, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            position = self.position,
        )
    }
}

/// An exercise option carries a value that cannot be used.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct InvalidExerciseOption<'a> {
    pub exercise_id: &'a str,
    pub option: &'a str,
    pub reason: &'a str,
}

impl Display for InvalidExerciseOption<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Exercise '{}' has invalid option '{}': {}",
            self.exercise_id, self.option, self.reason
        )
    }
}

impl StructuredLog for InvalidExerciseOption<'_> {
    fn log(&self) {
        tracing::error!(
            exercise_id = self.exercise_id,
            option = self.option,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            exercise_id = self.exercise_id,
            option = self.option,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_id_message_matches_validation_error() {
        let msg = EmptyExerciseId { position: 2 };
        let err = crate::errors::ValidationError::EmptyExerciseId { position: 2 };
        assert_eq!(msg.to_string(), err.to_string());
    }
}
