// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the exercise runner.
//!
//! This module contains message types for logging events related to:
//! * Run lifecycle (start, completion, abort)
//! * Individual exercise execution (start, completion, failure)
//! * Exercise instantiation from configuration

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A batch of exercises is about to run.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RunStarted<'a> {
    pub exercise_count: usize,
    pub max_concurrency: usize,
    pub failure_strategy: &'a str,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting run: {} exercises, max_concurrency={}, failure_strategy={}",
            self.exercise_count, self.max_concurrency, self.failure_strategy
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            exercise_count = self.exercise_count,
            max_concurrency = self.max_concurrency,
            failure_strategy = self.failure_strategy,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run",
            span_name = name,
            exercise_count = self.exercise_count,
            max_concurrency = self.max_concurrency,
            failure_strategy = self.failure_strategy,
        )
    }
}

/// Every exercise in the batch finished.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_workbench::observability::messages::runner::RunCompleted;
/// use std::time::Duration;
///
/// let msg = RunCompleted {
///     succeeded: 5,
///     failed: 1,
///     duration: Duration::from_millis(3),
/// };
///
/// assert_eq!(msg.to_string(), "Run completed: 5 succeeded, 1 failed in 3ms");
/// ```
pub struct RunCompleted {
    pub succeeded: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl Display for RunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Run completed: {} succeeded, {} failed in {:?}",
            self.succeeded, self.failed, self.duration
        )
    }
}

impl StructuredLog for RunCompleted {
    fn log(&self) {
        tracing::info!(
            succeeded = self.succeeded,
            failed = self.failed,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run",
            span_name = name,
            succeeded = self.succeeded,
            failed = self.failed,
        )
    }
}

/// The run stopped early under `fail_fast`.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RunAborted<'a> {
    pub exercise_id: &'a str,
    pub cancelled: usize,
}

impl Display for RunAborted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Run aborted after exercise '{}' failed: {} exercises cancelled",
            self.exercise_id, self.cancelled
        )
    }
}

impl StructuredLog for RunAborted<'_> {
    fn log(&self) {
        tracing::error!(
            exercise_id = self.exercise_id,
            cancelled = self.cancelled,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "run",
            span_name = name,
            exercise_id = self.exercise_id,
        )
    }
}

/// One exercise started.
///
/// # Log Level
/// `debug!` - Per-exercise detail
pub struct ExerciseStarted<'a> {
    pub exercise_id: &'a str,
    pub kind: &'a str,
}

impl Display for ExerciseStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Exercise '{}' ({}) started", self.exercise_id, self.kind)
    }
}

impl StructuredLog for ExerciseStarted<'_> {
    fn log(&self) {
        tracing::debug!(exercise_id = self.exercise_id, kind = self.kind, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "exercise",
            span_name = name,
            exercise_id = self.exercise_id,
            kind = self.kind,
        )
    }
}

/// One exercise produced an output.
///
/// # Log Level
/// `debug!` - Per-exercise detail
pub struct ExerciseCompleted<'a> {
    pub exercise_id: &'a str,
    pub duration: Duration,
}

impl Display for ExerciseCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Exercise '{}' completed in {:?}",
            self.exercise_id, self.duration
        )
    }
}

impl StructuredLog for ExerciseCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            exercise_id = self.exercise_id,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("exercise", span_name = name, exercise_id = self.exercise_id)
    }
}

/// One exercise returned an error outcome.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_workbench::observability::messages::runner::ExerciseFailed;
///
/// let msg = ExerciseFailed {
///     exercise_id: "factors_of_zero",
///     code: 400,
///     message: "find_factors: invalid input 0: must be positive",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ExerciseFailed<'a> {
    pub exercise_id: &'a str,
    pub code: i32,
    pub message: &'a str,
}

impl Display for ExerciseFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Exercise '{}' failed (code {}): {}",
            self.exercise_id, self.code, self.message
        )
    }
}

impl StructuredLog for ExerciseFailed<'_> {
    fn log(&self) {
        tracing::error!(
            exercise_id = self.exercise_id,
            code = self.code,
            message = self.message,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "exercise",
            span_name = name,
            exercise_id = self.exercise_id,
            code = self.code,
        )
    }
}

/// The factory could not build an exercise from its configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ExerciseInstantiationFailed<'a> {
    pub exercise_id: &'a str,
    pub kind: &'a str,
    pub reason: &'a str,
}

impl Display for ExerciseInstantiationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to instantiate exercise '{}' of kind '{}': {}",
            self.exercise_id, self.kind, self.reason
        )
    }
}

impl StructuredLog for ExerciseInstantiationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            exercise_id = self.exercise_id,
            kind = self.kind,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "factory",
            span_name = name,
            exercise_id = self.exercise_id,
            kind = self.kind,
        )
    }
}
