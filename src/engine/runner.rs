// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Bounded-concurrency runner for a batch of independent exercises.
//!
//! Exercises never depend on one another and never share state, so the
//! runner simply fans them out onto tokio tasks, limited by a semaphore, and
//! slots each result back into its configuration position.
//!
//! # Failure Strategies
//!
//! - `FailFast`: the first error outcome aborts every outstanding task and
//!   the run returns `RunError::ExerciseFailed`
//! - `ContinueOnError`: error outcomes are kept in the report alongside the
//!   successful ones
//!
//! # Example
//! ```rust
//! use the_workbench::config::{parse_config_str, ConfigFormat, RuntimeBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = parse_config_str(
//!     "exercises:\n  - id: factors\n    kind: factors\n    input: 28\n",
//!     ConfigFormat::Yaml,
//! )?;
//! let (exercises, runner) = RuntimeBuilder::from_config(&config)?;
//!
//! let report = runner.run(exercises).await?;
//! assert_eq!(report.succeeded(), 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::Instrument;

use crate::config::{ConfiguredExercise, ExerciseKind, ExerciseMap};
use crate::errors::{FailureStrategy, RunError};
use crate::observability::messages::runner::{
    ExerciseCompleted, ExerciseFailed, ExerciseStarted, RunAborted, RunCompleted, RunStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{ExerciseRequest, ExerciseResponse, Outcome};

/// What one exercise produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseResult {
    pub id: String,
    pub kind: ExerciseKind,
    pub response: ExerciseResponse,
    pub duration: Duration,
}

/// Results of a run, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub results: Vec<ExerciseResult>,
}

impl RunReport {
    pub fn get(&self, id: &str) -> Option<&ExerciseResult> {
        self.results.iter().find(|r| r.id == id)
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| !r.response.is_error()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.response.is_error()).count()
    }
}

pub struct ExerciseRunner {
    max_concurrency: usize,
    failure_strategy: FailureStrategy,
}

impl ExerciseRunner {
    pub fn new(max_concurrency: usize, failure_strategy: FailureStrategy) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1),
            failure_strategy,
        }
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub fn failure_strategy(&self) -> FailureStrategy {
        self.failure_strategy
    }

    /// Run every exercise and collect the results.
    pub async fn run(&self, exercises: ExerciseMap) -> Result<RunReport, RunError> {
        let started_at = Instant::now();
        let total = exercises.len();

        RunStarted {
            exercise_count: total,
            max_concurrency: self.max_concurrency,
            failure_strategy: self.failure_strategy.as_str(),
        }
        .log();

        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();

        for (position, configured) in exercises.into_iter().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                // The semaphore is never closed, so acquisition only waits.
                let _permit = semaphore.acquire_owned().await.ok();
                (position, run_one(configured).await)
            });
        }

        let mut slots: Vec<Option<ExerciseResult>> = (0..total).map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            let (position, result) = joined.map_err(|e| RunError::InternalError {
                message: format!("Exercise task failed: {}", e),
            })?;

            if let Outcome::Error(detail) = &result.response.outcome {
                ExerciseFailed {
                    exercise_id: &result.id,
                    code: detail.code,
                    message: &detail.message,
                }
                .log();

                if self.failure_strategy == FailureStrategy::FailFast {
                    RunAborted {
                        exercise_id: &result.id,
                        cancelled: tasks.len(),
                    }
                    .log();
                    tasks.abort_all();
                    return Err(RunError::ExerciseFailed {
                        exercise_id: result.id.clone(),
                        message: detail.message.clone(),
                    });
                }
            }

            slots[position] = Some(result);
        }

        let report = RunReport {
            results: slots.into_iter().flatten().collect(),
        };

        RunCompleted {
            succeeded: report.succeeded(),
            failed: report.failed(),
            duration: started_at.elapsed(),
        }
        .log();

        Ok(report)
    }
}

async fn run_one(configured: ConfiguredExercise) -> ExerciseResult {
    let ConfiguredExercise {
        id,
        kind,
        input,
        exercise,
    } = configured;

    let start_msg = ExerciseStarted {
        exercise_id: &id,
        kind: kind.as_str(),
    };
    let span = start_msg.span("exercise_execution");
    start_msg.log();

    let start_time = Instant::now();
    let response = exercise
        .run(ExerciseRequest { input })
        .instrument(span)
        .await;
    let duration = start_time.elapsed();

    if !response.is_error() {
        ExerciseCompleted {
            exercise_id: &id,
            duration,
        }
        .log();
    }

    ExerciseResult {
        id,
        kind,
        response,
        duration,
    }
}
