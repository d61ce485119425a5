// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{ExerciseMap, WorkbenchConfig};
use crate::engine::ExerciseRunner;
use crate::errors::ExerciseCreationError;

/// Builds everything needed to run a configuration.
///
/// # Examples
///
/// ```
/// use the_workbench::config::{parse_config_str, ConfigFormat, RuntimeBuilder};
///
/// let config = parse_config_str(
///     "exercises:\n  - id: pal\n    kind: palindrome\n    input: racecar\n",
///     ConfigFormat::Yaml,
/// )
/// .unwrap();
///
/// let (exercises, runner) = RuntimeBuilder::from_config(&config).unwrap();
/// assert_eq!(exercises.len(), 1);
/// assert!(runner.max_concurrency() >= 1);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Instantiate the configured exercises and a runner with the configured
    /// concurrency and failure strategy.
    pub fn from_config(cfg: &WorkbenchConfig) -> Result<(ExerciseMap, ExerciseRunner), ExerciseCreationError> {
        let exercises = ExerciseMap::from_config(cfg)?;
        let runner = ExerciseRunner::new(
            cfg.runner_options.effective_max_concurrency(),
            cfg.failure_strategy,
        );
        Ok((exercises, runner))
    }
}
