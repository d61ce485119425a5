// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde_json::Value;

use super::{
    AnagramExercise, FactorsExercise, PalindromeExercise, PeakFinderExercise,
    PermutationsExercise, RunningAverageExercise,
};
use crate::config::consts::THRESHOLD_OPTION;
use crate::config::{ExerciseConfig, ExerciseKind};
use crate::errors::ExerciseCreationError;
use crate::observability::messages::runner::ExerciseInstantiationFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::Exercise;

/// Factory for creating in-process exercise instances
pub struct LocalExerciseFactory;

impl LocalExerciseFactory {
    /// Create an exercise instance from configuration
    ///
    /// The `kind` field in the config determines which exercise to create:
    /// - `running_average` -> RunningAverageExercise
    /// - `peak_finder` -> PeakFinderExercise (optional `threshold` option)
    /// - `palindrome` -> PalindromeExercise
    /// - `anagram` -> AnagramExercise
    /// - `factors` -> FactorsExercise
    /// - `permutations` -> PermutationsExercise
    pub fn create_exercise(config: &ExerciseConfig) -> Result<Arc<dyn Exercise>, ExerciseCreationError> {
        let exercise: Arc<dyn Exercise> = match config.kind {
            ExerciseKind::RunningAverage => Arc::new(RunningAverageExercise::new()),
            ExerciseKind::PeakFinder => {
                let threshold = Self::threshold_option(config)?;
                Arc::new(PeakFinderExercise::new(threshold))
            }
            ExerciseKind::Palindrome => Arc::new(PalindromeExercise::new()),
            ExerciseKind::Anagram => Arc::new(AnagramExercise::new()),
            ExerciseKind::Factors => Arc::new(FactorsExercise::new()),
            ExerciseKind::Permutations => Arc::new(PermutationsExercise::new()),
        };
        Ok(exercise)
    }

    fn threshold_option(config: &ExerciseConfig) -> Result<Option<f64>, ExerciseCreationError> {
        match config.options.get(THRESHOLD_OPTION) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(other) => {
                let reason = format!("option '{}' must be a number, found {}", THRESHOLD_OPTION, other);
                ExerciseInstantiationFailed {
                    exercise_id: &config.id,
                    kind: config.kind.as_str(),
                    reason: &reason,
                }
                .log();
                Err(ExerciseCreationError {
                    exercise_id: config.id.clone(),
                    kind: config.kind.as_str(),
                    reason,
                })
            }
        }
    }

    /// List all available exercise kinds
    pub fn list_available_kinds() -> Vec<&'static str> {
        vec![
            "running_average",
            "peak_finder",
            "palindrome",
            "anagram",
            "factors",
            "permutations",
        ]
    }
}
