// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{expect_array, respond};
use crate::errors::InvalidInputError;
use crate::sequence::SequenceProcessor;
use crate::traits::{Exercise, ExerciseRequest, ExerciseResponse};

/// Running Average exercise - prefix means of a numeric array
pub struct RunningAverageExercise;

impl RunningAverageExercise {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RunningAverageExercise {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Exercise for RunningAverageExercise {
    async fn run(&self, req: ExerciseRequest) -> ExerciseResponse {
        respond(expect_array(&req.input, "ingest").and_then(|values| {
            let mut processor = SequenceProcessor::new();
            processor.ingest(values)?;

            // JSON has no encoding for inf or NaN; serde_json would emit null.
            let averages = processor.running_averages();
            match averages.iter().position(|average| !average.is_finite()) {
                Some(index) => Err(InvalidInputError::new(
                    "running_averages",
                    req.input.to_string(),
                    format!("average at index {} is not finite", index),
                )),
                None => Ok(averages),
            }
        }))
    }

    fn name(&self) -> &'static str {
        "running_average"
    }
}
