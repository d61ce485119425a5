// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::respond;
use crate::text::find_factors_of_value;
use crate::traits::{Exercise, ExerciseRequest, ExerciseResponse};

/// Factors exercise - every divisor of a positive integer
pub struct FactorsExercise;

impl FactorsExercise {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FactorsExercise {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Exercise for FactorsExercise {
    async fn run(&self, req: ExerciseRequest) -> ExerciseResponse {
        respond(find_factors_of_value(&req.input))
    }

    fn name(&self) -> &'static str {
        "factors"
    }
}
