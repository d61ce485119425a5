// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{expect_array, respond};
use crate::text::get_permutations;
use crate::traits::{Exercise, ExerciseRequest, ExerciseResponse};

/// Permutations exercise - every ordering of an array of arbitrary values
pub struct PermutationsExercise;

impl PermutationsExercise {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PermutationsExercise {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Exercise for PermutationsExercise {
    async fn run(&self, req: ExerciseRequest) -> ExerciseResponse {
        respond(expect_array(&req.input, "get_permutations").map(get_permutations))
    }

    fn name(&self) -> &'static str {
        "permutations"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Outcome;
    use serde_json::json;

    #[tokio::test]
    async fn test_permutations_of_letters() {
        let response = PermutationsExercise::new()
            .run(ExerciseRequest {
                input: json!(["A", "B", "C"]),
            })
            .await;
        assert_eq!(
            response.outcome,
            Outcome::Output(json!([
                ["A", "B", "C"],
                ["A", "C", "B"],
                ["B", "A", "C"],
                ["B", "C", "A"],
                ["C", "A", "B"],
                ["C", "B", "A"],
            ]))
        );
    }

    #[tokio::test]
    async fn test_mixed_values_and_empty_input() {
        let exercise = PermutationsExercise::new();
        let mixed = exercise.run(ExerciseRequest { input: json!([1, "x"]) }).await;
        let empty = exercise.run(ExerciseRequest { input: json!([]) }).await;
        assert_eq!(mixed.outcome, Outcome::Output(json!([[1, "x"], ["x", 1]])));
        assert_eq!(empty.outcome, Outcome::Output(json!([[]])));
    }
}
