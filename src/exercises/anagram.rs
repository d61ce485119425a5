// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{expect_array, expect_str, respond};
use crate::errors::InvalidInputError;
use crate::text::are_anagrams;
use crate::traits::{Exercise, ExerciseRequest, ExerciseResponse};

const ARE_ANAGRAMS: &str = "are_anagrams";

/// Anagram exercise - input is a pair `[a, b]` of strings
pub struct AnagramExercise;

impl AnagramExercise {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnagramExercise {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Exercise for AnagramExercise {
    async fn run(&self, req: ExerciseRequest) -> ExerciseResponse {
        let result = expect_array(&req.input, ARE_ANAGRAMS).and_then(|pair| match pair {
            [a, b] => Ok(are_anagrams(expect_str(a, ARE_ANAGRAMS)?, expect_str(b, ARE_ANAGRAMS)?)),
            _ => Err(InvalidInputError::new(
                ARE_ANAGRAMS,
                req.input.to_string(),
                format!("expected exactly 2 strings, found {}", pair.len()),
            )),
        });
        respond(result)
    }

    fn name(&self) -> &'static str {
        "anagram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Outcome;
    use serde_json::json;

    #[tokio::test]
    async fn test_anagram_pairs() {
        let exercise = AnagramExercise::new();
        let cases = vec![
            (json!(["listen", "silent"]), true),
            (json!(["Astronomer", "Moon starer"]), true),
            (json!(["", ""]), false),
            (json!(["abc", "abcd"]), false),
        ];

        for (input, expected) in cases {
            let response = exercise.run(ExerciseRequest { input: input.clone() }).await;
            assert_eq!(
                response.outcome,
                Outcome::Output(json!(expected)),
                "Failed for input: {}",
                input
            );
        }
    }

    #[tokio::test]
    async fn test_wrong_arity() {
        let response = AnagramExercise::new()
            .run(ExerciseRequest {
                input: json!(["one", "two", "three"]),
            })
            .await;
        match response.outcome {
            Outcome::Error(detail) => assert!(detail.message.contains("expected exactly 2 strings, found 3")),
            other => panic!("Expected error outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_string_member() {
        let response = AnagramExercise::new()
            .run(ExerciseRequest { input: json!(["abc", 123]) })
            .await;
        assert!(response.is_error());
    }
}
