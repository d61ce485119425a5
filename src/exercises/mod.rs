// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process exercises wrapping the sequence and text algorithms.

pub mod anagram;
pub mod factors;
pub mod factory;
pub mod palindrome;
pub mod peak_finder;
pub mod permutations;
pub mod running_average;

pub use anagram::AnagramExercise;
pub use factors::FactorsExercise;
pub use factory::LocalExerciseFactory;
pub use palindrome::PalindromeExercise;
pub use peak_finder::PeakFinderExercise;
pub use permutations::PermutationsExercise;
pub use running_average::RunningAverageExercise;

use serde::Serialize;
use serde_json::Value;

use crate::errors::InvalidInputError;
use crate::traits::{ExerciseResponse, ERROR_CODE_INTERNAL, ERROR_CODE_INVALID_INPUT};

/// Turn an algorithm result into a response.
fn respond<T: Serialize>(result: Result<T, InvalidInputError>) -> ExerciseResponse {
    match result {
        Ok(output) => match serde_json::to_value(output) {
            Ok(value) => ExerciseResponse::output(value),
            Err(e) => ExerciseResponse::error(
                ERROR_CODE_INTERNAL,
                format!("Failed to serialize result: {}", e),
            ),
        },
        Err(e) => ExerciseResponse::error(ERROR_CODE_INVALID_INPUT, e.to_string()),
    }
}

fn expect_array<'a>(input: &'a Value, operation: &'static str) -> Result<&'a [Value], InvalidInputError> {
    input
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| InvalidInputError::new(operation, input.to_string(), "expected an array"))
}

fn expect_str<'a>(input: &'a Value, operation: &'static str) -> Result<&'a str, InvalidInputError> {
    input
        .as_str()
        .ok_or_else(|| InvalidInputError::new(operation, input.to_string(), "expected a string"))
}
